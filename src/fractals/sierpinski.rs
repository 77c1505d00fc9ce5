use std::f64::consts::PI;

use crate::error::Result;
use crate::math::{flat, require_finite, Point3};
use crate::model::{Model, ModelBuilder};

use super::{clamp_depth, finish, label};

/// Wireframe model of a Sierpinski triangle.
#[derive(Debug, Clone)]
pub struct SierpinskiTriangle {
    corners: [Point3; 3],
    depth: u32,
}

impl SierpinskiTriangle {
    /// Creates an equilateral Sierpinski triangle in the XY plane with its
    /// corners on the unit circle, the first corner at `(1, 0, 0)`.
    #[must_use]
    pub fn new(depth: i32) -> Self {
        Self::with_corners(unit_circle_corners(0.0), depth)
    }

    /// Creates an equilateral Sierpinski triangle on the unit circle rotated
    /// counter-clockwise by `theta` radians.
    ///
    /// # Errors
    ///
    /// Returns an error if `theta` is not finite.
    pub fn rotated(theta: f64, depth: i32) -> Result<Self> {
        let theta = require_finite("theta", theta)?;
        Ok(Self::with_corners(unit_circle_corners(theta), depth))
    }

    /// Creates a Sierpinski triangle on three explicit corners.
    #[must_use]
    pub fn with_corners(corners: [Point3; 3], depth: i32) -> Self {
        Self {
            corners,
            depth: clamp_depth(depth),
        }
    }

    /// Returns the recursion depth.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Generates the model.
    #[must_use]
    pub fn execute(&self) -> Model {
        let mut builder = ModelBuilder::new(label("Sierpinski Triangle", self.depth));
        let first = builder.add_vertices(&self.corners);
        subdivide(&mut builder, [first, first + 1, first + 2], self.depth);
        finish(builder)
    }
}

fn unit_circle_corners(theta: f64) -> [Point3; 3] {
    let corner = |offset: f64| flat((theta + offset).cos(), (theta + offset).sin());
    [corner(0.0), corner(2.0 * PI / 3.0), corner(4.0 * PI / 3.0)]
}

/// Draws the triangle indexed by `v` and, while `n > 0`, subdivides its
/// three corner triangles. The inverted middle triangle is left empty.
fn subdivide(builder: &mut ModelBuilder, v: [usize; 3], n: u32) {
    builder.add_loop(&v);

    if n > 0 {
        let p0 = builder.vertex(v[0]);
        let p1 = builder.vertex(v[1]);
        let p2 = builder.vertex(v[2]);

        let i = builder.add_vertices(&[
            flat((p0.x + p1.x) / 2.0, (p0.y + p1.y) / 2.0),
            flat((p1.x + p2.x) / 2.0, (p1.y + p2.y) / 2.0),
            flat((p2.x + p0.x) / 2.0, (p2.y + p0.y) / 2.0),
        ]);
        let (m01, m12, m20) = (i, i + 1, i + 2);

        subdivide(builder, [v[0], m01, m20], n - 1);
        subdivide(builder, [v[1], m01, m12], n - 1);
        subdivide(builder, [v[2], m12, m20], n - 1);
    }
}
