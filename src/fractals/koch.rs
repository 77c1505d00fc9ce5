use std::f64::consts::FRAC_PI_3;

use crate::math::{flat, rotate_z, Point3};
use crate::model::{Model, ModelBuilder};

use super::{clamp_depth, finish, label};

/// Wireframe model of a Koch curve.
///
/// Every segment is replaced by four segments a third of its length, the
/// middle two forming a 60° peak on the left of the segment's direction.
#[derive(Debug, Clone)]
pub struct KochCurve {
    endpoints: [Point3; 2],
    depth: u32,
}

impl KochCurve {
    /// Creates a Koch curve from `(-1, 0, 0)` to `(1, 0, 0)`, peaks pointing up.
    #[must_use]
    pub fn new(depth: i32) -> Self {
        Self::with_endpoints([flat(-1.0, 0.0), flat(1.0, 0.0)], depth)
    }

    /// Creates a Koch curve between two explicit endpoints.
    #[must_use]
    pub fn with_endpoints(endpoints: [Point3; 2], depth: i32) -> Self {
        Self {
            endpoints,
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
        let mut builder = ModelBuilder::new(label("Koch Curve", self.depth));
        let first = builder.add_vertices(&self.endpoints);
        koch(&mut builder, first, first + 1, self.depth);
        finish(builder)
    }
}

fn koch(builder: &mut ModelBuilder, a: usize, b: usize, n: u32) {
    if n == 0 {
        builder.add_segment(a, b);
        return;
    }

    let pa = builder.vertex(a);
    let pb = builder.vertex(b);
    let third = (pb - pa) / 3.0;

    let p1 = pa + third;
    let peak = p1 + rotate_z(third, FRAC_PI_3);
    let p2 = pa + third * 2.0;

    let i = builder.add_vertices(&[
        flat(p1.x, p1.y),
        flat(peak.x, peak.y),
        flat(p2.x, p2.y),
    ]);

    koch(builder, a, i, n - 1);
    koch(builder, i, i + 1, n - 1);
    koch(builder, i + 1, i + 2, n - 1);
    koch(builder, i + 2, b, n - 1);
}
