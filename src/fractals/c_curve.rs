use crate::math::{flat, left_normal, Point3};
use crate::model::{Model, ModelBuilder};

use super::{clamp_depth, finish, label};

/// Wireframe model of a Lévy C curve.
///
/// Every segment is replaced by the two legs of the isosceles right triangle
/// standing on it, which turns each half 45° away from the segment's direction.
#[derive(Debug, Clone)]
pub struct CCurve {
    endpoints: [Point3; 2],
    depth: u32,
}

impl CCurve {
    /// Creates a C curve from `(-0.5, -0.5, 0)` to `(0.5, -0.5, 0)`.
    #[must_use]
    pub fn new(depth: i32) -> Self {
        Self::with_endpoints([flat(-0.5, -0.5), flat(0.5, -0.5)], depth)
    }

    /// Creates a C curve between two explicit endpoints.
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
        let mut builder = ModelBuilder::new(label("C-Curve", self.depth));
        let first = builder.add_vertices(&self.endpoints);
        fold(&mut builder, first, first + 1, self.depth);
        finish(builder)
    }
}

fn fold(builder: &mut ModelBuilder, a: usize, b: usize, n: u32) {
    if n == 0 {
        builder.add_segment(a, b);
        return;
    }

    let pa = builder.vertex(a);
    let pb = builder.vertex(b);
    let half = (pb - pa) / 2.0;
    let apex = pa + half + left_normal(half);

    let i = builder.add_vertex(flat(apex.x, apex.y));

    fold(builder, a, i, n - 1);
    fold(builder, i, b, n - 1);
}
