use std::f64::consts::SQRT_2;

use crate::math::{flat, left_normal, Point3};
use crate::model::{Model, ModelBuilder};

use super::{clamp_depth, finish, label};

/// Wireframe model of an H-tree.
///
/// Each bar grows a perpendicular bar centred on each of its endpoints, each
/// child `1/√2` the length of its parent.
#[derive(Debug, Clone)]
pub struct HTree {
    bar: [Point3; 2],
    depth: u32,
}

impl HTree {
    /// Creates an H-tree whose first bar runs from `(-0.5, 0, 0)` to `(0.5, 0, 0)`.
    #[must_use]
    pub fn new(depth: i32) -> Self {
        Self::with_bar([flat(-0.5, 0.0), flat(0.5, 0.0)], depth)
    }

    /// Creates an H-tree from an explicit first bar.
    #[must_use]
    pub fn with_bar(bar: [Point3; 2], depth: i32) -> Self {
        Self {
            bar,
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
        let mut builder = ModelBuilder::new(label("H-Tree", self.depth));
        let first = builder.add_vertices(&self.bar);
        branch(&mut builder, first, first + 1, self.depth);
        finish(builder)
    }
}

fn branch(builder: &mut ModelBuilder, a: usize, b: usize, n: u32) {
    builder.add_segment(a, b);

    if n > 0 {
        let pa = builder.vertex(a);
        let pb = builder.vertex(b);
        // Half of a child bar: perpendicular, |ab| / (2√2) long.
        let h = left_normal(pb - pa) / (2.0 * SQRT_2);

        let i = builder.add_vertices(&[
            flat(pa.x + h.x, pa.y + h.y),
            flat(pa.x - h.x, pa.y - h.y),
            flat(pb.x + h.x, pb.y + h.y),
            flat(pb.x - h.x, pb.y - h.y),
        ]);

        branch(builder, i, i + 1, n - 1);
        branch(builder, i + 2, i + 3, n - 1);
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn depth_0_is_one_bar() {
        let model = HTree::new(0).execute();
        assert_eq!(model.vertex_count(), 2);
        assert_eq!(model.segment_count(), 1);
        assert_eq!(model.name(), "H-Tree (n = 0)");
    }

    #[test]
    fn depth_1_forms_an_h() {
        let model = HTree::new(1).execute();
        assert_eq!(model.vertex_count(), 6);
        assert_eq!(model.segment_count(), 3);

        let v = model.vertices();
        let half = 1.0 / (2.0 * SQRT_2);
        assert_relative_eq!(v[2], flat(-0.5, half), epsilon = 1e-12);
        assert_relative_eq!(v[3], flat(-0.5, -half), epsilon = 1e-12);
        assert_relative_eq!(v[4], flat(0.5, half), epsilon = 1e-12);
        assert_relative_eq!(v[5], flat(0.5, -half), epsilon = 1e-12);
    }

    #[test]
    fn counts_follow_closed_form() {
        for n in 0..=8 {
            let model = HTree::new(n).execute();
            let pow = 2usize.pow(n.unsigned_abs());
            assert_eq!(model.vertex_count(), 2 + 4 * (pow - 1));
            assert_eq!(model.segment_count(), 2 * pow - 1);
        }
    }

    #[test]
    fn child_bars_shrink_by_root_two() {
        let model = HTree::new(2).execute();
        let v = model.vertices();
        let lengths: Vec<f64> = model
            .segments()
            .iter()
            .map(|s| (v[s.b] - v[s.a]).norm())
            .collect();
        // Depth-first order: root, left bar, its two children, right bar, its two children.
        assert_relative_eq!(lengths[0], 1.0);
        assert_relative_eq!(lengths[1], 1.0 / SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(lengths[2], 0.5, epsilon = 1e-12);
        assert_relative_eq!(lengths[4], 1.0 / SQRT_2, epsilon = 1e-12);
    }
}
