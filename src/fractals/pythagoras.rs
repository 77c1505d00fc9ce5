use crate::error::Result;
use crate::math::{flat, left_normal, require_finite, Point3};
use crate::model::{Model, ModelBuilder};

use super::{clamp_depth, finish, label};

/// Wireframe model of a Pythagoras tree.
///
/// On the top edge of every square stands a triangle whose apex is placed by
/// two ratios of that edge: `along` measured from the top-left corner towards
/// the top-right corner, and `height` measured perpendicular to it. The two
/// legs of the triangle become the bases of the next pair of squares.
/// `along = 0.5, height = 0.5` gives the classic isosceles right-triangle tree.
#[derive(Debug, Clone)]
pub struct PythagorasTree {
    corners: [Point3; 4],
    along: f64,
    height: f64,
    depth: u32,
}

impl PythagorasTree {
    /// Creates a tree whose trunk is the square from `(-0.25, -1, 0)` to
    /// `(0.25, -0.5, 0)`.
    ///
    /// # Errors
    ///
    /// Returns an error if either ratio is not finite.
    pub fn new(along: f64, height: f64, depth: i32) -> Result<Self> {
        Self::with_corners(
            [
                flat(-0.25, -1.0),
                flat(0.25, -1.0),
                flat(0.25, -0.5),
                flat(-0.25, -0.5),
            ],
            along,
            height,
            depth,
        )
    }

    /// Creates a tree on an explicit trunk square.
    ///
    /// The corners are bottom-left, bottom-right, top-right, top-left; the
    /// tree grows to the left of the direction `corners[0] -> corners[1]`.
    ///
    /// # Errors
    ///
    /// Returns an error if either ratio is not finite.
    pub fn with_corners(corners: [Point3; 4], along: f64, height: f64, depth: i32) -> Result<Self> {
        Ok(Self {
            corners,
            along: require_finite("along", along)?,
            height: require_finite("height", height)?,
            depth: clamp_depth(depth),
        })
    }

    /// Returns the recursion depth.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Returns the `(along, height)` apex ratios.
    #[must_use]
    pub fn ratios(&self) -> (f64, f64) {
        (self.along, self.height)
    }

    /// Generates the model.
    #[must_use]
    pub fn execute(&self) -> Model {
        let mut builder = ModelBuilder::new(label("Pythagoras Tree", self.depth));
        let first = builder.add_vertices(&self.corners);
        self.grow(
            &mut builder,
            [first, first + 1, first + 2, first + 3],
            self.depth,
        );
        finish(builder)
    }

    /// Draws the square indexed by `v` (BL, BR, TR, TL) and, while `n > 0`,
    /// grows the two child squares on its top edge.
    fn grow(&self, builder: &mut ModelBuilder, v: [usize; 4], n: u32) {
        builder.add_loop(&v);

        if n > 0 {
            let tr = builder.vertex(v[2]);
            let tl = builder.vertex(v[3]);
            let top = tr - tl;
            let apex = tl + top * self.along + left_normal(top) * self.height;

            let left = left_normal(apex - tl);
            let right = left_normal(tr - apex);

            let i = builder.add_vertices(&[
                flat(apex.x, apex.y),
                flat(apex.x + left.x, apex.y + left.y),
                flat(tl.x + left.x, tl.y + left.y),
                flat(tr.x + right.x, tr.y + right.y),
                flat(apex.x + right.x, apex.y + right.y),
            ]);

            self.grow(builder, [v[3], i, i + 1, i + 2], n - 1);
            self.grow(builder, [i, v[2], i + 3, i + 4], n - 1);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn depth_0_is_the_trunk() {
        let model = PythagorasTree::new(0.4, 0.45, 0).unwrap().execute();
        assert_eq!(model.vertex_count(), 4);
        assert_eq!(model.segment_count(), 4);
        assert_eq!(model.name(), "Pythagoras Tree (n = 0)");
    }

    #[test]
    fn counts_follow_closed_form() {
        for n in 0..=8 {
            let model = PythagorasTree::new(0.4, 0.45, n).unwrap().execute();
            let pow = 2usize.pow(n.unsigned_abs());
            assert_eq!(model.vertex_count(), 4 + 5 * (pow - 1));
            assert_eq!(model.segment_count(), 4 * (2 * pow - 1));
        }
    }

    #[test]
    fn classic_tree_children_are_squares() {
        let unit = [flat(0.0, 0.0), flat(1.0, 0.0), flat(1.0, 1.0), flat(0.0, 1.0)];
        let model = PythagorasTree::with_corners(unit, 0.5, 0.5, 1)
            .unwrap()
            .execute();
        let v = model.vertices();
        assert_relative_eq!(v[4], flat(0.5, 1.5), epsilon = 1e-12);
        // Left child square on (0,1) -> (0.5,1.5).
        assert_relative_eq!(v[5], flat(0.0, 2.0), epsilon = 1e-12);
        assert_relative_eq!(v[6], flat(-0.5, 1.5), epsilon = 1e-12);
        // Right child square on (0.5,1.5) -> (1,1).
        assert_relative_eq!(v[7], flat(1.5, 1.5), epsilon = 1e-12);
        assert_relative_eq!(v[8], flat(1.0, 2.0), epsilon = 1e-12);

        let side = (v[4] - v[3]).norm();
        assert_relative_eq!((v[5] - v[4]).norm(), side, epsilon = 1e-12);
        assert_relative_eq!(side, 0.5f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn ratios_are_kept() {
        let tree = PythagorasTree::new(0.4, 0.45, 3).unwrap();
        let (along, height) = tree.ratios();
        assert_relative_eq!(along, 0.4);
        assert_relative_eq!(height, 0.45);
    }

    #[test]
    fn non_finite_ratio_is_rejected() {
        assert!(PythagorasTree::new(f64::NAN, 0.45, 3).is_err());
        assert!(PythagorasTree::new(0.4, f64::INFINITY, 3).is_err());
    }
}
