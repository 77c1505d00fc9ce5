use crate::error::{ParameterError, Result};
use crate::math::{flat, require_finite, rotate_z, Point3};
use crate::model::{Model, ModelBuilder};

use super::{clamp_depth, finish, label};

const DEFAULT_RATIO: f64 = 0.65;

/// Wireframe model of a fractal canopy.
///
/// Every branch forks at its tip into two branches turned `±spread` degrees
/// from its own direction and scaled by `ratio`.
#[derive(Debug, Clone)]
pub struct Canopy {
    trunk: [Point3; 2],
    spread: f64,
    ratio: f64,
    depth: u32,
}

impl Canopy {
    /// Creates a canopy on the trunk `(0, -1, 0) -> (0, -0.5, 0)` with the
    /// given spread angle in degrees and a branch ratio of 0.65.
    ///
    /// # Errors
    ///
    /// Returns an error if `spread_degrees` is not finite.
    pub fn new(spread_degrees: f64, depth: i32) -> Result<Self> {
        Self::with_trunk([flat(0.0, -1.0), flat(0.0, -0.5)], spread_degrees, depth)
    }

    /// Creates a canopy on an explicit trunk.
    ///
    /// # Errors
    ///
    /// Returns an error if `spread_degrees` is not finite.
    pub fn with_trunk(trunk: [Point3; 2], spread_degrees: f64, depth: i32) -> Result<Self> {
        Ok(Self {
            trunk,
            spread: require_finite("spread_degrees", spread_degrees)?.to_radians(),
            ratio: DEFAULT_RATIO,
            depth: clamp_depth(depth),
        })
    }

    /// Sets the length ratio between a branch and each of its children.
    ///
    /// # Errors
    ///
    /// Returns an error if `ratio` is not finite or not positive.
    pub fn with_ratio(mut self, ratio: f64) -> Result<Self> {
        let ratio = require_finite("ratio", ratio)?;
        if ratio <= 0.0 {
            return Err(ParameterError::OutOfRange {
                parameter: "ratio",
                value: ratio,
                min: 0.0,
                max: f64::INFINITY,
            }
            .into());
        }
        self.ratio = ratio;
        Ok(self)
    }

    /// Returns the recursion depth.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Returns the branch length ratio.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Generates the model.
    #[must_use]
    pub fn execute(&self) -> Model {
        let mut builder = ModelBuilder::new(label("Canopy", self.depth));
        let first = builder.add_vertices(&self.trunk);
        self.branch(&mut builder, first, first + 1, self.depth);
        finish(builder)
    }

    fn branch(&self, builder: &mut ModelBuilder, base: usize, tip: usize, n: u32) {
        builder.add_segment(base, tip);

        if n > 0 {
            let pb = builder.vertex(base);
            let pt = builder.vertex(tip);
            let stem = (pt - pb) * self.ratio;
            let left = pt + rotate_z(stem, self.spread);
            let right = pt + rotate_z(stem, -self.spread);

            let i = builder.add_vertices(&[flat(left.x, left.y), flat(right.x, right.y)]);

            self.branch(builder, tip, i, n - 1);
            self.branch(builder, tip, i + 1, n - 1);
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
        let model = Canopy::new(30.0, 0).unwrap().execute();
        assert_eq!(model.vertex_count(), 2);
        assert_eq!(model.segment_count(), 1);
        assert_eq!(model.name(), "Canopy (n = 0)");
    }

    #[test]
    fn counts_follow_closed_form() {
        for n in 0..=10 {
            let model = Canopy::new(35.0, n).unwrap().execute();
            let pow = 2usize.pow(n.unsigned_abs() + 1);
            assert_eq!(model.vertex_count(), pow);
            assert_eq!(model.segment_count(), pow - 1);
        }
    }

    #[test]
    fn branches_are_symmetric() {
        let model = Canopy::new(90.0, 1).unwrap().with_ratio(0.5).unwrap().execute();
        let v = model.vertices();
        assert_relative_eq!(v[2], flat(-0.25, -0.5), epsilon = 1e-12);
        assert_relative_eq!(v[3], flat(0.25, -0.5), epsilon = 1e-12);
    }

    #[test]
    fn branch_lengths_decrease_by_ratio() {
        let model = Canopy::new(30.0, 2).unwrap().execute();
        let v = model.vertices();
        let seg = model.segments();
        let trunk = (v[seg[0].b] - v[seg[0].a]).norm();
        let child = (v[seg[1].b] - v[seg[1].a]).norm();
        let grandchild = (v[seg[2].b] - v[seg[2].a]).norm();
        assert_relative_eq!(child, trunk * 0.65, epsilon = 1e-12);
        assert_relative_eq!(grandchild, trunk * 0.65 * 0.65, epsilon = 1e-12);
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        assert!(Canopy::new(f64::NAN, 3).is_err());
        assert!(Canopy::new(30.0, 3).unwrap().with_ratio(0.0).is_err());
        assert!(Canopy::new(30.0, 3).unwrap().with_ratio(-0.5).is_err());
    }

    #[test]
    fn ratio_defaults() {
        assert_relative_eq!(Canopy::new(30.0, 1).unwrap().ratio(), DEFAULT_RATIO);
    }
}
