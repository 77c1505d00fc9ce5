use std::ops::RangeInclusive;

/// Which fractal models a [`ModelCatalog`](super::ModelCatalog) pre-builds.
///
/// Each family is listed with the inclusive range of depths to generate, in
/// catalog order: Canopy, Koch, H-Tree, Sierpinski, Box, C-Curve, Pythagoras.
/// An empty range skips the family.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Canopy depths.
    pub canopy_depths: RangeInclusive<i32>,
    /// Canopy spread angle in degrees at depth 0; each level adds one degree.
    pub canopy_base_spread: f64,
    /// Koch curve depths.
    pub koch_depths: RangeInclusive<i32>,
    /// H-tree depths.
    pub h_tree_depths: RangeInclusive<i32>,
    /// Sierpinski triangle depths.
    pub sierpinski_depths: RangeInclusive<i32>,
    /// Box fractal depths.
    pub box_depths: RangeInclusive<i32>,
    /// C curve depths.
    pub c_curve_depths: RangeInclusive<i32>,
    /// Pythagoras tree depths.
    pub pythagoras_depths: RangeInclusive<i32>,
    /// Pythagoras tree apex ratios `(along, height)`.
    pub pythagoras_ratios: (f64, f64),
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            canopy_depths: 0..=16,
            canopy_base_spread: 30.0,
            koch_depths: 0..=7,
            h_tree_depths: 0..=16,
            sierpinski_depths: 0..=10,
            box_depths: 0..=8,
            c_curve_depths: 0..=20,
            pythagoras_depths: 0..=15,
            pythagoras_ratios: (0.4, 0.45),
        }
    }
}

impl CatalogConfig {
    /// Returns a configuration that builds every family up to `max_depth`.
    ///
    /// Useful for quick previews; the defaults go much deeper.
    #[must_use]
    pub fn shallow(max_depth: i32) -> Self {
        Self {
            canopy_depths: 0..=max_depth,
            koch_depths: 0..=max_depth,
            h_tree_depths: 0..=max_depth,
            sierpinski_depths: 0..=max_depth,
            box_depths: 0..=max_depth,
            c_curve_depths: 0..=max_depth,
            pythagoras_depths: 0..=max_depth,
            ..Self::default()
        }
    }

    /// Returns the total number of models this configuration describes.
    #[must_use]
    pub fn model_count(&self) -> usize {
        [
            &self.canopy_depths,
            &self.koch_depths,
            &self.h_tree_depths,
            &self.sierpinski_depths,
            &self.box_depths,
            &self.c_curve_depths,
            &self.pythagoras_depths,
        ]
        .into_iter()
        .map(|r| r.clone().count())
        .sum()
    }
}
