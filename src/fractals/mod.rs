//! Recursive fractal generators.
//!
//! Every family follows the same pattern: append the seed vertices to a
//! [`ModelBuilder`], then recursively append subdivision vertices in batches
//! and emit line segments until the depth budget is spent. A child's vertex
//! indices are always computed as `first + offset` from the batch its parent
//! appended immediately before descending.

mod box_fractal;
mod c_curve;
mod canopy;
mod h_tree;
mod koch;
mod pythagoras;
mod sierpinski;

pub use box_fractal::BoxFractal;
pub use c_curve::CCurve;
pub use canopy::Canopy;
pub use h_tree::HTree;
pub use koch::KochCurve;
pub use pythagoras::PythagorasTree;
pub use sierpinski::SierpinskiTriangle;

use crate::model::{Model, ModelBuilder};

/// One fractal family together with its seed and parameters.
#[derive(Debug, Clone)]
pub enum Fractal {
    /// A Vicsek box fractal.
    Box(BoxFractal),
    /// A Sierpinski triangle.
    Sierpinski(SierpinskiTriangle),
    /// A Koch curve.
    Koch(KochCurve),
    /// An H-tree.
    HTree(HTree),
    /// A Lévy C curve.
    CCurve(CCurve),
    /// A Pythagoras tree.
    PythagorasTree(PythagorasTree),
    /// A fractal canopy.
    Canopy(Canopy),
}

impl Fractal {
    /// Generates the model for this fractal.
    #[must_use]
    pub fn execute(&self) -> Model {
        match self {
            Self::Box(f) => f.execute(),
            Self::Sierpinski(f) => f.execute(),
            Self::Koch(f) => f.execute(),
            Self::HTree(f) => f.execute(),
            Self::CCurve(f) => f.execute(),
            Self::PythagorasTree(f) => f.execute(),
            Self::Canopy(f) => f.execute(),
        }
    }

    /// Returns the recursion depth.
    #[must_use]
    pub fn depth(&self) -> u32 {
        match self {
            Self::Box(f) => f.depth(),
            Self::Sierpinski(f) => f.depth(),
            Self::Koch(f) => f.depth(),
            Self::HTree(f) => f.depth(),
            Self::CCurve(f) => f.depth(),
            Self::PythagorasTree(f) => f.depth(),
            Self::Canopy(f) => f.depth(),
        }
    }
}

macro_rules! impl_from_family {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Fractal {
                fn from(f: $ty) -> Self {
                    Self::$variant(f)
                }
            }
        )*
    };
}

impl_from_family! {
    Box => BoxFractal,
    Sierpinski => SierpinskiTriangle,
    Koch => KochCurve,
    HTree => HTree,
    CCurve => CCurve,
    PythagorasTree => PythagorasTree,
    Canopy => Canopy,
}

/// Clamps a caller-supplied depth to a non-negative recursion budget.
pub(crate) fn clamp_depth(depth: i32) -> u32 {
    u32::try_from(depth).unwrap_or(0)
}

/// Builds the display label used by every family.
pub(crate) fn label(family: &str, depth: u32) -> String {
    format!("{family} (n = {depth})")
}

/// Finishes a generator run and logs its size.
pub(crate) fn finish(builder: ModelBuilder) -> Model {
    let model = builder.build();
    tracing::debug!(
        model = model.name(),
        vertices = model.vertex_count(),
        segments = model.segment_count(),
        "generated fractal model"
    );
    model
}
