use crate::math::{flat, Point3};
use crate::model::{Model, ModelBuilder};

use super::{clamp_depth, finish, label};

/// Wireframe model of a Vicsek box fractal.
///
/// Each rectangle is cut into a 3x3 grid and only the five cells of the
/// central cross are subdivided further; the four corner cells stay empty.
#[derive(Debug, Clone)]
pub struct BoxFractal {
    corners: [Point3; 4],
    depth: u32,
}

impl BoxFractal {
    /// Creates a box fractal in the XY plane with corners at `(±1, ±1, 0)`.
    ///
    /// A negative `depth` is treated as zero.
    #[must_use]
    pub fn new(depth: i32) -> Self {
        Self::with_corners(
            [
                flat(-1.0, 1.0),
                flat(1.0, 1.0),
                flat(1.0, -1.0),
                flat(-1.0, -1.0),
            ],
            depth,
        )
    }

    /// Creates a box fractal on an explicit rectangle.
    ///
    /// The corners are expected in the order top-left, top-right,
    /// bottom-right, bottom-left and should share one z-plane. Subdivision
    /// vertices are always placed at `z = 0`.
    #[must_use]
    pub fn with_corners(corners: [Point3; 4], depth: i32) -> Self {
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
        let mut builder = ModelBuilder::new(label("Box Fractal", self.depth));
        let first = builder.add_vertices(&self.corners);
        subdivide(&mut builder, [first, first + 1, first + 2, first + 3], self.depth);
        finish(builder)
    }
}

/// Draws and/or subdivides the rectangle indexed by `v` (TL, TR, BR, BL).
///
/// The draw check (`n <= 1`) and the recurse check (`n > 0`) are independent:
/// a rectangle at `n == 1` draws its boundary and also spawns five children
/// at `n == 0`.
///
/// ```text
///   v0    4          5     v1
///    +----+----------+----+
///    |    |..........|    |
///  6 +----7----------8----+ 9
///    |....|..........|....|
/// 10 +---11---------12----+ 13
///    |    |..........|    |
///    +----+----------+----+
///   v3   14         15     v2
/// ```
fn subdivide(builder: &mut ModelBuilder, v: [usize; 4], n: u32) {
    if n <= 1 {
        builder.add_loop(&v);
    }

    if n > 0 {
        let p0 = builder.vertex(v[0]);
        let p1 = builder.vertex(v[1]);
        let p2 = builder.vertex(v[2]);

        let (x0, y0) = (p0.x, p0.y);
        let x1 = p1.x;
        let y2 = p2.y;

        let x4 = (2.0 / 3.0) * x0 + (1.0 / 3.0) * x1;
        let x5 = (1.0 / 3.0) * x0 + (2.0 / 3.0) * x1;
        let y6 = (2.0 / 3.0) * y0 + (1.0 / 3.0) * y2;
        let y7 = (1.0 / 3.0) * y0 + (2.0 / 3.0) * y2;

        let i = builder.add_vertices(&[
            flat(x4, y0),
            flat(x5, y0),
            flat(x0, y6),
            flat(x4, y6),
            flat(x5, y6),
            flat(x1, y6),
            flat(x0, y7),
            flat(x4, y7),
            flat(x5, y7),
            flat(x1, y7),
            flat(x4, y2),
            flat(x5, y2),
        ]);

        let (v4, v5) = (i, i + 1);
        let (v6, v7, v8, v9) = (i + 2, i + 3, i + 4, i + 5);
        let (v10, v11, v12, v13) = (i + 6, i + 7, i + 8, i + 9);
        let (v14, v15) = (i + 10, i + 11);

        subdivide(builder, [v4, v5, v8, v7], n - 1);
        subdivide(builder, [v6, v7, v11, v10], n - 1);
        subdivide(builder, [v7, v8, v12, v11], n - 1);
        subdivide(builder, [v8, v9, v13, v12], n - 1);
        subdivide(builder, [v11, v12, v15, v14], n - 1);
    }
}
