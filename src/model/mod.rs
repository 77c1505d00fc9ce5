mod builder;

pub use builder::ModelBuilder;

use std::fmt;

use crate::math::Point3;

/// An undirected line segment between two vertices of a [`Model`].
///
/// The order of the two indices carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineSegment {
    /// Index of the first endpoint in the vertex buffer.
    pub a: usize,
    /// Index of the second endpoint in the vertex buffer.
    pub b: usize,
}

impl LineSegment {
    /// Creates a new line segment.
    #[must_use]
    pub fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// Returns the two indices as a pair.
    #[must_use]
    pub fn indices(&self) -> (usize, usize) {
        (self.a, self.b)
    }
}

/// An immutable wireframe model: a vertex buffer, the line segments drawn
/// between its vertices, and a display label.
///
/// Models are produced by [`ModelBuilder::build`] and never change afterwards.
/// A new depth means a new model.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    name: String,
    vertices: Vec<Point3>,
    segments: Vec<LineSegment>,
}

impl Model {
    /// Returns the display label, e.g. `"Box Fractal (n = 3)"`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the vertex buffer in creation order.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Returns the line segments in emission order.
    #[must_use]
    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    /// Returns the vertex at `index`, if any.
    #[must_use]
    pub fn vertex(&self, index: usize) -> Option<&Point3> {
        self.vertices.get(index)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of line segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} vertices, {} line segments",
            self.name,
            self.vertices.len(),
            self.segments.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::flat;

    #[test]
    fn display_reports_counts() {
        let mut builder = ModelBuilder::new("Square");
        let first = builder.add_vertices(&[
            flat(0.0, 0.0),
            flat(1.0, 0.0),
            flat(1.0, 1.0),
            flat(0.0, 1.0),
        ]);
        builder.add_segment(first, first + 1);
        let model = builder.build();
        assert_eq!(model.to_string(), "Square: 4 vertices, 1 line segments");
    }

    #[test]
    fn vertex_lookup_out_of_range_is_none() {
        let mut builder = ModelBuilder::new("Point");
        builder.add_vertex(flat(0.5, 0.5));
        let model = builder.build();
        assert!(model.vertex(0).is_some());
        assert!(model.vertex(1).is_none());
    }

    #[test]
    fn segment_indices_pair() {
        let seg = LineSegment::new(3, 7);
        assert_eq!(seg.indices(), (3, 7));
    }
}
