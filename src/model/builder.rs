use crate::math::Point3;

use super::{LineSegment, Model};

/// Append-only construction buffer shared by every fractal generator.
///
/// Vertex indices are assigned in creation order and never reassigned, so a
/// recursive call may keep using an index it recorded before its children
/// appended their own vertices.
#[derive(Debug, Default)]
pub struct ModelBuilder {
    name: String,
    vertices: Vec<Point3>,
    segments: Vec<LineSegment>,
}

impl ModelBuilder {
    /// Creates an empty builder for a model with the given label.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vertices: Vec::new(),
            segments: Vec::new(),
        }
    }

    /// Appends one vertex and returns its index.
    pub fn add_vertex(&mut self, point: Point3) -> usize {
        let index = self.vertices.len();
        self.vertices.push(point);
        index
    }

    /// Appends several vertices in order and returns the index of the first.
    ///
    /// The `k`-th point of `points` receives index `first + k`.
    pub fn add_vertices(&mut self, points: &[Point3]) -> usize {
        let first = self.vertices.len();
        self.vertices.extend_from_slice(points);
        first
    }

    /// Appends an undirected line segment between two existing vertices.
    ///
    /// # Panics
    ///
    /// Panics if either index does not refer to a vertex already in the
    /// buffer. That is a bug in the calling generator, not a runtime condition.
    pub fn add_segment(&mut self, a: usize, b: usize) {
        let len = self.vertices.len();
        assert!(
            a < len && b < len,
            "line segment ({a}, {b}) references a vertex outside the buffer of length {len}"
        );
        self.segments.push(LineSegment::new(a, b));
    }

    /// Appends the closed boundary of a polygon: one segment per consecutive
    /// pair of indices, plus the closing segment from the last back to the first.
    ///
    /// # Panics
    ///
    /// Panics if any index is outside the buffer.
    pub fn add_loop(&mut self, indices: &[usize]) {
        for (i, &a) in indices.iter().enumerate() {
            let b = indices[(i + 1) % indices.len()];
            self.add_segment(a, b);
        }
    }

    /// Returns the vertex at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the buffer.
    #[must_use]
    pub fn vertex(&self, index: usize) -> Point3 {
        self.vertices[index]
    }

    /// Returns the number of vertices appended so far.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of segments appended so far.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Finishes construction and returns the immutable model.
    #[must_use]
    pub fn build(self) -> Model {
        Model {
            name: self.name,
            vertices: self.vertices,
            segments: self.segments,
        }
    }
}
