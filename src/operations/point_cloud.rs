use crate::math::Point3;
use crate::model::Model;

/// A model drawn as points: every vertex once, each as a square of
/// `point_size` pixels in every direction from its centre.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud {
    name: String,
    vertices: Vec<Point3>,
    points: Vec<usize>,
    point_size: u32,
}

impl PointCloud {
    /// Returns the display label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the vertex buffer.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Returns the point primitives as vertex indices.
    #[must_use]
    pub fn points(&self) -> &[usize] {
        &self.points
    }

    /// Returns the point radius in pixels.
    #[must_use]
    pub fn point_size(&self) -> u32 {
        self.point_size
    }
}

/// Converts a wireframe model into a [`PointCloud`] over the same vertices.
pub struct MakePointCloud<'a> {
    model: &'a Model,
    point_size: u32,
}

impl<'a> MakePointCloud<'a> {
    /// Creates a new `MakePointCloud` operation.
    #[must_use]
    pub fn new(model: &'a Model, point_size: u32) -> Self {
        Self { model, point_size }
    }

    /// Executes the conversion. The source model is left untouched.
    #[must_use]
    pub fn execute(&self) -> PointCloud {
        let vertices = self.model.vertices().to_vec();
        PointCloud {
            name: format!("PointCloud: {}", self.model.name()),
            points: (0..vertices.len()).collect(),
            vertices,
            point_size: self.point_size,
        }
    }
}
