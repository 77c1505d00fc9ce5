use crate::error::{OperationError, Result};
use crate::math::{Point3, Vector3};
use crate::model::Model;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Returns the centre of the box.
    #[must_use]
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Returns the edge lengths of the box.
    #[must_use]
    pub fn extent(&self) -> Vector3 {
        self.max - self.min
    }
}

/// Computes the axis-aligned bounding box of a model's vertex buffer.
pub struct BoundingBox<'a> {
    model: &'a Model,
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(model: &'a Model) -> Self {
        Self { model }
    }

    /// Executes the query, returning the AABB.
    ///
    /// # Errors
    ///
    /// Returns an error if the model has no vertices.
    pub fn execute(&self) -> Result<Aabb> {
        let (first, rest) = self.model.vertices().split_first().ok_or_else(|| {
            OperationError::InvalidInput(format!("model '{}' has no vertices", self.model.name()))
        })?;

        let init = Aabb {
            min: *first,
            max: *first,
        };
        Ok(rest.iter().fold(init, |acc, p| Aabb {
            min: acc.min.inf(p),
            max: acc.max.sup(p),
        }))
    }
}
