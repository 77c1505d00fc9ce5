use crate::error::{ParameterError, Result};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Creates a point in the XY plane (`z = 0`).
#[must_use]
pub fn flat(x: f64, y: f64) -> Point3 {
    Point3::new(x, y, 0.0)
}

/// Returns the left-pointing normal of a vector in the XY plane.
///
/// The result has the same length as the input's XY projection.
#[must_use]
pub fn left_normal(v: Vector3) -> Vector3 {
    Vector3::new(-v.y, v.x, 0.0)
}

/// Rotates a vector counter-clockwise about the Z axis.
///
/// * `angle` - Rotation angle in radians.
#[must_use]
pub fn rotate_z(v: Vector3, angle: f64) -> Vector3 {
    nalgebra::Rotation3::from_axis_angle(&Vector3::z_axis(), angle) * v
}

/// Returns `value` if it is finite, or a [`ParameterError::NonFinite`] naming it.
///
/// # Errors
///
/// Returns an error if `value` is NaN or infinite.
pub fn require_finite(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParameterError::NonFinite { parameter, value }.into())
    }
}
