mod bounding_box;
mod point_cloud;

pub use bounding_box::{Aabb, BoundingBox};
pub use point_cloud::{MakePointCloud, PointCloud};
