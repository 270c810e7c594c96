mod bounding_box;
mod classify;

pub use bounding_box::{Aabb, BoundingBox};
pub use classify::{classify_point_in_solid, PointClassification};
