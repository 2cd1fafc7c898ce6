pub mod plane;
pub mod ray;
pub mod transform;

pub use glam::{DMat4, DVec2, DVec3};
pub use plane::Plane;
pub use ray::Ray;
pub use transform::Transform;

pub type Point2 = DVec2;
pub type Point3 = DVec3;
pub type Vector3 = DVec3;

/// A point is usable as a control point when no component is NaN.
pub fn is_valid_point(p: Point3) -> bool {
    !(p.x.is_nan() || p.y.is_nan() || p.z.is_nan())
}
