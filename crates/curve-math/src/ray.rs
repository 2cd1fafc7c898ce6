use crate::{Point3, Vector3};

/// A pick ray cast from the viewer into the scene.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vector3,
}

impl Ray {
    pub fn new(origin: Point3, direction: Vector3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get a point along the ray at distance `t`.
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }
}
