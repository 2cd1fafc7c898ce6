use crate::{Point3, Ray, Vector3};

/// An infinite plane defined by a point and a unit normal.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    pub origin: Point3,
    pub normal: Vector3,
}

impl Plane {
    pub fn new(origin: Point3, normal: Vector3) -> Self {
        Self {
            origin,
            normal: normal.normalize(),
        }
    }

    /// Ground plane `y = 0`, facing up.
    pub fn xz() -> Self {
        Self::new(Point3::ZERO, Vector3::Y)
    }

    /// Signed distance from a point to this plane.
    pub fn signed_distance(&self, point: Point3) -> f64 {
        (point - self.origin).dot(self.normal)
    }

    /// Distance along `ray` to the plane, or `None` if the ray is parallel
    /// to the plane or the plane lies behind the ray origin.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f64> {
        let denom = ray.direction.dot(self.normal);
        if denom.abs() < 1e-12 {
            return None;
        }
        let t = -self.signed_distance(ray.origin) / denom;
        (t >= 0.0).then_some(t)
    }
}
