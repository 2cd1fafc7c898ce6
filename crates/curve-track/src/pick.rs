//! Placing control points by casting a ray into the scene.

use curve_math::{Plane, Point3, Ray, Transform, Vector3};

/// Where a ray struck a scene surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub point: Point3,
    pub normal: Vector3,
    pub distance: f64,
}

/// A scene surface that control points can be placed on.
pub trait Raycast {
    fn raycast(&self, ray: &Ray) -> Option<RayHit>;
}

impl Raycast for Plane {
    fn raycast(&self, ray: &Ray) -> Option<RayHit> {
        let distance = self.intersect_ray(ray)?;
        // report the face the ray came from
        let normal = if ray.direction.dot(self.normal) > 0.0 {
            -self.normal
        } else {
            self.normal
        };
        Some(RayHit {
            point: ray.at(distance),
            normal,
            distance,
        })
    }
}

impl<T: Raycast> Raycast for [T] {
    /// Nearest hit among all targets.
    fn raycast(&self, ray: &Ray) -> Option<RayHit> {
        self.iter()
            .filter_map(|target| target.raycast(ray))
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}

/// World position for a new control point: the hit point pushed `expand`
/// units along the surface normal.
pub fn pick_world_position<S: Raycast + ?Sized>(scene: &S, ray: &Ray, expand: f64) -> Option<Point3> {
    let hit = scene.raycast(ray)?;
    Some(hit.point + hit.normal * expand)
}

/// Like [`pick_world_position`], mapped into the local space of `transform`.
pub fn pick_local_position<S: Raycast + ?Sized>(
    scene: &S,
    ray: &Ray,
    transform: &Transform,
    expand: f64,
) -> Option<Point3> {
    let world = pick_world_position(scene, ray, expand)?;
    transform.inverse_transform_point(world)
}
