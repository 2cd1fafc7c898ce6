use crate::{DMat4, Point3, Vector3};

/// Object-to-world transform of the entity that owns a curve.
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    pub matrix: [f64; 16],
}

impl Transform {
    pub fn identity() -> Self {
        Self::from_mat4(DMat4::IDENTITY)
    }

    pub fn from_translation(t: Vector3) -> Self {
        Self::from_mat4(DMat4::from_translation(t))
    }

    pub fn from_mat4(m: DMat4) -> Self {
        Self {
            matrix: m.to_cols_array(),
        }
    }

    pub fn to_mat4(&self) -> DMat4 {
        DMat4::from_cols_array(&self.matrix)
    }

    /// Map a local-space point into world space.
    pub fn transform_point(&self, p: Point3) -> Point3 {
        self.to_mat4().transform_point3(p)
    }

    pub fn inverse(&self) -> Option<Transform> {
        let m = self.to_mat4();
        if m.determinant().abs() < 1e-15 {
            None
        } else {
            Some(Self::from_mat4(m.inverse()))
        }
    }

    /// Map a world-space point into this transform's local space.
    /// `None` when the transform is singular.
    pub fn inverse_transform_point(&self, p: Point3) -> Option<Point3> {
        self.inverse().map(|inv| inv.transform_point(p))
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
