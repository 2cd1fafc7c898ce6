//! Uniform Catmull-Rom segment geometry and evaluation.

use curve_math::{Point3, Vector3};

use crate::curve::Curve;

/// Minimum number of control points that yields at least one segment.
pub const CATMULL_ROM_POINT_COUNT_LIMIT: usize = 4;

/// Catmull-Rom coefficient matrix. Row `i` holds the contribution of `t^i`
/// to each of the four control point weights.
pub const CATMULL_ROM_BASIS: [[f64; 4]; 4] = [
    [0.0, 1.0, 0.0, 0.0],
    [-0.5, 0.0, 0.5, 0.0],
    [1.0, -2.5, 2.0, -0.5],
    [-0.5, 1.5, -1.5, 0.5],
];

/// The four control points of one segment, in order. The curve runs from
/// the second point to the third; the outer two only shape the tangents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry(pub [Point3; 4]);

impl Geometry {
    fn combine(&self, weights: [f64; 4]) -> Point3 {
        self.0
            .iter()
            .zip(weights)
            .fold(Point3::ZERO, |acc, (&g, w)| acc + g * w)
    }
}

/// Pack four consecutive control points into a segment geometry.
pub fn build_geometry(g1: Point3, g2: Point3, g3: Point3, g4: Point3) -> Geometry {
    Geometry([g1, g2, g3, g4])
}

/// Multiply a power-basis row vector by [`CATMULL_ROM_BASIS`].
fn blend(params: [f64; 4]) -> [f64; 4] {
    let mut weights = [0.0; 4];
    for (row, &p) in CATMULL_ROM_BASIS.iter().zip(params.iter()) {
        for (w, &c) in weights.iter_mut().zip(row.iter()) {
            *w += p * c;
        }
    }
    weights
}

/// Evaluate the segment at `t`. `t` is not clamped; callers pass `[0, 1]`.
pub fn evaluate(t: f64, geometry: &Geometry) -> Point3 {
    let t2 = t * t;
    geometry.combine(blend([1.0, t, t2, t2 * t]))
}

/// Evaluate the segment through `g2 -> g3` without keeping the geometry.
pub fn evaluate_points(t: f64, g1: Point3, g2: Point3, g3: Point3, g4: Point3) -> Point3 {
    evaluate(t, &build_geometry(g1, g2, g3, g4))
}

/// First derivative of the segment with respect to `t`.
pub fn tangent(t: f64, geometry: &Geometry) -> Vector3 {
    geometry.combine(blend([0.0, 1.0, 2.0 * t, 3.0 * t * t]))
}

/// A single Catmull-Rom segment, parameterized over `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatmullRomSegment {
    pub geometry: Geometry,
}

impl CatmullRomSegment {
    pub fn new(g1: Point3, g2: Point3, g3: Point3, g4: Point3) -> Self {
        Self {
            geometry: build_geometry(g1, g2, g3, g4),
        }
    }

    /// The segment starting at `points[start_index]`, if both neighbours exist.
    pub fn from_points(points: &[Point3], start_index: usize) -> Option<Self> {
        let first = start_index.checked_sub(1)?;
        match points.get(first..first + CATMULL_ROM_POINT_COUNT_LIMIT)? {
            &[g1, g2, g3, g4] => Some(Self::new(g1, g2, g3, g4)),
            _ => None,
        }
    }
}

impl Curve for CatmullRomSegment {
    fn point_at(&self, t: f64) -> Point3 {
        evaluate(t, &self.geometry)
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        tangent(t, &self.geometry)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}
