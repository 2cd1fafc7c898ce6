//! Polyline sampling of a Catmull-Rom curve through a control point list.

use curve_math::Point3;

use crate::catmull_rom::{build_geometry, evaluate, Geometry};
use crate::step::eval_step_count;

/// One interior interval `points[start_index] -> points[start_index + 1]`
/// together with its look-behind and look-ahead neighbours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub start_index: usize,
    pub geometry: Geometry,
}

impl Interval {
    /// Straight-line distance between the two anchors of the interval.
    pub fn distance(&self) -> f64 {
        self.geometry.0[1].distance(self.geometry.0[2])
    }
}

/// Iterate the interior intervals `1..=N-3` of a control point list.
///
/// Yields nothing for fewer than four points. The first and last points
/// are never anchors.
pub fn interior_intervals(points: &[Point3]) -> impl Iterator<Item = Interval> + '_ {
    points.windows(4).enumerate().map(|(i, w)| Interval {
        start_index: i + 1,
        geometry: build_geometry(w[0], w[1], w[2], w[3]),
    })
}

/// Sample the curve through `points` into a polyline.
///
/// Each interval contributes `step_count + 1` samples at `t = step / step_count`,
/// so the anchor shared by two adjacent intervals appears twice.
pub fn sample_curve(points: &[Point3], smoothness: f64) -> Vec<Point3> {
    let mut samples = Vec::new();
    sample_curve_into(points, smoothness, &mut samples);
    samples
}

/// Like [`sample_curve`], reusing the allocation of `out`. `out` is cleared first.
pub fn sample_curve_into(points: &[Point3], smoothness: f64, out: &mut Vec<Point3>) {
    out.clear();
    for interval in interior_intervals(points) {
        let step_count = eval_step_count(interval.distance(), smoothness);
        out.reserve(step_count + 1);
        for step in 0..=step_count {
            let t = step as f64 / step_count as f64;
            out.push(evaluate(t, &interval.geometry));
        }
    }
    log::trace!(
        "sampled {} control points into {} curve points",
        points.len(),
        out.len()
    );
}
