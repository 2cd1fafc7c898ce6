//! Step count estimation for approximating a spline arc with line segments.

/// Finest resolution: no linear sub-segment is shorter than this.
pub const MIN_STEP_LENGTH: f64 = 0.1;

/// Number of linear sub-segments used to approximate an arc spanning `distance`.
///
/// The effective step length is interpolated between `distance` (one step
/// covers the whole arc) at `smoothness = 0` and [`MIN_STEP_LENGTH`] at
/// `smoothness = 1`. Always returns at least 1. No upper bound is applied,
/// so very long arcs at high smoothness produce many steps.
pub fn eval_step_count(distance: f64, smoothness: f64) -> usize {
    if smoothness <= 0.0 {
        return 1;
    }
    if distance <= MIN_STEP_LENGTH {
        return 1;
    }

    let step_length = if smoothness >= 1.0 {
        MIN_STEP_LENGTH
    } else {
        distance - (distance - MIN_STEP_LENGTH) * smoothness
    };
    // NaN distances cast to 0
    ((distance / step_length).ceil() as usize).max(1)
}
