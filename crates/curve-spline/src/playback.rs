//! Looping playback clock and the per-tick time-to-position mapping.

use curve_math::Point3;

use crate::timeline::SegmentTimeline;

/// Shortest loop duration accepted by the clock.
pub const MIN_DURATION: f64 = 1.0;

/// Elapsed time of a looping playback, wrapped to `[0, duration)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlaybackClock {
    elapsed: f64,
}

impl PlaybackClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    /// Advance by `delta` and return the progress fraction in `[0, 1)`.
    /// `duration` is raised to [`MIN_DURATION`].
    pub fn advance(&mut self, delta: f64, duration: f64) -> f64 {
        let duration = duration.max(MIN_DURATION);
        let mut elapsed = (self.elapsed + delta).rem_euclid(duration);
        // rem_euclid may round up to the divisor for tiny negative inputs
        if !(elapsed < duration) {
            elapsed = 0.0;
        }
        self.elapsed = elapsed;
        elapsed / duration
    }
}

/// Advance `clock` and return the animated position on the curve, if any.
///
/// `timeline` must have been rebuilt from `points`. Yields `None` while the
/// table is empty or has no steps.
pub fn tick(
    clock: &mut PlaybackClock,
    delta: f64,
    duration: f64,
    timeline: &SegmentTimeline,
    points: &[Point3],
) -> Option<Point3> {
    let fraction = clock.advance(delta, duration);
    let progress_steps = fraction * timeline.total_steps() as f64;
    let position = timeline.position_at(progress_steps, points);
    log::trace!(
        "playback tick: elapsed {:.3}, progress {:.3} steps, position {:?}",
        clock.elapsed(),
        progress_steps,
        position
    );
    position
}
