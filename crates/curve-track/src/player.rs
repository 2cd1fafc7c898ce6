//! Playback driver that moves a target along a track.

use curve_core::TrackSettings;
use curve_math::Point3;
use curve_spline::{tick, PlaybackClock};

use crate::track::CurveTrack;

/// Loops a target along a [`CurveTrack`] once per `duration`.
#[derive(Debug, Clone)]
pub struct TrackPlayer {
    clock: PlaybackClock,
    duration: f64,
}

impl TrackPlayer {
    pub fn new(settings: &TrackSettings) -> Self {
        Self {
            clock: PlaybackClock::new(),
            duration: settings.clamped_duration(),
        }
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn set_duration(&mut self, duration: f64) {
        self.duration = duration.max(TrackSettings::MIN_DURATION);
    }

    pub fn elapsed(&self) -> f64 {
        self.clock.elapsed()
    }

    pub fn reset(&mut self) {
        self.clock.reset();
    }

    /// Advance by `delta` and return where the target should be, if anywhere.
    ///
    /// Reads the track caches as they are; callers refresh the track first.
    pub fn tick(&mut self, track: &CurveTrack, delta: f64) -> Option<Point3> {
        tick(
            &mut self.clock,
            delta,
            self.duration,
            track.timeline(),
            track.points(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use curve_math::DVec3;

    #[test]
    fn test_duration_floor() {
        let settings = TrackSettings {
            duration: 0.2,
            ..TrackSettings::default()
        };
        let mut player = TrackPlayer::new(&settings);
        assert_eq!(player.duration(), 1.0);
        player.set_duration(0.0);
        assert_eq!(player.duration(), 1.0);
        player.set_duration(6.0);
        assert_eq!(player.duration(), 6.0);
    }

    #[test]
    fn test_no_position_without_curve() {
        let mut track = CurveTrack::new(&TrackSettings::default());
        track.refresh();
        let mut player = TrackPlayer::new(&TrackSettings::default());
        assert!(player.tick(&track, 0.5).is_none());
        assert_eq!(player.elapsed(), 0.5);
    }

    #[test]
    fn test_tick_and_reset() {
        let points = (0..4).map(|i| DVec3::new(0.0, i as f64, 0.0)).collect();
        let settings = TrackSettings {
            duration: 2.0,
            ..TrackSettings::default()
        };
        let track = CurveTrack::with_points(points, &settings).unwrap();
        let mut player = TrackPlayer::new(&settings);

        let p = player.tick(&track, 1.0).unwrap();
        assert_abs_diff_eq!(p, DVec3::new(0.0, 1.5, 0.0), epsilon = 1e-12);

        player.reset();
        let p = player.tick(&track, 0.0).unwrap();
        assert_abs_diff_eq!(p, DVec3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
    }
}
