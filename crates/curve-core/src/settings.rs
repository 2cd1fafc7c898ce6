//! Runtime settings for a curve track.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, Result};
use crate::traits::Validate;

/// Settings shared by the curve entity, the playback driver and the editor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackSettings {
    /// Sampling density in `[0, 1]` (0 = coarsest, 1 = finest).
    pub smoothness: f64,
    /// Total playback duration in time units; one loop along the curve.
    pub duration: f64,
    /// Radius of the control point markers.
    pub point_radius: f64,
    /// Offset along the hit normal applied to picked points.
    pub hit_point_expand: f64,
}

impl TrackSettings {
    pub const DEFAULT_SMOOTHNESS: f64 = 0.0;
    pub const DEFAULT_DURATION: f64 = 10.0;
    /// Shortest loop the playback clock accepts.
    pub const MIN_DURATION: f64 = curve_spline::playback::MIN_DURATION;
    pub const DEFAULT_POINT_RADIUS: f64 = 0.5;
    pub const DEFAULT_HIT_POINT_EXPAND: f64 = 0.0;

    /// Parse settings from TOML text and validate them.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let settings: Self = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&text)?;
        log::info!("Track settings loaded from {}", path.display());
        Ok(settings)
    }

    /// Smoothness clamped into `[0, 1]`.
    pub fn clamped_smoothness(&self) -> f64 {
        self.smoothness.clamp(0.0, 1.0)
    }

    /// Duration raised to at least [`Self::MIN_DURATION`].
    pub fn clamped_duration(&self) -> f64 {
        self.duration.max(Self::MIN_DURATION)
    }
}

impl Default for TrackSettings {
    fn default() -> Self {
        Self {
            smoothness: Self::DEFAULT_SMOOTHNESS,
            duration: Self::DEFAULT_DURATION,
            point_radius: Self::DEFAULT_POINT_RADIUS,
            hit_point_expand: Self::DEFAULT_HIT_POINT_EXPAND,
        }
    }
}

impl Validate for TrackSettings {
    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.smoothness) {
            return Err(CurveError::InvalidSettings(format!(
                "smoothness must lie in [0, 1], got {}",
                self.smoothness
            )));
        }
        if !(self.duration >= Self::MIN_DURATION) {
            return Err(CurveError::InvalidSettings(format!(
                "duration must be at least {}, got {}",
                Self::MIN_DURATION,
                self.duration
            )));
        }
        if !(self.point_radius > 0.0) {
            return Err(CurveError::InvalidSettings(format!(
                "point_radius must be positive, got {}",
                self.point_radius
            )));
        }
        if !self.hit_point_expand.is_finite() {
            return Err(CurveError::InvalidSettings(
                "hit_point_expand must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
