//! Editing session that routes viewport input into a track.

use curve_core::{Result, TrackSettings};
use curve_math::{Point3, Ray};

use crate::input::{resolve_input, EditAction, InputEvent, KeyMap};
use crate::pick::{pick_world_position, Raycast};
use crate::player::TrackPlayer;
use crate::track::CurveTrack;

/// One curve being edited and played back.
#[derive(Debug, Clone)]
pub struct TrackEditor {
    track: CurveTrack,
    player: TrackPlayer,
    keys: KeyMap,
    settings: TrackSettings,
}

impl TrackEditor {
    pub fn new(settings: TrackSettings) -> Self {
        Self {
            track: CurveTrack::new(&settings),
            player: TrackPlayer::new(&settings),
            keys: KeyMap::new(),
            settings,
        }
    }

    pub fn with_track(track: CurveTrack, settings: TrackSettings) -> Self {
        Self {
            track,
            player: TrackPlayer::new(&settings),
            keys: KeyMap::new(),
            settings,
        }
    }

    pub fn track(&self) -> &CurveTrack {
        &self.track
    }

    pub fn track_mut(&mut self) -> &mut CurveTrack {
        &mut self.track
    }

    pub fn player(&self) -> &TrackPlayer {
        &self.player
    }

    pub fn settings(&self) -> &TrackSettings {
        &self.settings
    }

    /// Handle a viewport event. `cursor_ray` is the pick ray under the
    /// cursor for this event. Returns whether the curve changed.
    pub fn handle_event<S: Raycast + ?Sized>(
        &mut self,
        event: &InputEvent,
        cursor_ray: &Ray,
        scene: &S,
    ) -> Result<bool> {
        let Some(action) = resolve_input(&mut self.keys, event) else {
            return Ok(false);
        };

        match action {
            EditAction::AddPointAtCursor(cursor) => {
                let Some(position) =
                    pick_world_position(scene, cursor_ray, self.settings.hit_point_expand)
                else {
                    log::debug!("no surface under cursor {:?}", cursor);
                    return Ok(false);
                };
                self.track.add_point(position)?;
                self.track.refresh();
                log::debug!(
                    "added control point {} at {:?}",
                    self.track.points().len() - 1,
                    position
                );
                Ok(true)
            }
        }
    }

    /// Per-frame update: rebuild stale caches, then advance playback.
    pub fn tick(&mut self, delta: f64) -> Option<Point3> {
        self.track.refresh();
        self.player.tick(&self.track, delta)
    }
}
