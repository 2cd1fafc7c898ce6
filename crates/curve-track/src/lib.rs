//! Editing and playback of a Catmull-Rom curve track.

pub mod editor;
pub mod gizmo;
pub mod input;
pub mod pick;
pub mod player;
pub mod track;

pub use editor::TrackEditor;
pub use gizmo::{build_gizmos, GizmoColor, GizmoPrimitive};
pub use input::{resolve_input, EditAction, InputEvent, KeyCode, KeyMap, MouseButton};
pub use pick::{pick_local_position, pick_world_position, RayHit, Raycast};
pub use player::TrackPlayer;
pub use track::{CurveTrack, CurveType};
