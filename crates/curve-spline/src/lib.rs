//! Curve track spline engine: Catmull-Rom evaluation, adaptive sampling,
//! and the segment timeline that drives playback along a curve.

pub mod catmull_rom;
pub mod curve;
pub mod playback;
pub mod sampler;
pub mod step;
pub mod timeline;

pub use catmull_rom::{build_geometry, evaluate, CatmullRomSegment, Geometry};
pub use curve::Curve;
pub use playback::{tick, PlaybackClock};
pub use sampler::{interior_intervals, sample_curve, sample_curve_into, Interval};
pub use step::{eval_step_count, MIN_STEP_LENGTH};
pub use timeline::{SegmentLocation, SegmentRecord, SegmentTimeline};
