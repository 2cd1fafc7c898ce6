//! The curve entity: control points, smoothness, and derived caches.

use curve_core::{CurveError, Result, TrackSettings};
use curve_math::{is_valid_point, Point3};
use curve_spline::catmull_rom::CATMULL_ROM_POINT_COUNT_LIMIT;
use curve_spline::{sample_curve, CatmullRomSegment, SegmentTimeline};

/// Interpolation scheme of a track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CurveType {
    #[default]
    CatmullRom,
}

/// A user-sculpted curve.
///
/// Mutations mark the caches dirty; [`CurveTrack::refresh`] rebuilds the
/// sampled polyline and the segment timeline together and swaps them in.
#[derive(Debug, Clone)]
pub struct CurveTrack {
    points: Vec<Point3>,
    curve_type: CurveType,
    smoothness: f64,
    selected: Option<usize>,
    curve_points: Vec<Point3>,
    timeline: SegmentTimeline,
    dirty: bool,
}

impl CurveTrack {
    pub fn new(settings: &TrackSettings) -> Self {
        Self {
            points: Vec::new(),
            curve_type: CurveType::default(),
            smoothness: settings.clamped_smoothness(),
            selected: None,
            curve_points: Vec::new(),
            timeline: SegmentTimeline::new(),
            dirty: true,
        }
    }

    /// A track over `points`, with caches already built.
    pub fn with_points(points: Vec<Point3>, settings: &TrackSettings) -> Result<Self> {
        if let Some(index) = points.iter().position(|&p| !is_usable_point(p)) {
            return Err(CurveError::InvalidPoint(format!(
                "control point {} is {:?}",
                index, points[index]
            )));
        }
        let mut track = Self::new(settings);
        track.points = points;
        track.refresh();
        Ok(track)
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Sampled polyline, as of the last refresh.
    pub fn curve_points(&self) -> &[Point3] {
        &self.curve_points
    }

    /// Segment table, as of the last refresh.
    pub fn timeline(&self) -> &SegmentTimeline {
        &self.timeline
    }

    pub fn smoothness(&self) -> f64 {
        self.smoothness
    }

    pub fn curve_type(&self) -> CurveType {
        self.curve_type
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Whether the track has enough points to form a curve.
    pub fn has_curve(&self) -> bool {
        self.points.len() >= CATMULL_ROM_POINT_COUNT_LIMIT
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Append a control point.
    pub fn add_point(&mut self, point: Point3) -> Result<()> {
        check_point(point)?;
        self.points.push(point);
        self.dirty = true;
        Ok(())
    }

    /// Replace the control point at `index`.
    pub fn set_point(&mut self, index: usize, point: Point3) -> Result<()> {
        check_point(point)?;
        let len = self.points.len();
        let slot = self
            .points
            .get_mut(index)
            .ok_or(CurveError::IndexOutOfRange { index, len })?;
        if *slot != point {
            *slot = point;
            self.dirty = true;
        }
        Ok(())
    }

    pub fn select_point(&mut self, index: Option<usize>) -> Result<()> {
        if let Some(index) = index {
            if index >= self.points.len() {
                return Err(CurveError::IndexOutOfRange {
                    index,
                    len: self.points.len(),
                });
            }
        }
        self.selected = index;
        Ok(())
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_point(&self) -> Option<Point3> {
        self.selected.and_then(|i| self.points.get(i).copied())
    }

    /// Write a dragged handle position back into the selected slot.
    /// Does nothing when no point is selected.
    pub fn set_selected_point(&mut self, point: Point3) -> Result<()> {
        match self.selected {
            Some(index) => self.set_point(index, point),
            None => Ok(()),
        }
    }

    /// Set the smoothness, clamped into `[0, 1]`.
    pub fn set_smoothness(&mut self, smoothness: f64) {
        let smoothness = if smoothness.is_nan() {
            0.0
        } else {
            smoothness.clamp(0.0, 1.0)
        };
        if smoothness != self.smoothness {
            self.smoothness = smoothness;
            self.dirty = true;
        }
    }

    pub fn set_curve_type(&mut self, curve_type: CurveType) {
        if curve_type != self.curve_type {
            self.curve_type = curve_type;
            self.dirty = true;
        }
    }

    /// Rebuild the polyline and timeline if anything changed since the last
    /// refresh. Returns whether a rebuild happened.
    pub fn refresh(&mut self) -> bool {
        if !self.dirty {
            return false;
        }

        let (curve_points, timeline) = match self.curve_type {
            CurveType::CatmullRom => (
                sample_curve(&self.points, self.smoothness),
                SegmentTimeline::rebuild(&self.points, self.smoothness),
            ),
        };
        self.curve_points = curve_points;
        self.timeline = timeline;
        self.dirty = false;

        log::debug!(
            "track rebuilt: {} control points, {} curve points, {} total steps",
            self.points.len(),
            self.curve_points.len(),
            self.timeline.total_steps()
        );
        true
    }

    /// The spline segment starting at control point `start_index`.
    pub fn segment(&self, start_index: usize) -> Option<CatmullRomSegment> {
        CatmullRomSegment::from_points(&self.points, start_index)
    }
}

/// Control points must be free of NaN and infinite coordinates.
fn is_usable_point(point: Point3) -> bool {
    is_valid_point(point) && point.is_finite()
}

fn check_point(point: Point3) -> Result<()> {
    if is_usable_point(point) {
        Ok(())
    } else {
        log::warn!("rejected control point {:?}", point);
        Err(CurveError::InvalidPoint(format!("{:?}", point)))
    }
}
