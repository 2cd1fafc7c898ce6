//! Per-interval step accounting that maps playback progress onto the curve.

use curve_math::Point3;

use crate::catmull_rom::CatmullRomSegment;
use crate::curve::Curve;
use crate::sampler::interior_intervals;
use crate::step::eval_step_count;

/// Step accounting for one interior interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentRecord {
    /// Index of the control point the interval starts at.
    pub start_index: usize,
    pub step_count: usize,
    /// Running sum of `step_count` up to and including this record.
    pub cumulative_step_count: usize,
}

/// Resolved position of a progress value: which interval, and where in it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentLocation {
    pub start_index: usize,
    pub local_t: f64,
}

/// Ordered segment table, one record per interior interval.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentTimeline {
    records: Vec<SegmentRecord>,
}

impl SegmentTimeline {
    /// An empty timeline; it never locates anything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the table for `points` at the given smoothness. Step counts use
    /// the same distance definition as [`crate::sampler::sample_curve`].
    pub fn rebuild(points: &[Point3], smoothness: f64) -> Self {
        let mut cumulative_step_count = 0;
        let records: Vec<SegmentRecord> = interior_intervals(points)
            .map(|interval| {
                let step_count = eval_step_count(interval.distance(), smoothness);
                cumulative_step_count += step_count;
                SegmentRecord {
                    start_index: interval.start_index,
                    step_count,
                    cumulative_step_count,
                }
            })
            .collect();
        log::trace!(
            "segment timeline: {} records, {} total steps",
            records.len(),
            cumulative_step_count
        );
        Self { records }
    }

    pub fn records(&self) -> &[SegmentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total step count used for playback timing; 0 when empty.
    pub fn total_steps(&self) -> usize {
        self.records
            .last()
            .map_or(0, |record| record.cumulative_step_count)
    }

    /// Map a progress value in `[0, total_steps)` to an interval.
    ///
    /// Selects the first record whose cumulative count exceeds
    /// `progress_steps`, so a progress exactly on a boundary belongs to the
    /// following interval at `local_t = 0`. Returns `None` for an empty
    /// table, a zero total, or progress at or past the end.
    pub fn locate(&self, progress_steps: f64) -> Option<SegmentLocation> {
        if self.total_steps() == 0 {
            return None;
        }

        let mut previous = 0;
        for record in &self.records {
            if record.cumulative_step_count as f64 > progress_steps {
                return Some(SegmentLocation {
                    start_index: record.start_index,
                    local_t: (progress_steps - previous as f64) / record.step_count as f64,
                });
            }
            previous = record.cumulative_step_count;
        }
        None
    }

    /// Curve position for `progress_steps`, evaluated on the control points
    /// around the located interval.
    ///
    /// A located `start_index` of 0 produces no position. Interior intervals
    /// start at index 1, so this only rejects tables that do not match
    /// `points`.
    pub fn position_at(&self, progress_steps: f64, points: &[Point3]) -> Option<Point3> {
        let location = self.locate(progress_steps)?;
        if location.start_index == 0 {
            return None;
        }
        let segment = CatmullRomSegment::from_points(points, location.start_index)?;
        Some(segment.point_at(location.local_t))
    }
}
