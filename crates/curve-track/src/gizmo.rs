//! Point and line draw list for visualizing a track.

use curve_math::Point3;

use crate::track::CurveTrack;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GizmoColor {
    Red,
    Yellow,
    Green,
}

impl GizmoColor {
    pub fn rgba(self) -> [f32; 4] {
        match self {
            GizmoColor::Red => [1.0, 0.0, 0.0, 1.0],
            GizmoColor::Yellow => [1.0, 0.92, 0.016, 1.0],
            GizmoColor::Green => [0.0, 1.0, 0.0, 1.0],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GizmoPrimitive {
    Sphere {
        center: Point3,
        radius: f64,
        color: GizmoColor,
    },
    Line {
        from: Point3,
        to: Point3,
        color: GizmoColor,
    },
}

/// Draw list for `track`: a sphere per control point (red at the ends,
/// yellow inside) followed by green lines along the sampled curve.
pub fn build_gizmos(track: &CurveTrack, point_radius: f64) -> Vec<GizmoPrimitive> {
    let points = track.points();
    let curve = track.curve_points();
    let mut gizmos = Vec::with_capacity(points.len() + curve.len().saturating_sub(1));

    let last = points.len().saturating_sub(1);
    gizmos.extend(points.iter().enumerate().map(|(i, &center)| {
        let color = if i > 0 && i < last {
            GizmoColor::Yellow
        } else {
            GizmoColor::Red
        };
        GizmoPrimitive::Sphere {
            center,
            radius: point_radius,
            color,
        }
    }));

    gizmos.extend(curve.windows(2).map(|w| GizmoPrimitive::Line {
        from: w[0],
        to: w[1],
        color: GizmoColor::Green,
    }));

    gizmos
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve_core::TrackSettings;
    use curve_math::DVec3;

    fn sphere_colors(gizmos: &[GizmoPrimitive]) -> Vec<GizmoColor> {
        gizmos
            .iter()
            .filter_map(|g| match g {
                GizmoPrimitive::Sphere { color, .. } => Some(*color),
                GizmoPrimitive::Line { .. } => None,
            })
            .collect()
    }

    #[test]
    fn test_empty_track() {
        let track = CurveTrack::new(&TrackSettings::default());
        assert!(build_gizmos(&track, 0.5).is_empty());
    }

    #[test]
    fn test_point_colors() {
        let points = (0..5).map(|i| DVec3::new(i as f64, 0.0, 0.0)).collect();
        let track = CurveTrack::with_points(points, &TrackSettings::default()).unwrap();
        let gizmos = build_gizmos(&track, 0.25);
        use GizmoColor::*;
        assert_eq!(sphere_colors(&gizmos), vec![Red, Yellow, Yellow, Yellow, Red]);
    }

    #[test]
    fn test_curve_lines() {
        let points = (0..5).map(|i| DVec3::new(i as f64, 0.0, 0.0)).collect();
        let track = CurveTrack::with_points(points, &TrackSettings::default()).unwrap();
        let gizmos = build_gizmos(&track, 0.25);
        let lines: Vec<_> = gizmos
            .iter()
            .filter(|g| matches!(g, GizmoPrimitive::Line { .. }))
            .collect();
        // 4 samples (two per interval) -> 3 lines, one of zero length at the shared anchor
        assert_eq!(lines.len(), 3);
        assert_eq!(
            *lines[0],
            GizmoPrimitive::Line {
                from: DVec3::new(1.0, 0.0, 0.0),
                to: DVec3::new(2.0, 0.0, 0.0),
                color: GizmoColor::Green,
            }
        );
    }

    #[test]
    fn test_single_point_is_red() {
        let track = CurveTrack::with_points(vec![DVec3::ZERO], &TrackSettings::default()).unwrap();
        assert_eq!(sphere_colors(&build_gizmos(&track, 1.0)), vec![GizmoColor::Red]);
    }

    #[test]
    fn test_rgba() {
        assert_eq!(GizmoColor::Green.rgba(), [0.0, 1.0, 0.0, 1.0]);
    }
}
