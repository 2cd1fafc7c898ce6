use approx::assert_abs_diff_eq;
use curve_core::{CurveError, TrackSettings};
use curve_math::{DVec3, Plane, Point2, Ray};
use curve_track::{
    build_gizmos, CurveTrack, GizmoPrimitive, InputEvent, KeyCode, MouseButton, TrackEditor,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn down_ray(x: f64, z: f64) -> Ray {
    Ray::new(DVec3::new(x, 50.0, z), DVec3::NEG_Y)
}

fn left_click(x: f64, y: f64) -> InputEvent {
    InputEvent::MouseDown {
        button: MouseButton::Left,
        cursor: Point2::new(x, y),
    }
}

fn hold_add_combo(editor: &mut TrackEditor) {
    let ground = Plane::xz();
    for key in [KeyCode::LeftShift, KeyCode::A] {
        let changed = editor
            .handle_event(&InputEvent::KeyDown(key), &down_ray(0.0, 0.0), &ground)
            .unwrap();
        assert!(!changed);
    }
}

#[test]
fn test_click_to_add_points_and_play() {
    init_logger();
    let settings = TrackSettings {
        smoothness: 1.0,
        duration: 3.0,
        hit_point_expand: 0.5,
        ..TrackSettings::default()
    };
    let mut editor = TrackEditor::new(settings);
    let ground = Plane::xz();

    // without the combo a click does nothing
    assert!(!editor
        .handle_event(&left_click(0.0, 0.0), &down_ray(0.0, 0.0), &ground)
        .unwrap());

    hold_add_combo(&mut editor);
    for x in 0..6 {
        let changed = editor
            .handle_event(&left_click(x as f64, 0.0), &down_ray(x as f64, 0.0), &ground)
            .unwrap();
        assert!(changed);
    }

    let track = editor.track();
    assert_eq!(track.points().len(), 6);
    assert!(!track.is_dirty());
    assert_abs_diff_eq!(track.points()[3], DVec3::new(3.0, 0.5, 0.0), epsilon = 1e-12);
    assert_eq!(track.timeline().len(), 3);
    assert_eq!(track.timeline().total_steps(), 30);
    assert_eq!(track.curve_points().len(), 33);

    let start = editor.tick(0.0).unwrap();
    assert_abs_diff_eq!(start, DVec3::new(1.0, 0.5, 0.0), epsilon = 1e-12);
    let mid = editor.tick(1.5).unwrap();
    assert_abs_diff_eq!(mid, DVec3::new(2.5, 0.5, 0.0), epsilon = 1e-9);
    let wrapped = editor.tick(1.5).unwrap();
    assert_abs_diff_eq!(wrapped, DVec3::new(1.0, 0.5, 0.0), epsilon = 1e-12);
}

#[test]
fn test_click_into_empty_space() {
    init_logger();
    let mut editor = TrackEditor::new(TrackSettings::default());
    hold_add_combo(&mut editor);
    let sky = Ray::new(DVec3::new(0.0, 5.0, 0.0), DVec3::Y);
    let changed = editor
        .handle_event(&left_click(0.0, 0.0), &sky, &Plane::xz())
        .unwrap();
    assert!(!changed);
    assert!(editor.track().points().is_empty());
}

#[test]
fn test_releasing_combo_stops_adding() {
    init_logger();
    let mut editor = TrackEditor::new(TrackSettings::default());
    let ground = Plane::xz();
    hold_add_combo(&mut editor);
    assert!(editor
        .handle_event(&left_click(0.0, 0.0), &down_ray(1.0, 1.0), &ground)
        .unwrap());
    editor
        .handle_event(&InputEvent::KeyUp(KeyCode::LeftShift), &down_ray(0.0, 0.0), &ground)
        .unwrap();
    assert!(!editor
        .handle_event(&left_click(0.0, 0.0), &down_ray(2.0, 2.0), &ground)
        .unwrap());
    assert_eq!(editor.track().points().len(), 1);
}

#[test]
fn test_drag_selected_point_rebuilds_on_tick() {
    init_logger();
    let points: Vec<DVec3> = (0..5).map(|i| DVec3::new(i as f64, 0.0, 0.0)).collect();
    let settings = TrackSettings::default();
    let track = CurveTrack::with_points(points, &settings).unwrap();
    let mut editor = TrackEditor::with_track(track, settings);

    editor.track_mut().select_point(Some(2)).unwrap();
    editor
        .track_mut()
        .set_selected_point(DVec3::new(2.0, 3.0, 0.0))
        .unwrap();
    assert!(editor.track().is_dirty());

    editor.tick(0.0);
    assert!(!editor.track().is_dirty());
    assert_abs_diff_eq!(
        editor.track().curve_points()[1],
        DVec3::new(2.0, 3.0, 0.0),
        epsilon = 1e-12
    );

    let err = editor
        .track_mut()
        .set_point(7, DVec3::ZERO)
        .unwrap_err();
    assert!(matches!(err, CurveError::IndexOutOfRange { .. }));
}

#[test]
fn test_gizmos_follow_refresh() {
    init_logger();
    let mut editor = TrackEditor::new(TrackSettings::default());
    for i in 0..4 {
        editor
            .track_mut()
            .add_point(DVec3::new(0.0, 0.0, i as f64))
            .unwrap();
    }
    let radius = editor.settings().point_radius;
    let before = build_gizmos(editor.track(), radius);
    assert!(before
        .iter()
        .all(|g| matches!(g, GizmoPrimitive::Sphere { .. })));

    editor.tick(0.1);
    let after = build_gizmos(editor.track(), radius);
    assert_eq!(after.len(), 4 + 1);
}
