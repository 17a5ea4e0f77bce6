use super::*;

fn profiles() -> ViewportProfiles {
    ViewportProfiles::new(vec![
        ViewportProfile {
            id: "mobile".to_string(),
            max_width: Some(640.0),
            start: Vec3::new(0.0, 3.25, 10.4),
            board: Vec3::new(0.0, 1.68, 3.55),
        },
        ViewportProfile {
            id: "tablet".to_string(),
            max_width: Some(1024.0),
            start: Vec3::new(0.0, 3.18, 9.6),
            board: Vec3::new(0.0, 1.74, 3.05),
        },
        ViewportProfile {
            id: "desktop".to_string(),
            max_width: None,
            start: Vec3::new(0.0, 3.0, 9.0),
            board: Vec3::new(0.0, 1.82, 2.35),
        },
    ])
    .unwrap()
}

fn rig() -> CameraRig {
    CameraRig::new(CameraConfig::default(), profiles()).unwrap()
}

fn close(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-6
}

#[test]
fn widths_select_mobile_tablet_desktop() {
    let mut r = rig();
    assert!(r.update_viewport(500.0, true));
    assert_eq!(r.profile().unwrap().id, "mobile");
    assert!(r.update_viewport(800.0, false));
    assert_eq!(r.profile().unwrap().id, "tablet");
    assert!(r.update_viewport(1400.0, false));
    assert_eq!(r.profile().unwrap().id, "desktop");
    assert!(!r.update_viewport(1900.0, false));
}

#[test]
fn initial_call_snaps_to_profile_start() {
    let mut r = rig();
    r.update_viewport(500.0, true);
    assert_eq!(r.camera().position, Vec3::new(0.0, 3.25, 10.4));
    assert_eq!(r.camera().target, Vec3::new(0.0, 1.0, 0.0));
    assert_eq!(r.desired(), (Vec3::new(0.0, 3.25, 10.4), Vec3::new(0.0, 1.0, 0.0)));
}

#[test]
fn profile_change_reseeds_desired_from_live_camera() {
    let mut r = rig();
    r.update_viewport(500.0, true);
    let look = Vec3::new(0.0, 1.3, 0.1);
    for _ in 0..10 {
        r.update_camera(0.12, look);
    }
    let live = *r.camera();

    r.update_viewport(800.0, false);
    assert_eq!(r.camera().position, live.position, "live camera must not snap");
    assert_eq!(r.desired(), (live.position, live.target));

    r.update_viewport(1400.0, false);
    assert_eq!(r.desired(), (live.position, live.target));
}

#[test]
fn zoom_t_clamps_over_phase() {
    let r = rig();
    assert_eq!(r.zoom_t(-0.5), 0.0);
    assert_eq!(r.zoom_t(0.0), 0.0);
    assert!((r.zoom_t(0.12) - 0.5).abs() < 1e-12);
    assert_eq!(r.zoom_t(0.24), 1.0);
    assert_eq!(r.zoom_t(0.9), 1.0);

    let snap = CameraRig::new(
        CameraConfig {
            zoom_phase_end: 0.0,
            ..CameraConfig::default()
        },
        profiles(),
    )
    .unwrap();
    assert_eq!(snap.zoom_t(0.0), 1.0);
}

#[test]
fn update_camera_smooths_by_fixed_factor() {
    let mut r = rig();
    r.update_viewport(1400.0, true);
    let look = Vec3::new(0.0, 1.3, 0.1);

    r.update_camera(1.0, look);
    let (desired_pos, desired_target) = r.desired();
    assert!(close(desired_pos, Vec3::new(0.0, 1.82, 2.35)));
    assert!(close(desired_target, look));

    let start = Vec3::new(0.0, 3.0, 9.0);
    let expected = start + (desired_pos - start) * 0.12;
    assert!(close(r.camera().position, expected));
}

#[test]
fn camera_converges_on_board_pose() {
    let mut r = rig();
    r.update_viewport(1400.0, true);
    let look = Vec3::new(0.0, 1.5, 0.7);
    for _ in 0..400 {
        r.update_camera(0.5, look);
    }
    assert!(close(r.camera().position, Vec3::new(0.0, 1.82, 2.35)));
    assert!(close(r.camera().target, look));
}

#[test]
fn at_top_of_page_camera_stays_on_start_pose() {
    let mut r = rig();
    r.update_viewport(1400.0, true);
    for _ in 0..30 {
        r.update_camera(0.0, Vec3::new(0.0, 1.3, 0.1));
    }
    assert!(close(r.camera().position, Vec3::new(0.0, 3.0, 9.0)));
    assert!(close(r.camera().target, Vec3::new(0.0, 1.0, 0.0)));
}

#[test]
fn invalid_tuning_is_rejected() {
    for smoothing in [0.0, -0.1, 1.5, f64::NAN] {
        let cfg = CameraConfig {
            smoothing,
            ..CameraConfig::default()
        };
        assert!(CameraRig::new(cfg, profiles()).is_err());
    }
    let cfg = CameraConfig {
        zoom_phase_end: -1.0,
        ..CameraConfig::default()
    };
    assert!(CameraRig::new(cfg, profiles()).is_err());
}
