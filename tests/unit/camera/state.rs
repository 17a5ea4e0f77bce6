use super::*;

#[test]
fn default_matches_hero_framing() {
    let c = CameraState::default();
    assert_eq!(c.position, Vec3::new(0.0, 3.0, 9.0));
    assert_eq!(c.target, Vec3::new(0.0, 1.0, 0.0));
    assert_eq!(c.fov_y_deg, 60.0);
}

#[test]
fn view_matrix_maps_eye_to_origin() {
    let c = CameraState::default();
    let eye = c.view_matrix().transform_point3(c.position);
    assert!(eye.length() < 1e-9);

    let target = c.view_matrix().transform_point3(c.target);
    assert!(target.z < 0.0, "target must be in front of a right-handed camera");
}

#[test]
fn set_viewport_ignores_degenerate_sizes() {
    let mut c = CameraState::default();
    c.set_viewport(1600.0, 800.0);
    assert_eq!(c.aspect, 2.0);
    c.set_viewport(0.0, 800.0);
    assert_eq!(c.aspect, 2.0);
    c.set_viewport(1600.0, f64::NAN);
    assert_eq!(c.aspect, 2.0);
}
