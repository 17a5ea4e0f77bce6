use super::*;

fn page() -> HeadlessPage {
    HeadlessPage::new(Size::new(1400.0, 900.0), 4500.0)
}

#[test]
fn document_reports_metrics_and_clamps_scroll() {
    let p = page();
    let mut doc = p.document();
    assert_eq!(doc.scroll_metrics().max_scroll(), 3600.0);

    doc.scroll_to(9000.0, ScrollBehavior::Smooth);
    assert_eq!(p.state().scroll_y, 3600.0);
    assert_eq!(p.state().scroll_requests, vec![(9000.0, ScrollBehavior::Smooth)]);

    p.scroll_to_y(-20.0);
    assert_eq!(doc.scroll_metrics().scroll_y, 0.0);
}

#[test]
fn panels_record_writes() {
    let p = page();
    let mut panel = p.panel("bio-card");
    panel.set_style("opacity", "0.750");
    panel.toggle_class("bio-card--visible", true);
    panel.set_attribute("aria-hidden", "false");

    let s = p.state();
    let bio = &s.panels["bio-card"];
    assert_eq!(bio.opacity(), Some(0.75));
    assert!(bio.classes.contains("bio-card--visible"));
    assert_eq!(bio.attributes["aria-hidden"], "false");
    assert_eq!(bio.class_writes, 1);
}

#[test]
fn scene_reports_missing_groups() {
    let p = page();
    let mut scene = p.scene();
    assert_eq!(scene.world_position("panelGroup"), None);
    assert!(!scene.set_visible("homeGroup", false));
    assert!(!scene.visit_materials("homeGroup", &mut |_| {}));

    p.insert_node(
        "homeGroup",
        SceneNode::new(Vec3::ZERO, vec![HeadlessMaterial::default()]),
    );
    assert_eq!(scene.world_position("homeGroup"), Some(Vec3::ZERO));
    let mut seen = 0;
    assert!(scene.visit_materials("homeGroup", &mut |m: &mut dyn SceneMaterial| {
        m.set_opacity(0.5);
        seen += 1;
    }));
    assert_eq!(seen, 1);
    assert_eq!(p.state().nodes["homeGroup"].materials[0].opacity, Some(0.5));
}

#[test]
fn renderer_records_camera_or_fails_on_request() {
    let p = page();
    let mut r = p.renderer();
    r.render(&CameraState::default()).unwrap();
    assert_eq!(p.state().frames_rendered, 1);

    p.state_mut().render_failure = Some("context lost".to_string());
    let err = r.render(&CameraState::default()).unwrap_err();
    assert!(err.to_string().contains("context lost"));
    assert_eq!(p.state().frames_rendered, 1);
}
