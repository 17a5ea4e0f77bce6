use super::*;
use crate::{
    foundation::core::{Size, Vec3},
    host::headless::{HeadlessMaterial, HeadlessPage, SceneNode},
};

fn fade() -> HeroFade {
    HeroFade::new(HeroConfig::default()).unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn opacity_is_full_before_hide_threshold() {
    let h = fade();
    assert_eq!(h.opacity(0.0, 0.0), 1.0);
    assert_eq!(h.opacity(0.34, 0.0), 1.0);
}

#[test]
fn opacity_ramps_over_fade_range() {
    let h = fade();
    assert!(close(h.opacity(0.38, 0.0), 0.5));
    assert!(close(h.opacity(0.42, 0.0), 0.0));
    assert_eq!(h.opacity(0.9, 0.0), 0.0);
}

#[test]
fn visible_overlays_push_hero_out() {
    let h = fade();
    assert!(close(h.opacity(0.1, 0.25), 0.65));
    assert_eq!(h.opacity(0.1, 0.75), 0.0);
    assert!(close(h.opacity(0.38, 0.25), 0.325));
}

#[test]
fn zero_range_fade_is_a_step() {
    let h = HeroFade::new(HeroConfig {
        fade_range: 0.0,
        ..HeroConfig::default()
    })
    .unwrap();
    assert_eq!(h.opacity(0.34, 0.0), 1.0);
    assert_eq!(h.opacity(0.3401, 0.0), 0.0);
}

#[test]
fn apply_writes_materials_and_visibility() {
    let page = HeadlessPage::new(Size::new(1400.0, 900.0), 4000.0);
    page.insert_node(
        "homeGroup",
        SceneNode::new(
            Vec3::ZERO,
            vec![
                HeadlessMaterial::default(),
                HeadlessMaterial {
                    opacity: None,
                    transparent: false,
                },
                HeadlessMaterial {
                    opacity: Some(1.0),
                    transparent: true,
                },
            ],
        ),
    );
    let mut scene = page.scene();
    let h = fade();

    let st = h.apply(&mut scene, 0.4).unwrap();
    assert_eq!(
        st,
        HeroState {
            opacity: 0.4,
            visible: true
        }
    );
    {
        let s = page.state();
        let node = &s.nodes["homeGroup"];
        assert!(node.visible);
        assert_eq!(node.materials[0].opacity, Some(0.4));
        assert!(node.materials[0].transparent);
        assert_eq!(node.materials[1].opacity, None);
        assert!(!node.materials[1].transparent, "opacity-less materials are skipped");
        assert_eq!(node.materials[2].opacity, Some(0.4));
    }

    let st = h.apply(&mut scene, 0.01).unwrap();
    assert!(!st.visible);
    assert!(!page.state().nodes["homeGroup"].visible);
}

#[test]
fn apply_without_group_is_skipped() {
    let page = HeadlessPage::new(Size::new(1400.0, 900.0), 4000.0);
    let mut scene = page.scene();
    assert_eq!(fade().apply(&mut scene, 1.0), None);
}

#[test]
fn negative_tuning_is_rejected() {
    let cfg = HeroConfig {
        overlay_gain: -1.0,
        ..HeroConfig::default()
    };
    assert!(HeroFade::new(cfg).is_err());
    let cfg = HeroConfig {
        group: " ".to_string(),
        ..HeroConfig::default()
    };
    assert!(HeroFade::new(cfg).is_err());
}
