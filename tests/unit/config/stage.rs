use super::*;

#[test]
fn portfolio_config_is_valid() {
    let cfg = StageConfig::portfolio();
    cfg.validate().unwrap();
    let keys: Vec<_> = cfg.overlays.iter().map(|o| o.key.as_str()).collect();
    assert_eq!(
        keys,
        ["bio", "skills", "languages", "experience", "education", "projects"]
    );
    assert_eq!(cfg.overlays[5].scale, 4.0);
    assert_eq!(cfg.camera.zoom_phase_end, 0.24);
    assert_eq!(cfg.scroll.smoothing, 0.08);
    assert_eq!(cfg.visibility_threshold, 0.05);
}

#[test]
fn json_roundtrip_preserves_portfolio() {
    let cfg = StageConfig::portfolio();
    let json = cfg.to_json_pretty().unwrap();
    assert!(json.contains("\"fadeInEnd\""));
    assert!(json.contains("\"suppressWhile\""));
    let back = StageConfig::from_json_str(&json).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn minimal_json_fills_defaults() {
    let json = r#"{
        "overlays": [
            {"key": "bio", "elementId": "bio-card", "visibleClass": "on",
             "timing": {"start": 0.1, "fadeInEnd": 0.2, "fadeOutStart": 0.3, "end": 0.4}}
        ],
        "viewports": [
            {"id": "any", "start": [0.0, 3.0, 9.0], "board": [0.0, 1.8, 2.4]}
        ]
    }"#;
    let cfg = StageConfig::from_json_str(json).unwrap();
    assert_eq!(cfg.overlays[0].scale, 3.0);
    assert_eq!(cfg.camera.smoothing, 0.12);
    assert_eq!(cfg.hero.group, "homeGroup");
    assert_eq!(cfg.panel.group, "panelGroup");
}

#[test]
fn misordered_timing_fails_loudly() {
    let mut cfg = StageConfig::portfolio();
    if let Some(t) = cfg.overlays[1].timing.as_mut() {
        t.fade_out_start = 0.9;
    }
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("skills"));
}

#[test]
fn adjust_must_reference_earlier_overlay() {
    let mut cfg = StageConfig::portfolio();
    cfg.overlays[0].adjust = Some(AdjustRule::SuppressWhile {
        key: "education".to_string(),
    });
    assert!(cfg.validate().is_err());
}

#[test]
fn duplicate_keys_and_element_ids_are_rejected() {
    let mut cfg = StageConfig::portfolio();
    cfg.overlays[1].key = "bio".to_string();
    assert!(cfg.validate().is_err());

    let mut cfg = StageConfig::portfolio();
    cfg.overlays[1].element_id = "bio-card".to_string();
    assert!(cfg.validate().is_err());
}

#[test]
fn bad_sections_are_rejected() {
    let mut cfg = StageConfig::portfolio();
    cfg.viewports.clear();
    assert!(cfg.validate().is_err());

    let mut cfg = StageConfig::portfolio();
    cfg.visibility_threshold = 1.0;
    assert!(cfg.validate().is_err());

    let mut cfg = StageConfig::portfolio();
    cfg.scroll.smoothing = 0.0;
    assert!(cfg.validate().is_err());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = StageConfig::from_json_str("{").unwrap_err();
    assert!(matches!(err, ScrollfolioError::Serde(_)));
}
