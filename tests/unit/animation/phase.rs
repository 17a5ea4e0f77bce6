use super::*;

fn bio() -> TimingWindow {
    TimingWindow::new(0.45, 0.65, 0.86, 1.0).unwrap()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn absent_window_is_transparent() {
    assert_eq!(phase_alpha(0.5, None), 0.0);
}

#[test]
fn boundary_points_match_envelope() {
    let windows = [
        bio(),
        TimingWindow::new(0.82, 0.97, 1.18, 1.32).unwrap(),
        TimingWindow::new(2.05, 2.25, 2.52, 2.72).unwrap(),
        TimingWindow::new(3.45, 3.72, 3.98, 4.2).unwrap(),
    ];
    for w in windows {
        assert_eq!(w.alpha(w.start), 0.0);
        assert!(approx(w.alpha(w.fade_in_end), 1.0));
        assert!(approx(w.alpha(w.fade_out_start), 1.0));
        assert_eq!(w.alpha(w.end), 0.0);
    }
}

#[test]
fn ramps_are_linear_and_monotonic() {
    let w = bio();
    assert!(approx(w.alpha(0.60), 0.75));
    assert!(approx(w.alpha(0.55), 0.5));
    assert!(approx(w.alpha(0.93), 0.5));

    let steps = 200;
    let mut prev = 0.0;
    for i in 0..=steps {
        let p = w.start + (w.fade_in_end - w.start) * f64::from(i) / f64::from(steps);
        let a = w.alpha(p);
        assert!(a >= prev);
        prev = a;
    }
    let mut prev = 1.0;
    for i in 0..=steps {
        let p = w.fade_out_start + (w.end - w.fade_out_start) * f64::from(i) / f64::from(steps);
        let a = w.alpha(p);
        assert!(a <= prev + 1e-12);
        prev = a;
    }
}

#[test]
fn plateau_holds_full_opacity() {
    let w = bio();
    for p in [0.66, 0.7, 0.8, 0.85] {
        assert_eq!(w.alpha(p), 1.0);
    }
}

#[test]
fn output_is_always_in_unit_range() {
    let w = bio();
    for p in [-10.0, -0.1, 0.0, 0.3, 0.5, 0.75, 0.99, 1.0, 1.5, 40.0, f64::INFINITY] {
        let a = w.alpha(p);
        assert!((0.0..=1.0).contains(&a), "alpha {a} at {p}");
    }
    assert_eq!(w.alpha(f64::NAN), 0.0);
}

#[test]
fn zero_length_ramps_resolve_finitely() {
    let w = TimingWindow::new(1.0, 1.0, 2.0, 2.0).unwrap();
    assert_eq!(w.alpha(1.0), 0.0);
    assert_eq!(w.alpha(1.5), 1.0);
    assert_eq!(w.alpha(2.0), 0.0);

    let spike = TimingWindow::new(0.0, 0.5, 0.5, 1.0).unwrap();
    assert!(approx(spike.alpha(0.5), 1.0));
    assert!(approx(spike.alpha(0.75), 0.5));
}

#[test]
fn misordered_or_non_finite_windows_are_rejected() {
    assert!(TimingWindow::new(0.5, 0.4, 0.6, 0.7).is_err());
    assert!(TimingWindow::new(0.1, 0.2, 0.9, 0.8).is_err());
    assert!(TimingWindow::new(0.1, 0.3, 0.2, 0.8).is_err());
    assert!(TimingWindow::new(f64::NAN, 0.2, 0.3, 0.4).is_err());
    assert!(TimingWindow::new(0.0, 0.2, 0.3, f64::INFINITY).is_err());
}

#[test]
fn serde_uses_camel_case_keys() {
    let w: TimingWindow = serde_json::from_str(
        r#"{"start":0.45,"fadeInEnd":0.65,"fadeOutStart":0.86,"end":1.0}"#,
    )
    .unwrap();
    assert_eq!(w, bio());
}
