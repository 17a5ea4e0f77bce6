use super::*;

#[test]
fn clamp01_handles_nan_and_bounds() {
    assert_eq!(clamp01(f64::NAN), 0.0);
    assert_eq!(clamp01(-3.0), 0.0);
    assert_eq!(clamp01(0.4), 0.4);
    assert_eq!(clamp01(7.0), 1.0);
}

#[test]
fn progress_is_zero_on_short_pages() {
    let m = ScrollMetrics {
        scroll_y: 120.0,
        scroll_height: 800.0,
        viewport_height: 900.0,
    };
    assert!(!m.is_scrollable());
    assert_eq!(m.progress(), 0.0);

    let flush = ScrollMetrics {
        scroll_y: 0.0,
        scroll_height: 900.0,
        viewport_height: 900.0,
    };
    assert_eq!(flush.progress(), 0.0);
}

#[test]
fn progress_divides_by_max_scroll_and_clamps() {
    let m = ScrollMetrics {
        scroll_y: 500.0,
        scroll_height: 3000.0,
        viewport_height: 1000.0,
    };
    assert_eq!(m.max_scroll(), 2000.0);
    assert_eq!(m.progress(), 0.25);

    let over = ScrollMetrics {
        scroll_y: 2600.0,
        ..m
    };
    assert_eq!(over.progress(), 1.0);

    let bounce = ScrollMetrics {
        scroll_y: -40.0,
        ..m
    };
    assert_eq!(bounce.progress(), 0.0);
}
