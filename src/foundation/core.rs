pub use glam::DVec3 as Vec3;
pub use kurbo::Size;

/// Clamp `v` into `[0, 1]`, mapping NaN to `0`.
#[inline]
pub fn clamp01(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Snapshot of the document's scroll geometry, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollMetrics {
    /// Current vertical scroll offset (`window.scrollY`).
    pub scroll_y: f64,
    /// Total document height (`documentElement.scrollHeight`).
    pub scroll_height: f64,
    /// Visible viewport height (`window.innerHeight`).
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Largest reachable scroll offset; `<= 0` means the page does not scroll.
    pub fn max_scroll(self) -> f64 {
        self.scroll_height - self.viewport_height
    }

    /// True when there is scrollable content below the fold.
    pub fn is_scrollable(self) -> bool {
        self.max_scroll() > 0.0
    }

    /// Normalized progress for the current offset, or `0` on a non-scrollable page.
    pub fn progress(self) -> f64 {
        let max = self.max_scroll();
        if max <= 0.0 {
            return 0.0;
        }
        clamp01(self.scroll_y / max)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
