use crate::{
    foundation::{
        core::{ScrollMetrics, clamp01},
        error::{ScrollfolioError, ScrollfolioResult},
    },
    host::{DocumentHost, ScrollBehavior},
};

/// Static scroll tuning.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollConfig {
    /// Per-frame EMA factor pulling smoothed progress toward raw progress.
    #[serde(default = "default_scroll_smoothing")]
    pub smoothing: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smoothing: default_scroll_smoothing(),
        }
    }
}

fn default_scroll_smoothing() -> f64 {
    0.08
}

impl ScrollConfig {
    /// Check tuning values.
    pub fn validate(&self) -> ScrollfolioResult<()> {
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(ScrollfolioError::validation(
                "scroll smoothing must be in (0, 1]",
            ));
        }
        Ok(())
    }
}

/// Turns document scroll offsets into a raw and a smoothed progress value.
///
/// Only the smoothed value is meant to drive visuals. It follows the raw value with a fixed
/// per-frame EMA step, so with a factor in `(0, 1]` it never overshoots.
#[derive(Clone, Debug)]
pub struct ScrollBridge {
    raw: f64,
    smoothed: f64,
    smoothing: f64,
}

impl ScrollBridge {
    /// Build a bridge at progress `0`.
    pub fn new(cfg: &ScrollConfig) -> ScrollfolioResult<Self> {
        cfg.validate()?;
        Ok(Self {
            raw: 0.0,
            smoothed: 0.0,
            smoothing: cfg.smoothing,
        })
    }

    /// Recompute raw progress from the document's current scroll offset.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) {
        self.raw = metrics.progress();
    }

    /// Scroll the document to the offset matching `progress` (clamped to `[0, 1]`).
    ///
    /// Raw progress is updated immediately rather than waiting for the resulting scroll event.
    /// Does nothing on a non-scrollable page. Returns whether a scroll was issued.
    #[tracing::instrument(skip(self, host))]
    pub fn scroll_to_progress(&mut self, host: &mut dyn DocumentHost, progress: f64) -> bool {
        let clamped = clamp01(progress);
        let max = host.scroll_metrics().max_scroll();
        if max <= 0.0 {
            return false;
        }
        self.raw = clamped;
        host.scroll_to(clamped * max, ScrollBehavior::Smooth);
        true
    }

    /// Follow an in-page navigation anchor carrying a `data-scroll-progress` value.
    ///
    /// Values that do not parse to a finite number are ignored.
    pub fn navigate(&mut self, host: &mut dyn DocumentHost, attr: &str) -> bool {
        match parse_scroll_progress(attr) {
            Some(p) => self.scroll_to_progress(host, p),
            None => {
                tracing::debug!(attr, "ignoring non-numeric scroll anchor");
                false
            }
        }
    }

    /// Advance smoothed progress one step toward raw progress. Call once per frame.
    pub fn tick(&mut self) -> f64 {
        self.smoothed += (self.raw - self.smoothed) * self.smoothing;
        self.smoothed
    }

    /// Latest raw progress.
    pub fn raw(&self) -> f64 {
        self.raw
    }

    /// Latest smoothed progress.
    pub fn smoothed(&self) -> f64 {
        self.smoothed
    }
}

/// Parse a `data-scroll-progress` attribute the way `parseFloat` reads a leading number.
pub fn parse_scroll_progress(attr: &str) -> Option<f64> {
    let s = attr.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    let mut seen_exp = false;

    while end < bytes.len() {
        let c = bytes[end];
        match c {
            b'+' | b'-' if end == 0 => {}
            b'+' | b'-' if seen_exp && matches!(bytes[end - 1], b'e' | b'E') => {}
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot && !seen_exp => seen_dot = true,
            b'e' | b'E' if seen_digit && !seen_exp => seen_exp = true,
            _ => break,
        }
        end += 1;
    }

    // Back off a dangling exponent marker or sign ("1e", "1e-").
    let mut candidate = &s[..end];
    while let Some(last) = candidate.chars().last() {
        if matches!(last, 'e' | 'E' | '+' | '-') {
            candidate = &candidate[..candidate.len() - 1];
        } else {
            break;
        }
    }

    candidate.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/bridge.rs"]
mod tests;
