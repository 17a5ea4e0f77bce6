use crate::foundation::{
    core::clamp01,
    error::{ScrollfolioError, ScrollfolioResult},
};

/// Denominator substituted for zero-length fade ramps.
pub const MIN_RAMP: f64 = 1e-4;

/// Trapezoidal opacity envelope in scaled-progress units.
///
/// The curve is `0` up to `start`, ramps linearly to `1` at `fade_in_end`, holds until
/// `fade_out_start`, then ramps back to `0` at `end`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingWindow {
    /// Alpha starts rising after this point.
    pub start: f64,
    /// Alpha reaches `1` here.
    pub fade_in_end: f64,
    /// Alpha starts falling after this point.
    pub fade_out_start: f64,
    /// Alpha is back at `0` here.
    pub end: f64,
}

impl TimingWindow {
    /// Build a validated window.
    pub fn new(
        start: f64,
        fade_in_end: f64,
        fade_out_start: f64,
        end: f64,
    ) -> ScrollfolioResult<Self> {
        let w = Self {
            start,
            fade_in_end,
            fade_out_start,
            end,
        };
        w.validate()?;
        Ok(w)
    }

    /// Check that all points are finite and ordered `start <= fade_in_end <= fade_out_start <= end`.
    pub fn validate(&self) -> ScrollfolioResult<()> {
        for (name, v) in [
            ("start", self.start),
            ("fadeInEnd", self.fade_in_end),
            ("fadeOutStart", self.fade_out_start),
            ("end", self.end),
        ] {
            if !v.is_finite() {
                return Err(ScrollfolioError::validation(format!(
                    "timing window {name} must be finite"
                )));
            }
        }
        if !(self.start <= self.fade_in_end
            && self.fade_in_end <= self.fade_out_start
            && self.fade_out_start <= self.end)
        {
            return Err(ScrollfolioError::validation(format!(
                "timing window must satisfy start <= fadeInEnd <= fadeOutStart <= end, got {{{}, {}, {}, {}}}",
                self.start, self.fade_in_end, self.fade_out_start, self.end
            )));
        }
        Ok(())
    }

    /// Opacity of this window at `progress`.
    #[inline]
    pub fn alpha(&self, progress: f64) -> f64 {
        phase_alpha(progress, Some(self))
    }
}

/// Map a scaled progress value through an optional timing window to an opacity in `[0, 1]`.
pub fn phase_alpha(progress: f64, timing: Option<&TimingWindow>) -> f64 {
    let Some(t) = timing else {
        return 0.0;
    };
    if progress.is_nan() || progress <= t.start || progress >= t.end {
        return 0.0;
    }

    if progress <= t.fade_in_end {
        return clamp01((progress - t.start) / ramp(t.fade_in_end - t.start));
    }

    if progress >= t.fade_out_start {
        return clamp01(1.0 - (progress - t.fade_out_start) / ramp(t.end - t.fade_out_start));
    }

    1.0
}

fn ramp(span: f64) -> f64 {
    if span == 0.0 || span.is_nan() {
        MIN_RAMP
    } else {
        span
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/phase.rs"]
mod tests;
