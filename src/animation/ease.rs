/// Easing curve applied to the camera zoom parameter.
///
/// Curves are evaluated as-is: input outside `[0, 1]` is not clamped, callers clamp first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Identity.
    Linear,
    /// Quadratic ease-in-out.
    InOutQuad,
    /// Cubic ease-in-out (`4t³` then `1 - (-2t+2)³/2`).
    #[default]
    InOutCubic,
}

impl Ease {
    /// Evaluate the curve at `t`.
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InOutCubic => ease_in_out_cubic(t),
        }
    }
}

/// Cubic ease-in-out. Not clamped.
#[inline]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
