use crate::foundation::{
    core::Vec3,
    error::{ScrollfolioError, ScrollfolioResult},
};

/// Camera framing for one class of viewport widths.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportProfile {
    /// Stable profile identifier (`mobile`, `tablet`, `desktop`).
    pub id: String,
    /// Widest viewport (inclusive) this profile applies to; `None` means unbounded.
    #[serde(default)]
    pub max_width: Option<f64>,
    /// Camera position at the top of the page.
    pub start: Vec3,
    /// Camera position once zoomed onto the signboard.
    pub board: Vec3,
}

impl ViewportProfile {
    fn admits(&self, width: f64) -> bool {
        self.max_width.is_none_or(|max| width <= max)
    }
}

/// Ordered profile table. The last profile is always the unbounded fallback.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportProfiles {
    profiles: Vec<ViewportProfile>,
}

impl ViewportProfiles {
    /// Validate and wrap a profile table.
    ///
    /// Bounded widths must be finite and strictly increasing, only the last profile may be
    /// unbounded, and it must be.
    pub fn new(profiles: Vec<ViewportProfile>) -> ScrollfolioResult<Self> {
        let Some(last) = profiles.last() else {
            return Err(ScrollfolioError::validation(
                "viewport profile table must not be empty",
            ));
        };
        if last.max_width.is_some() {
            return Err(ScrollfolioError::validation(format!(
                "last viewport profile '{}' must have no maxWidth (it is the fallback)",
                last.id
            )));
        }

        let mut prev: Option<f64> = None;
        for (i, p) in profiles.iter().enumerate() {
            if p.id.trim().is_empty() {
                return Err(ScrollfolioError::validation("viewport profile id must be non-empty"));
            }
            if profiles[..i].iter().any(|q| q.id == p.id) {
                return Err(ScrollfolioError::validation(format!(
                    "duplicate viewport profile id '{}'",
                    p.id
                )));
            }
            if !p.start.is_finite() || !p.board.is_finite() {
                return Err(ScrollfolioError::validation(format!(
                    "viewport profile '{}' positions must be finite",
                    p.id
                )));
            }
            if i + 1 == profiles.len() {
                break;
            }
            let Some(max) = p.max_width else {
                return Err(ScrollfolioError::validation(format!(
                    "only the last viewport profile may be unbounded, '{}' is not last",
                    p.id
                )));
            };
            if !max.is_finite() || max < 0.0 {
                return Err(ScrollfolioError::validation(format!(
                    "viewport profile '{}' maxWidth must be finite and >= 0",
                    p.id
                )));
            }
            if prev.is_some_and(|prev| max <= prev) {
                return Err(ScrollfolioError::validation(format!(
                    "viewport profile '{}' maxWidth must increase along the table",
                    p.id
                )));
            }
            prev = Some(max);
        }

        Ok(Self { profiles })
    }

    /// Index of the narrowest profile admitting `width`, falling back to the last profile.
    pub fn select(&self, width: f64) -> usize {
        self.profiles
            .iter()
            .position(|p| p.admits(width))
            .unwrap_or(self.profiles.len() - 1)
    }

    /// Profile at `index`.
    pub fn get(&self, index: usize) -> Option<&ViewportProfile> {
        self.profiles.get(index)
    }

    /// All profiles in table order.
    pub fn as_slice(&self) -> &[ViewportProfile] {
        &self.profiles
    }
}

#[cfg(test)]
#[path = "../../tests/unit/camera/viewport.rs"]
mod tests;
