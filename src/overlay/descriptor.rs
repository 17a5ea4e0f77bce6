use std::{fmt, sync::Arc};

use crate::{
    animation::phase::TimingWindow,
    foundation::error::{ScrollfolioError, ScrollfolioResult},
    host::DomPanel,
};

/// Authored description of one overlay panel.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlaySpec {
    /// Identity key; later overlays refer to it from adjust rules.
    pub key: String,
    /// DOM id of the panel element.
    pub element_id: String,
    /// Class toggled while the overlay is visible.
    pub visible_class: String,
    /// Fade envelope in scaled-progress units.
    #[serde(default)]
    pub timing: Option<TimingWindow>,
    /// Multiplier applied to shared progress before sampling `timing`.
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Optional cross-overlay adjustment.
    #[serde(default)]
    pub adjust: Option<AdjustRule>,
}

fn default_scale() -> f64 {
    3.0
}

impl OverlaySpec {
    /// Check this overlay on its own; cross-overlay references are checked by the scheduler.
    pub fn validate(&self) -> ScrollfolioResult<()> {
        if self.key.trim().is_empty() {
            return Err(ScrollfolioError::validation("overlay key must be non-empty"));
        }
        if self.visible_class.trim().is_empty() {
            return Err(ScrollfolioError::validation(format!(
                "overlay '{}' visibleClass must be non-empty",
                self.key
            )));
        }
        if !self.scale.is_finite() || self.scale < 0.0 {
            return Err(ScrollfolioError::validation(format!(
                "overlay '{}' scale must be finite and >= 0",
                self.key
            )));
        }
        if let Some(t) = &self.timing {
            t.validate().map_err(|e| {
                ScrollfolioError::validation(format!("overlay '{}': {e}", self.key))
            })?;
        }
        Ok(())
    }
}

/// Serializable cross-overlay adjustment.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AdjustRule {
    /// Scale alpha by `1 - min(alpha(key), 1)` so this overlay stays hidden while `key` shows.
    SuppressWhile {
        /// Key of an overlay declared earlier.
        key: String,
    },
}

/// Closure form of an adjustment: `(alpha, alphas computed so far) -> alpha`.
pub type AdjustFn = Arc<dyn Fn(f64, &OverlayContext) -> f64 + Send + Sync>;

/// Adjustment applied to an overlay's alpha after its timing window is sampled.
#[derive(Clone)]
pub enum Adjust {
    /// Built-in rule.
    Rule(AdjustRule),
    /// Host-provided function.
    Custom(AdjustFn),
}

impl fmt::Debug for Adjust {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rule(r) => f.debug_tuple("Rule").field(r).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl Adjust {
    /// Apply the adjustment.
    pub fn apply(&self, alpha: f64, ctx: &OverlayContext) -> f64 {
        match self {
            Self::Rule(AdjustRule::SuppressWhile { key }) => {
                let other = ctx.get(key).unwrap_or(0.0).min(1.0);
                alpha * (1.0 - other)
            }
            Self::Custom(f) => f(alpha, ctx),
        }
    }

    fn depends_on(&self) -> Option<&str> {
        match self {
            Self::Rule(AdjustRule::SuppressWhile { key }) => Some(key),
            Self::Custom(_) => None,
        }
    }
}

impl From<AdjustRule> for Adjust {
    fn from(rule: AdjustRule) -> Self {
        Self::Rule(rule)
    }
}

/// Runtime overlay: its authored settings plus the panel it owns, if the page has one.
pub struct OverlayDescriptor {
    /// Identity key.
    pub key: String,
    /// Panel driven by this overlay; `None` when the element is absent from the page.
    pub panel: Option<Box<dyn DomPanel>>,
    /// Class toggled while visible.
    pub visible_class: String,
    /// Fade envelope.
    pub timing: Option<TimingWindow>,
    /// Progress multiplier.
    pub scale: f64,
    /// Optional adjustment.
    pub adjust: Option<Adjust>,
}

impl fmt::Debug for OverlayDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayDescriptor")
            .field("key", &self.key)
            .field("has_panel", &self.panel.is_some())
            .field("visible_class", &self.visible_class)
            .field("timing", &self.timing)
            .field("scale", &self.scale)
            .field("adjust", &self.adjust)
            .finish()
    }
}

impl OverlayDescriptor {
    /// Bind an [`OverlaySpec`] to its (optional) panel.
    pub fn from_spec(spec: &OverlaySpec, panel: Option<Box<dyn DomPanel>>) -> Self {
        Self {
            key: spec.key.clone(),
            panel,
            visible_class: spec.visible_class.clone(),
            timing: spec.timing,
            scale: spec.scale,
            adjust: spec.adjust.clone().map(Adjust::from),
        }
    }

    /// Replace the adjustment with a custom function.
    pub fn with_adjust_fn(
        mut self,
        f: impl Fn(f64, &OverlayContext) -> f64 + Send + Sync + 'static,
    ) -> Self {
        self.adjust = Some(Adjust::Custom(Arc::new(f)));
        self
    }

    pub(crate) fn validate(&self, earlier: &[&str]) -> ScrollfolioResult<()> {
        if self.key.trim().is_empty() {
            return Err(ScrollfolioError::validation("overlay key must be non-empty"));
        }
        if earlier.contains(&self.key.as_str()) {
            return Err(ScrollfolioError::validation(format!(
                "duplicate overlay key '{}'",
                self.key
            )));
        }
        if !self.scale.is_finite() || self.scale < 0.0 {
            return Err(ScrollfolioError::validation(format!(
                "overlay '{}' scale must be finite and >= 0",
                self.key
            )));
        }
        if let Some(t) = &self.timing {
            t.validate().map_err(|e| {
                ScrollfolioError::validation(format!("overlay '{}': {e}", self.key))
            })?;
        }
        if let Some(dep) = self.adjust.as_ref().and_then(Adjust::depends_on)
            && !earlier.contains(&dep)
        {
            return Err(ScrollfolioError::validation(format!(
                "overlay '{}' adjust references '{dep}', which is not declared before it",
                self.key
            )));
        }
        Ok(())
    }
}

/// Alphas computed so far in a frame, in declaration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverlayContext {
    entries: Vec<(String, f64)>,
}

impl OverlayContext {
    /// Alpha recorded for `key`, if it was already computed this frame.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, alpha)| *alpha)
    }

    pub(crate) fn push(&mut self, key: &str, alpha: f64) {
        self.entries.push((key.to_string(), alpha));
    }

    /// `(key, alpha)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(k, a)| (k.as_str(), *a))
    }

    /// Number of recorded overlays.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl serde::Serialize for OverlayContext {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap as _;
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, a) in &self.entries {
            map.serialize_entry(k, a)?;
        }
        map.end()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/descriptor.rs"]
mod tests;
