use crate::{
    animation::phase::phase_alpha,
    foundation::error::{ScrollfolioError, ScrollfolioResult},
    overlay::descriptor::{OverlayContext, OverlayDescriptor},
};

/// Alpha above which an overlay counts as visible.
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.05;

/// Result of one scheduler pass.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct OverlayFrame {
    /// Largest alpha of any overlay this frame.
    pub blend: f64,
    /// Final alpha per overlay, in declaration order.
    pub alphas: OverlayContext,
}

impl OverlayFrame {
    /// Final alpha for `key` (`0` for unknown keys).
    pub fn alpha(&self, key: &str) -> f64 {
        self.alphas.get(key).unwrap_or(0.0)
    }
}

struct Slot {
    desc: OverlayDescriptor,
    // `None` until the first frame writes the class and aria flag.
    visible: Option<bool>,
}

/// Drives the DOM overlays from shared smoothed progress.
///
/// Overlays are evaluated in declaration order; an overlay's adjustment sees the final alphas of
/// every overlay declared before it.
pub struct OverlayScheduler {
    slots: Vec<Slot>,
    threshold: f64,
}

impl OverlayScheduler {
    /// Validate descriptors and build a scheduler.
    pub fn new(descriptors: Vec<OverlayDescriptor>, threshold: f64) -> ScrollfolioResult<Self> {
        if !(0.0..1.0).contains(&threshold) {
            return Err(ScrollfolioError::validation(
                "overlay visibility threshold must be in [0, 1)",
            ));
        }

        let mut keys: Vec<&str> = Vec::with_capacity(descriptors.len());
        for d in &descriptors {
            d.validate(&keys)?;
            keys.push(d.key.as_str());
        }

        let slots = descriptors
            .into_iter()
            .map(|desc| Slot {
                desc,
                visible: None,
            })
            .collect();
        Ok(Self { slots, threshold })
    }

    /// Compute every overlay's alpha for `progress` and apply it to its panel.
    pub fn update(&mut self, progress: f64) -> OverlayFrame {
        let mut alphas = OverlayContext::default();
        let mut blend: f64 = 0.0;

        for slot in &mut self.slots {
            let d = &mut slot.desc;
            if d.panel.is_none() {
                alphas.push(&d.key, 0.0);
                continue;
            }

            let mut alpha = phase_alpha(progress * d.scale, d.timing.as_ref());
            if let Some(adjust) = &d.adjust {
                alpha = adjust.apply(alpha, &alphas);
            }

            alphas.push(&d.key, alpha);
            blend = blend.max(alpha);
            apply_panel(slot, alpha, self.threshold);
        }

        OverlayFrame { blend, alphas }
    }

    /// Whether `key` is currently in its visible state.
    pub fn is_visible(&self, key: &str) -> bool {
        self.slots
            .iter()
            .find(|s| s.desc.key == key)
            .is_some_and(|s| s.visible == Some(true))
    }

    /// Overlay keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.slots.iter().map(|s| s.desc.key.as_str())
    }
}

fn apply_panel(slot: &mut Slot, alpha: f64, threshold: f64) {
    let d = &mut slot.desc;
    let Some(panel) = d.panel.as_mut() else {
        return;
    };

    panel.set_style("opacity", &format!("{alpha:.3}"));

    let show = alpha > threshold;
    if slot.visible == Some(show) {
        return;
    }
    panel.toggle_class(&d.visible_class, show);
    panel.set_attribute("aria-hidden", if show { "false" } else { "true" });
    if slot.visible.is_some() {
        tracing::debug!(overlay = %d.key, visible = show, alpha, "overlay visibility changed");
    }
    slot.visible = Some(show);
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/scheduler.rs"]
mod tests;
