use crate::{
    foundation::{
        core::clamp01,
        error::{ScrollfolioError, ScrollfolioResult},
    },
    host::{SceneGraph, SceneMaterial},
};

/// Static hero-fade tuning.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroConfig {
    /// Name of the hero group in the scene graph.
    #[serde(default = "default_group")]
    pub group: String,
    /// Progress after which the hero starts fading out.
    #[serde(default = "default_hide_progress")]
    pub hide_progress: f64,
    /// Progress span of the fade; `0` makes it a step.
    #[serde(default = "default_fade_range")]
    pub fade_range: f64,
    /// How strongly visible overlays push the hero out.
    #[serde(default = "default_overlay_gain")]
    pub overlay_gain: f64,
    /// Opacity at or below which the group is hidden outright.
    #[serde(default = "default_visibility_epsilon")]
    pub visibility_epsilon: f64,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            group: default_group(),
            hide_progress: default_hide_progress(),
            fade_range: default_fade_range(),
            overlay_gain: default_overlay_gain(),
            visibility_epsilon: default_visibility_epsilon(),
        }
    }
}

fn default_group() -> String {
    "homeGroup".to_string()
}

fn default_hide_progress() -> f64 {
    0.34
}

fn default_fade_range() -> f64 {
    0.08
}

fn default_overlay_gain() -> f64 {
    1.4
}

fn default_visibility_epsilon() -> f64 {
    0.02
}

impl HeroConfig {
    /// Check tuning values.
    pub fn validate(&self) -> ScrollfolioResult<()> {
        if self.group.trim().is_empty() {
            return Err(ScrollfolioError::validation("hero group must be non-empty"));
        }
        for (name, v) in [
            ("hideProgress", self.hide_progress),
            ("fadeRange", self.fade_range),
            ("overlayGain", self.overlay_gain),
            ("visibilityEpsilon", self.visibility_epsilon),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(ScrollfolioError::validation(format!(
                    "hero {name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// What the hero fade applied this frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct HeroState {
    /// Opacity written to every material.
    pub opacity: f64,
    /// Group visibility.
    pub visible: bool,
}

/// Fades the hero group out as the page scrolls into overlay content.
#[derive(Clone, Debug)]
pub struct HeroFade {
    cfg: HeroConfig,
}

impl HeroFade {
    /// Build a fade from validated tuning.
    pub fn new(cfg: HeroConfig) -> ScrollfolioResult<Self> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    /// Hero opacity for `progress` with overlays blended at `overlay_blend`.
    pub fn opacity(&self, progress: f64, overlay_blend: f64) -> f64 {
        let fade_t = if self.cfg.fade_range > 0.0 {
            clamp01((progress - self.cfg.hide_progress) / self.cfg.fade_range)
        } else if progress > self.cfg.hide_progress {
            1.0
        } else {
            0.0
        };

        let base = clamp01(1.0 - overlay_blend * self.cfg.overlay_gain);
        clamp01(base * (1.0 - fade_t))
    }

    /// Push `opacity` onto the hero group. Returns `None` while the group is not in the scene.
    pub fn apply(&self, scene: &mut dyn SceneGraph, opacity: f64) -> Option<HeroState> {
        let visible = opacity > self.cfg.visibility_epsilon;
        if !scene.set_visible(&self.cfg.group, visible) {
            return None;
        }
        scene.visit_materials(&self.cfg.group, &mut |m: &mut dyn SceneMaterial| {
            if m.opacity().is_none() {
                return;
            }
            if !m.is_transparent() {
                m.set_transparent(true);
            }
            m.set_opacity(opacity);
        });
        Some(HeroState { opacity, visible })
    }

    /// Name of the driven group.
    pub fn group(&self) -> &str {
        &self.cfg.group
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/hero.rs"]
mod tests;
