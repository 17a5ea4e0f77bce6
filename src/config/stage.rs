use std::io::Read;

use crate::{
    animation::phase::TimingWindow,
    camera::{
        rig::CameraConfig,
        viewport::{ViewportProfile, ViewportProfiles},
    },
    foundation::{
        core::Vec3,
        error::{ScrollfolioError, ScrollfolioResult},
    },
    overlay::{
        descriptor::{AdjustRule, OverlaySpec},
        scheduler::DEFAULT_VISIBILITY_THRESHOLD,
    },
    scene::{hero::HeroConfig, panel::PanelConfig},
    scroll::bridge::ScrollConfig,
};

/// Complete static configuration of a stage.
///
/// Constructed once at startup, either from [`StageConfig::portfolio`] or from JSON, and
/// validated before use. Validation never rewrites authored values.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageConfig {
    /// Overlays in evaluation order.
    pub overlays: Vec<OverlaySpec>,
    /// Camera framing per viewport class, narrowest first.
    pub viewports: Vec<ViewportProfile>,
    /// Camera tuning.
    #[serde(default)]
    pub camera: CameraConfig,
    /// Scroll smoothing.
    #[serde(default)]
    pub scroll: ScrollConfig,
    /// Hero fade tuning.
    #[serde(default)]
    pub hero: HeroConfig,
    /// Signboard look target.
    #[serde(default)]
    pub panel: PanelConfig,
    /// Alpha above which an overlay is marked visible.
    #[serde(default = "default_visibility_threshold")]
    pub visibility_threshold: f64,
}

fn default_visibility_threshold() -> f64 {
    DEFAULT_VISIBILITY_THRESHOLD
}

impl Default for StageConfig {
    fn default() -> Self {
        Self::portfolio()
    }
}

impl StageConfig {
    /// The authored portfolio page: six overlays and three viewport classes.
    pub fn portfolio() -> Self {
        fn overlay(
            key: &str,
            element_id: &str,
            visible_class: &str,
            timing: [f64; 4],
            scale: f64,
        ) -> OverlaySpec {
            OverlaySpec {
                key: key.to_string(),
                element_id: element_id.to_string(),
                visible_class: visible_class.to_string(),
                timing: Some(TimingWindow {
                    start: timing[0],
                    fade_in_end: timing[1],
                    fade_out_start: timing[2],
                    end: timing[3],
                }),
                scale,
                adjust: None,
            }
        }

        let mut projects = overlay(
            "projects",
            "projects-cards",
            "projects-overlay--visible",
            [3.45, 3.72, 3.98, 4.2],
            4.0,
        );
        projects.adjust = Some(AdjustRule::SuppressWhile {
            key: "education".to_string(),
        });

        Self {
            overlays: vec![
                overlay("bio", "bio-card", "bio-card--visible", [0.45, 0.65, 0.86, 1.0], 3.0),
                overlay(
                    "skills",
                    "skills-cards",
                    "skills-overlay--visible",
                    [0.82, 0.97, 1.18, 1.32],
                    3.0,
                ),
                overlay(
                    "languages",
                    "languages-cards",
                    "languages-overlay--visible",
                    [1.12, 1.28, 1.5, 1.64],
                    3.0,
                ),
                overlay(
                    "experience",
                    "experience-cards",
                    "experience-overlay--visible",
                    [2.05, 2.25, 2.52, 2.72],
                    3.0,
                ),
                overlay(
                    "education",
                    "education-cards",
                    "education-overlay--visible",
                    [2.38, 2.58, 2.86, 3.0],
                    3.0,
                ),
                projects,
            ],
            viewports: vec![
                ViewportProfile {
                    id: "mobile".to_string(),
                    max_width: Some(640.0),
                    start: Vec3::new(0.0, 3.25, 10.4),
                    board: Vec3::new(0.0, 1.68, 3.55),
                },
                ViewportProfile {
                    id: "tablet".to_string(),
                    max_width: Some(1024.0),
                    start: Vec3::new(0.0, 3.18, 9.6),
                    board: Vec3::new(0.0, 1.74, 3.05),
                },
                ViewportProfile {
                    id: "desktop".to_string(),
                    max_width: None,
                    start: Vec3::new(0.0, 3.0, 9.0),
                    board: Vec3::new(0.0, 1.82, 2.35),
                },
            ],
            camera: CameraConfig::default(),
            scroll: ScrollConfig::default(),
            hero: HeroConfig::default(),
            panel: PanelConfig::default(),
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
        }
    }

    /// Check every section, including cross-overlay references.
    pub fn validate(&self) -> ScrollfolioResult<()> {
        let mut keys: Vec<&str> = Vec::with_capacity(self.overlays.len());
        let mut element_ids: Vec<&str> = Vec::with_capacity(self.overlays.len());
        for o in &self.overlays {
            o.validate()?;
            if keys.contains(&o.key.as_str()) {
                return Err(ScrollfolioError::validation(format!(
                    "duplicate overlay key '{}'",
                    o.key
                )));
            }
            if o.element_id.trim().is_empty() {
                return Err(ScrollfolioError::validation(format!(
                    "overlay '{}' elementId must be non-empty",
                    o.key
                )));
            }
            if element_ids.contains(&o.element_id.as_str()) {
                return Err(ScrollfolioError::validation(format!(
                    "overlay '{}' reuses elementId '{}'",
                    o.key, o.element_id
                )));
            }
            if let Some(AdjustRule::SuppressWhile { key }) = &o.adjust
                && !keys.contains(&key.as_str())
            {
                return Err(ScrollfolioError::validation(format!(
                    "overlay '{}' adjust references '{key}', which is not declared before it",
                    o.key
                )));
            }
            keys.push(&o.key);
            element_ids.push(&o.element_id);
        }

        ViewportProfiles::new(self.viewports.clone())?;
        self.camera.validate()?;
        self.scroll.validate()?;
        self.hero.validate()?;
        self.panel.validate()?;

        if !(0.0..1.0).contains(&self.visibility_threshold) {
            return Err(ScrollfolioError::validation(
                "visibilityThreshold must be in [0, 1)",
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(s: &str) -> ScrollfolioResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON configuration.
    pub fn from_reader(r: impl Read) -> ScrollfolioResult<Self> {
        let cfg: Self = serde_json::from_reader(r)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Pretty JSON form.
    pub fn to_json_pretty(&self) -> ScrollfolioResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/stage.rs"]
mod tests;
