use crate::{
    foundation::{
        core::Vec3,
        error::{ScrollfolioError, ScrollfolioResult},
    },
    host::SceneGraph,
};

/// Where the camera looks once zoomed onto the signboard.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelConfig {
    /// Name of the signboard group in the scene graph.
    #[serde(default = "default_group")]
    pub group: String,
    /// Look target used until the signboard has loaded.
    #[serde(default = "default_fallback")]
    pub fallback: Vec3,
    /// Offset added to the board's world z so the camera looks at its face.
    #[serde(default = "default_z_nudge")]
    pub z_nudge: f64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            group: default_group(),
            fallback: default_fallback(),
            z_nudge: default_z_nudge(),
        }
    }
}

fn default_group() -> String {
    "panelGroup".to_string()
}

fn default_fallback() -> Vec3 {
    Vec3::new(0.0, 1.3, 0.1)
}

fn default_z_nudge() -> f64 {
    0.025
}

impl PanelConfig {
    /// Check tuning values.
    pub fn validate(&self) -> ScrollfolioResult<()> {
        if self.group.trim().is_empty() {
            return Err(ScrollfolioError::validation("panel group must be non-empty"));
        }
        if !self.fallback.is_finite() || !self.z_nudge.is_finite() {
            return Err(ScrollfolioError::validation(
                "panel fallback and zNudge must be finite",
            ));
        }
        Ok(())
    }
}

/// Resolves the signboard's look target each frame.
#[derive(Clone, Debug)]
pub struct PanelTracker {
    cfg: PanelConfig,
    resolved: bool,
}

impl PanelTracker {
    /// Build a tracker from validated tuning.
    pub fn new(cfg: PanelConfig) -> ScrollfolioResult<Self> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            resolved: false,
        })
    }

    /// Board world position nudged along z, or the fallback while the board is not loaded.
    pub fn look_target(&mut self, scene: &mut dyn SceneGraph) -> Vec3 {
        match scene.world_position(&self.cfg.group) {
            Some(p) => {
                if !self.resolved {
                    tracing::debug!(group = %self.cfg.group, "signboard resolved");
                    self.resolved = true;
                }
                p + Vec3::new(0.0, 0.0, self.cfg.z_nudge)
            }
            None => self.cfg.fallback,
        }
    }

    /// Whether the board has been seen in the scene yet.
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/panel.rs"]
mod tests;
