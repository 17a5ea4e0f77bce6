use crate::{
    animation::ease::Ease,
    camera::{
        state::CameraState,
        viewport::{ViewportProfile, ViewportProfiles},
    },
    foundation::{
        core::{Vec3, clamp01},
        error::{ScrollfolioError, ScrollfolioResult},
    },
};

/// Static camera tuning.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraConfig {
    /// Look-at target at the top of the page.
    #[serde(default = "default_start_target")]
    pub start_target: Vec3,
    /// Fraction of total progress over which the camera fully zooms onto the board.
    #[serde(default = "default_zoom_phase_end")]
    pub zoom_phase_end: f64,
    /// Per-frame exponential smoothing factor toward the desired pose.
    #[serde(default = "default_camera_smoothing")]
    pub smoothing: f64,
    /// Curve applied to the zoom parameter.
    #[serde(default)]
    pub ease: Ease,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            start_target: default_start_target(),
            zoom_phase_end: default_zoom_phase_end(),
            smoothing: default_camera_smoothing(),
            ease: Ease::default(),
        }
    }
}

fn default_start_target() -> Vec3 {
    Vec3::new(0.0, 1.0, 0.0)
}

fn default_zoom_phase_end() -> f64 {
    0.24
}

fn default_camera_smoothing() -> f64 {
    0.12
}

impl CameraConfig {
    /// Check tuning values.
    pub fn validate(&self) -> ScrollfolioResult<()> {
        if !self.start_target.is_finite() {
            return Err(ScrollfolioError::validation("camera startTarget must be finite"));
        }
        if !self.zoom_phase_end.is_finite() || self.zoom_phase_end < 0.0 {
            return Err(ScrollfolioError::validation(
                "camera zoomPhaseEnd must be finite and >= 0",
            ));
        }
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(ScrollfolioError::validation(
                "camera smoothing must be in (0, 1]",
            ));
        }
        Ok(())
    }
}

/// Scroll-driven camera: zooms from the hero framing onto the signboard.
///
/// Smoothing is applied once per frame and is not scaled by elapsed time, so the settle speed
/// follows the host's frame rate.
#[derive(Clone, Debug)]
pub struct CameraRig {
    cfg: CameraConfig,
    profiles: ViewportProfiles,
    profile: Option<usize>,
    start_position: Vec3,
    board_position: Vec3,
    desired_position: Vec3,
    desired_target: Vec3,
    camera: CameraState,
}

impl CameraRig {
    /// Build a rig. The camera sits at the default hero pose until the first
    /// [`CameraRig::update_viewport`] call.
    pub fn new(cfg: CameraConfig, profiles: ViewportProfiles) -> ScrollfolioResult<Self> {
        cfg.validate()?;
        let camera = CameraState {
            target: cfg.start_target,
            ..CameraState::default()
        };
        Ok(Self {
            start_position: camera.position,
            board_position: camera.position,
            desired_position: camera.position,
            desired_target: cfg.start_target,
            camera,
            profile: None,
            profiles,
            cfg,
        })
    }

    /// Select the framing profile for `width`.
    ///
    /// The initial call snaps the camera to the profile's start pose. Later calls that switch
    /// profile re-seed the desired pose from the live camera so the change does not jump.
    /// Returns `true` when the active profile changed.
    #[tracing::instrument(skip(self))]
    pub fn update_viewport(&mut self, width: f64, initial: bool) -> bool {
        let index = self.profiles.select(width);
        let changed = self.profile != Some(index);
        self.profile = Some(index);

        if let Some(p) = self.profiles.get(index) {
            self.start_position = p.start;
            self.board_position = p.board;
            if changed {
                tracing::debug!(profile = %p.id, "viewport profile selected");
            }
        }

        if initial {
            self.camera.position = self.start_position;
            self.camera.target = self.cfg.start_target;
            self.desired_position = self.start_position;
            self.desired_target = self.cfg.start_target;
        } else if changed {
            self.desired_position = self.camera.position;
            self.desired_target = self.camera.target;
        }

        changed
    }

    /// Zoom parameter in `[0, 1]` for a smoothed progress value (before easing).
    pub fn zoom_t(&self, progress: f64) -> f64 {
        if self.cfg.zoom_phase_end > 0.0 {
            clamp01(progress / self.cfg.zoom_phase_end)
        } else {
            1.0
        }
    }

    /// Recompute the desired pose from `progress` and move the live camera one smoothing step
    /// toward it.
    pub fn update_camera(&mut self, progress: f64, panel_look_target: Vec3) {
        let eased = self.cfg.ease.apply(self.zoom_t(progress));

        self.desired_position = self.start_position.lerp(self.board_position, eased);
        self.desired_target = self.cfg.start_target.lerp(panel_look_target, eased);

        let k = self.cfg.smoothing;
        self.camera.position = self.camera.position.lerp(self.desired_position, k);
        self.camera.target = self.camera.target.lerp(self.desired_target, k);
    }

    /// Forward a viewport size change to the camera projection.
    pub fn set_aspect(&mut self, width: f64, height: f64) {
        self.camera.set_viewport(width, height);
    }

    /// Live camera.
    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    /// Pose the camera is currently easing toward, as `(position, target)`.
    pub fn desired(&self) -> (Vec3, Vec3) {
        (self.desired_position, self.desired_target)
    }

    /// Active profile, once a viewport has been applied.
    pub fn profile(&self) -> Option<&ViewportProfile> {
        self.profile.and_then(|i| self.profiles.get(i))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/camera/rig.rs"]
mod tests;
