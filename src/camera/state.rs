use crate::foundation::core::Vec3;

/// Live perspective camera handed to the renderer each frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraState {
    /// Eye position in world space.
    pub position: Vec3,
    /// Look-at target in world space.
    pub target: Vec3,
    /// Up vector.
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_y_deg: f64,
    /// Width over height of the viewport.
    pub aspect: f64,
    /// Near clip plane.
    pub near: f64,
    /// Far clip plane.
    pub far: f64,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 3.0, 9.0),
            target: Vec3::new(0.0, 1.0, 0.0),
            up: Vec3::Y,
            fov_y_deg: 60.0,
            aspect: 1.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl CameraState {
    /// Right-handed look-at view matrix.
    pub fn view_matrix(&self) -> glam::DMat4 {
        glam::DMat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Right-handed perspective projection (OpenGL depth range).
    pub fn projection_matrix(&self) -> glam::DMat4 {
        glam::DMat4::perspective_rh_gl(
            self.fov_y_deg.to_radians(),
            self.aspect,
            self.near,
            self.far,
        )
    }

    /// Update the aspect ratio from a viewport size; degenerate sizes are ignored.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        if width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite() {
            self.aspect = width / height;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/camera/state.rs"]
mod tests;
