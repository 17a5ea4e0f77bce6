use crate::{
    camera::state::CameraState,
    foundation::{
        core::{Size, Vec3},
        error::ScrollfolioResult,
    },
};

/// A material reachable from a scene group.
pub trait SceneMaterial {
    /// Numeric opacity, or `None` when the material has no opacity channel.
    fn opacity(&self) -> Option<f64>;

    /// Set the opacity. Only called on materials that report one.
    fn set_opacity(&mut self, opacity: f64);

    /// Whether alpha blending is enabled.
    fn is_transparent(&self) -> bool;

    /// Enable or disable alpha blending.
    fn set_transparent(&mut self, transparent: bool);
}

/// Named lookup into the host's scene graph.
///
/// Groups may appear late (their assets load asynchronously); every method reports absence
/// instead of failing.
pub trait SceneGraph {
    /// World-space position of the named group, if it exists yet.
    fn world_position(&mut self, name: &str) -> Option<Vec3>;

    /// Show or hide the named group. Returns `false` if the group does not exist.
    fn set_visible(&mut self, name: &str, visible: bool) -> bool;

    /// Visit every material on the named group and its descendants.
    /// Returns `false` if the group does not exist.
    fn visit_materials(&mut self, name: &str, visit: &mut dyn FnMut(&mut dyn SceneMaterial))
    -> bool;
}

/// Produces frames of the scene from a camera.
pub trait Renderer {
    /// Resize the drawing surface.
    fn resize(&mut self, size: Size);

    /// Draw one frame.
    fn render(&mut self, camera: &CameraState) -> ScrollfolioResult<()>;
}
