//! An in-memory page: document, panels, scene graph and renderer sharing one state cell.
//!
//! Everything runs on one thread, so handles share state through `Rc<RefCell<_>>` and the
//! owner of a [`HeadlessPage`] can inspect what the stage wrote after each frame.

use std::{
    cell::{Ref, RefCell, RefMut},
    collections::{BTreeMap, BTreeSet},
    rc::Rc,
};

use crate::{
    camera::state::CameraState,
    config::stage::StageConfig,
    foundation::{
        core::{ScrollMetrics, Size, Vec3},
        error::{ScrollfolioError, ScrollfolioResult},
    },
    host::{DocumentHost, DomPanel, Renderer, SceneGraph, SceneMaterial, ScrollBehavior},
    runtime::stage::StageBuilder,
};

/// World position of the signboard once the character has loaded: the board sits at
/// `(0, 1.0, 0.68)` inside a character scaled by 1.5 and raised to `y = 0.4`.
pub const SIGNBOARD_WORLD_POSITION: Vec3 = Vec3::new(0.0, 1.9, 1.02);

/// Recorded state of one DOM panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PanelState {
    /// Inline style properties.
    pub style: BTreeMap<String, String>,
    /// Current class list.
    pub classes: BTreeSet<String>,
    /// Attributes.
    pub attributes: BTreeMap<String, String>,
    /// Number of `toggle_class` calls received.
    pub class_writes: u32,
}

impl PanelState {
    /// Parsed inline opacity, if one was written.
    pub fn opacity(&self) -> Option<f64> {
        self.style.get("opacity").and_then(|v| v.parse().ok())
    }
}

/// A material with an optional opacity channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeadlessMaterial {
    /// `None` for materials without a numeric opacity.
    pub opacity: Option<f64>,
    /// Alpha blending flag.
    pub transparent: bool,
}

impl Default for HeadlessMaterial {
    fn default() -> Self {
        Self {
            opacity: Some(1.0),
            transparent: false,
        }
    }
}

impl SceneMaterial for HeadlessMaterial {
    fn opacity(&self) -> Option<f64> {
        self.opacity
    }

    fn set_opacity(&mut self, opacity: f64) {
        if self.opacity.is_some() {
            self.opacity = Some(opacity);
        }
    }

    fn is_transparent(&self) -> bool {
        self.transparent
    }

    fn set_transparent(&mut self, transparent: bool) {
        self.transparent = transparent;
    }
}

/// A named scene group.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
    /// World-space position.
    pub world_position: Vec3,
    /// Visibility flag.
    pub visible: bool,
    /// Materials of the group and all of its descendants.
    pub materials: Vec<HeadlessMaterial>,
}

impl SceneNode {
    /// A visible group at `world_position` with the given materials.
    pub fn new(world_position: Vec3, materials: Vec<HeadlessMaterial>) -> Self {
        Self {
            world_position,
            visible: true,
            materials,
        }
    }
}

/// Everything a headless page records.
#[derive(Clone, Debug, Default)]
pub struct PageState {
    /// Inner window size.
    pub viewport: Size,
    /// Current scroll offset.
    pub scroll_y: f64,
    /// Total document height.
    pub scroll_height: f64,
    /// Programmatic scroll requests, in order.
    pub scroll_requests: Vec<(f64, ScrollBehavior)>,
    /// Root element style properties.
    pub root_style: BTreeMap<String, String>,
    /// Panels by element id.
    pub panels: BTreeMap<String, PanelState>,
    /// Scene groups by name.
    pub nodes: BTreeMap<String, SceneNode>,
    /// Size last passed to the renderer.
    pub render_size: Option<Size>,
    /// Frames rendered.
    pub frames_rendered: u64,
    /// Camera used for the last rendered frame.
    pub last_camera: Option<CameraState>,
    /// When set, the renderer fails with this message.
    pub render_failure: Option<String>,
}

impl PageState {
    fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            scroll_y: self.scroll_y,
            scroll_height: self.scroll_height,
            viewport_height: self.viewport.height,
        }
    }
}

/// Shared handle to a headless page.
#[derive(Clone, Debug, Default)]
pub struct HeadlessPage {
    state: Rc<RefCell<PageState>>,
}

impl HeadlessPage {
    /// A page of `scroll_height` pixels seen through a `viewport`-sized window.
    pub fn new(viewport: Size, scroll_height: f64) -> Self {
        let state = PageState {
            viewport,
            scroll_height,
            ..PageState::default()
        };
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// Document handle.
    pub fn document(&self) -> HeadlessDocument {
        HeadlessDocument {
            state: Rc::clone(&self.state),
        }
    }

    /// Panel handle for `element_id`, registering the element on the page.
    pub fn panel(&self, element_id: &str) -> HeadlessPanel {
        self.state
            .borrow_mut()
            .panels
            .entry(element_id.to_string())
            .or_default();
        HeadlessPanel {
            id: element_id.to_string(),
            state: Rc::clone(&self.state),
        }
    }

    /// Scene handle.
    pub fn scene(&self) -> HeadlessScene {
        HeadlessScene {
            state: Rc::clone(&self.state),
        }
    }

    /// Renderer handle.
    pub fn renderer(&self) -> HeadlessRenderer {
        HeadlessRenderer {
            state: Rc::clone(&self.state),
        }
    }

    /// A builder wired to this page, with a panel registered for every overlay element.
    pub fn stage_builder(&self, config: StageConfig) -> StageBuilder {
        let ids: Vec<String> = config.overlays.iter().map(|o| o.element_id.clone()).collect();
        let mut builder = StageBuilder::new(config)
            .document(self.document())
            .scene(self.scene())
            .renderer(self.renderer());
        for id in &ids {
            builder = builder.panel(id, self.panel(id));
        }
        builder
    }

    /// Add the hero group (globe, character, title text) under `group`.
    pub fn insert_hero(&self, group: &str) {
        self.insert_node(
            group,
            SceneNode::new(Vec3::ZERO, vec![HeadlessMaterial::default(); 4]),
        );
    }

    /// Add the signboard under `group` at [`SIGNBOARD_WORLD_POSITION`].
    pub fn insert_signboard(&self, group: &str) {
        self.insert_node(
            group,
            SceneNode::new(SIGNBOARD_WORLD_POSITION, vec![HeadlessMaterial::default(); 2]),
        );
    }

    /// Add or replace a scene group, as an asset load completing would.
    pub fn insert_node(&self, name: &str, node: SceneNode) {
        self.state.borrow_mut().nodes.insert(name.to_string(), node);
    }

    /// Move the scroll offset as a user would, clamped to the scrollable range.
    pub fn scroll_to_y(&self, y: f64) {
        let mut s = self.state.borrow_mut();
        let max = s.metrics().max_scroll().max(0.0);
        s.scroll_y = y.clamp(0.0, max);
    }

    /// Resize the window.
    pub fn resize(&self, viewport: Size) {
        self.state.borrow_mut().viewport = viewport;
    }

    /// Borrow the recorded state.
    pub fn state(&self) -> Ref<'_, PageState> {
        self.state.borrow()
    }

    /// Mutably borrow the recorded state.
    pub fn state_mut(&self) -> RefMut<'_, PageState> {
        self.state.borrow_mut()
    }
}

/// [`DocumentHost`] over a headless page. Smooth scrolls land immediately.
#[derive(Clone, Debug)]
pub struct HeadlessDocument {
    state: Rc<RefCell<PageState>>,
}

impl DocumentHost for HeadlessDocument {
    fn scroll_metrics(&self) -> ScrollMetrics {
        self.state.borrow().metrics()
    }

    fn viewport_size(&self) -> Size {
        self.state.borrow().viewport
    }

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        let mut s = self.state.borrow_mut();
        s.scroll_requests.push((top, behavior));
        let max = s.metrics().max_scroll().max(0.0);
        s.scroll_y = top.clamp(0.0, max);
    }

    fn set_root_style(&mut self, property: &str, value: &str) {
        self.state
            .borrow_mut()
            .root_style
            .insert(property.to_string(), value.to_string());
    }
}

/// [`DomPanel`] over a headless page element.
#[derive(Clone, Debug)]
pub struct HeadlessPanel {
    id: String,
    state: Rc<RefCell<PageState>>,
}

impl HeadlessPanel {
    fn with<R>(&self, f: impl FnOnce(&mut PanelState) -> R) -> R {
        let mut s = self.state.borrow_mut();
        f(s.panels.entry(self.id.clone()).or_default())
    }
}

impl DomPanel for HeadlessPanel {
    fn set_style(&mut self, property: &str, value: &str) {
        self.with(|p| {
            p.style.insert(property.to_string(), value.to_string());
        });
    }

    fn toggle_class(&mut self, class: &str, on: bool) {
        self.with(|p| {
            p.class_writes += 1;
            if on {
                p.classes.insert(class.to_string());
            } else {
                p.classes.remove(class);
            }
        });
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.with(|p| {
            p.attributes.insert(name.to_string(), value.to_string());
        });
    }
}

/// [`SceneGraph`] over the page's named groups.
#[derive(Clone, Debug)]
pub struct HeadlessScene {
    state: Rc<RefCell<PageState>>,
}

impl SceneGraph for HeadlessScene {
    fn world_position(&mut self, name: &str) -> Option<Vec3> {
        self.state.borrow().nodes.get(name).map(|n| n.world_position)
    }

    fn set_visible(&mut self, name: &str, visible: bool) -> bool {
        match self.state.borrow_mut().nodes.get_mut(name) {
            Some(n) => {
                n.visible = visible;
                true
            }
            None => false,
        }
    }

    fn visit_materials(
        &mut self,
        name: &str,
        visit: &mut dyn FnMut(&mut dyn SceneMaterial),
    ) -> bool {
        let mut s = self.state.borrow_mut();
        let Some(node) = s.nodes.get_mut(name) else {
            return false;
        };
        for m in &mut node.materials {
            visit(m);
        }
        true
    }
}

/// [`Renderer`] that records the camera it was asked to draw with.
#[derive(Clone, Debug)]
pub struct HeadlessRenderer {
    state: Rc<RefCell<PageState>>,
}

impl Renderer for HeadlessRenderer {
    fn resize(&mut self, size: Size) {
        self.state.borrow_mut().render_size = Some(size);
    }

    fn render(&mut self, camera: &CameraState) -> ScrollfolioResult<()> {
        let mut s = self.state.borrow_mut();
        if let Some(msg) = &s.render_failure {
            return Err(ScrollfolioError::evaluation(format!("render failed: {msg}")));
        }
        s.frames_rendered += 1;
        s.last_camera = Some(*camera);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/headless.rs"]
mod tests;
