use std::collections::BTreeMap;

use crate::{
    camera::{rig::CameraRig, state::CameraState, viewport::ViewportProfiles},
    config::stage::StageConfig,
    foundation::{
        core::{Size, Vec3},
        error::{ScrollfolioError, ScrollfolioResult},
    },
    host::{DocumentHost, DomPanel, Renderer, SceneGraph},
    overlay::{
        descriptor::{Adjust, AdjustFn, OverlayContext, OverlayDescriptor},
        scheduler::OverlayScheduler,
    },
    scene::{
        hero::{HeroFade, HeroState},
        panel::PanelTracker,
    },
    scroll::bridge::ScrollBridge,
};

/// Everything the stage applied in one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameReport {
    /// Zero-based frame counter.
    pub frame: u64,
    /// Raw scroll progress.
    pub raw_progress: f64,
    /// Smoothed progress that drove this frame.
    pub progress: f64,
    /// Final overlay alphas in declaration order.
    pub overlays: OverlayContext,
    /// Largest overlay alpha.
    pub overlay_blend: f64,
    /// Hero fade, if the hero group is in the scene.
    pub hero: Option<HeroState>,
    /// Camera look target derived from the signboard.
    pub panel_look_target: Vec3,
    /// Camera used for the render.
    pub camera: CameraState,
    /// Active viewport profile id.
    pub viewport: Option<String>,
}

/// Assembles a [`Stage`] from configuration and host collaborators.
pub struct StageBuilder {
    config: StageConfig,
    document: Option<Box<dyn DocumentHost>>,
    scene: Option<Box<dyn SceneGraph>>,
    renderer: Option<Box<dyn Renderer>>,
    panels: BTreeMap<String, Box<dyn DomPanel>>,
    adjust_fns: BTreeMap<String, AdjustFn>,
}

impl StageBuilder {
    /// Start from a configuration.
    pub fn new(config: StageConfig) -> Self {
        Self {
            config,
            document: None,
            scene: None,
            renderer: None,
            panels: BTreeMap::new(),
            adjust_fns: BTreeMap::new(),
        }
    }

    /// Document/window the stage scrolls.
    pub fn document(mut self, document: impl DocumentHost + 'static) -> Self {
        self.document = Some(Box::new(document));
        self
    }

    /// Scene graph holding the hero and signboard groups.
    pub fn scene(mut self, scene: impl SceneGraph + 'static) -> Self {
        self.scene = Some(Box::new(scene));
        self
    }

    /// Renderer drawing the scene.
    pub fn renderer(mut self, renderer: impl Renderer + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// Register the DOM element found under `element_id`.
    pub fn panel(mut self, element_id: &str, panel: impl DomPanel + 'static) -> Self {
        self.panels.insert(element_id.to_string(), Box::new(panel));
        self
    }

    /// Replace the configured adjustment of overlay `key` with a host function.
    ///
    /// The function sees the final alphas of every overlay declared before `key`.
    pub fn adjust(mut self, key: &str, f: AdjustFn) -> Self {
        self.adjust_fns.insert(key.to_string(), f);
        self
    }

    /// Validate everything and bring the stage to its initial state.
    ///
    /// A missing document, scene or renderer is fatal. Missing overlay panels are not: those
    /// overlays are skipped every frame.
    #[tracing::instrument(skip(self))]
    pub fn build(mut self) -> ScrollfolioResult<Stage> {
        self.config.validate()?;

        let mut document = self
            .document
            .ok_or_else(|| ScrollfolioError::missing_dependency("document host"))?;
        let scene = self
            .scene
            .ok_or_else(|| ScrollfolioError::missing_dependency("scene graph"))?;
        let mut renderer = self
            .renderer
            .ok_or_else(|| ScrollfolioError::missing_dependency("renderer"))?;

        let descriptors = self
            .config
            .overlays
            .iter()
            .map(|spec| {
                let panel = self.panels.remove(&spec.element_id);
                if panel.is_none() {
                    tracing::warn!(
                        overlay = %spec.key,
                        element_id = %spec.element_id,
                        "overlay element missing, it will be skipped"
                    );
                }
                let mut desc = OverlayDescriptor::from_spec(spec, panel);
                if let Some(f) = self.adjust_fns.remove(&spec.key) {
                    desc.adjust = Some(Adjust::Custom(f));
                }
                desc
            })
            .collect();
        for id in self.panels.keys() {
            tracing::warn!(element_id = %id, "panel registered for no overlay");
        }
        if let Some(key) = self.adjust_fns.keys().next() {
            return Err(ScrollfolioError::validation(format!(
                "adjust function given for unknown overlay '{key}'"
            )));
        }

        let overlays = OverlayScheduler::new(descriptors, self.config.visibility_threshold)?;
        let profiles = ViewportProfiles::new(self.config.viewports.clone())?;
        let mut camera = CameraRig::new(self.config.camera.clone(), profiles)?;
        let mut scroll = ScrollBridge::new(&self.config.scroll)?;
        let hero = HeroFade::new(self.config.hero.clone())?;
        let panel = PanelTracker::new(self.config.panel.clone())?;

        let size = document.viewport_size();
        camera.update_viewport(size.width, true);
        camera.set_aspect(size.width, size.height);
        renderer.resize(size);
        publish_viewport_height(document.as_mut(), size);
        scroll.on_scroll(document.scroll_metrics());

        tracing::debug!(
            width = size.width,
            height = size.height,
            profile = camera.profile().map(|p| p.id.as_str()),
            "stage ready"
        );

        Ok(Stage {
            document,
            scene,
            renderer,
            scroll,
            overlays,
            camera,
            hero,
            panel,
            frame: 0,
        })
    }
}

/// The per-frame driver: scroll smoothing, overlays, hero fade, camera and render.
///
/// The host calls [`Stage::frame`] once per display refresh and forwards scroll, resize and
/// navigation events between frames. All calls happen on one thread.
pub struct Stage {
    document: Box<dyn DocumentHost>,
    scene: Box<dyn SceneGraph>,
    renderer: Box<dyn Renderer>,
    scroll: ScrollBridge,
    overlays: OverlayScheduler,
    camera: CameraRig,
    hero: HeroFade,
    panel: PanelTracker,
    frame: u64,
}

impl Stage {
    /// Start building a stage.
    pub fn builder(config: StageConfig) -> StageBuilder {
        StageBuilder::new(config)
    }

    /// Produce one frame.
    #[tracing::instrument(skip(self), fields(frame = self.frame))]
    pub fn frame(&mut self) -> ScrollfolioResult<FrameReport> {
        let progress = self.scroll.tick();
        let panel_look_target = self.panel.look_target(self.scene.as_mut());

        let overlays = self.overlays.update(progress);

        let hero_opacity = self.hero.opacity(progress, overlays.blend);
        let hero = self.hero.apply(self.scene.as_mut(), hero_opacity);

        self.camera.update_camera(progress, panel_look_target);
        self.renderer.render(self.camera.camera())?;

        let report = FrameReport {
            frame: self.frame,
            raw_progress: self.scroll.raw(),
            progress,
            overlay_blend: overlays.blend,
            overlays: overlays.alphas,
            hero,
            panel_look_target,
            camera: *self.camera.camera(),
            viewport: self.camera.profile().map(|p| p.id.clone()),
        };
        self.frame += 1;
        Ok(report)
    }

    /// Run `n` frames back to back.
    pub fn run(&mut self, n: u64) -> ScrollfolioResult<Vec<FrameReport>> {
        (0..n).map(|_| self.frame()).collect()
    }

    /// The document scrolled.
    pub fn on_scroll(&mut self) {
        self.scroll.on_scroll(self.document.scroll_metrics());
    }

    /// The window was resized.
    #[tracing::instrument(skip(self))]
    pub fn on_resize(&mut self) {
        let size = self.document.viewport_size();
        self.camera.update_viewport(size.width, false);
        self.camera.set_aspect(size.width, size.height);
        self.renderer.resize(size);
        self.scroll.on_scroll(self.document.scroll_metrics());
        publish_viewport_height(self.document.as_mut(), size);
    }

    /// Scroll to `progress` (clamped). Returns whether a scroll was issued.
    pub fn scroll_to_progress(&mut self, progress: f64) -> bool {
        self.scroll
            .scroll_to_progress(self.document.as_mut(), progress)
    }

    /// Follow a navigation anchor's `data-scroll-progress` value.
    pub fn navigate(&mut self, attr: &str) -> bool {
        self.scroll.navigate(self.document.as_mut(), attr)
    }

    /// Whether overlay `key` is currently visible.
    pub fn is_overlay_visible(&self, key: &str) -> bool {
        self.overlays.is_visible(key)
    }

    /// Live camera.
    pub fn camera(&self) -> &CameraState {
        self.camera.camera()
    }

    /// Smoothed progress after the last frame.
    pub fn progress(&self) -> f64 {
        self.scroll.smoothed()
    }

    /// Raw progress.
    pub fn raw_progress(&self) -> f64 {
        self.scroll.raw()
    }
}

/// Mobile browsers report a `100vh` taller than the visible area; pages size against `--vh`.
fn publish_viewport_height(document: &mut dyn DocumentHost, size: Size) {
    document.set_root_style("--vh", &format!("{}px", size.height * 0.01));
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/stage.rs"]
mod tests;
