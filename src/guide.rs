//! # scrollfolio guide
//!
//! A standalone walkthrough of how scroll position becomes visual state, and of the seams a host
//! page implements.
//!
//! ---
//!
//! ## Core concepts
//!
//! - **Progress**: scroll offset divided by the scrollable height, in `[0, 1]`. The
//!   [`ScrollBridge`](crate::ScrollBridge) keeps a *raw* value (jumps with every scroll event) and
//!   a *smoothed* value (an EMA advanced once per frame). Only the smoothed value drives visuals.
//! - **Timing window**: a [`TimingWindow`](crate::TimingWindow) is a trapezoid
//!   `start -> fadeInEnd -> fadeOutStart -> end` in *scaled* progress units.
//!   [`phase_alpha`](crate::phase_alpha) samples it.
//! - **Overlay**: a DOM card with a timing window and a `scale`. Each overlay samples its window
//!   at `progress * scale`, so one shared progress drives several stretched timelines.
//! - **Adjust rule**: an overlay may rewrite its alpha using the alphas of overlays declared
//!   *before* it. The portfolio uses this so `projects` stays hidden while `education` shows.
//!   Hosts can swap in their own function with
//!   [`StageBuilder::adjust`](crate::StageBuilder::adjust).
//! - **Viewport profile**: start and board camera positions for a width class
//!   (`mobile <= 640`, `tablet <= 1024`, `desktop` otherwise).
//!
//! ## One frame
//!
//! [`Stage::frame`](crate::Stage::frame) runs, in order:
//!
//! 1. `ScrollBridge::tick` -> smoothed progress `p`
//! 2. signboard world position (+0.025 on z) -> look target, or `(0, 1.3, 0.1)` while loading
//! 3. `OverlayScheduler::update(p)` -> alphas and `blend = max(alpha)`
//! 4. hero opacity `clamp(1 - 1.4 * blend) * (1 - fade(p))`, written to every hero material
//! 5. `CameraRig::update_camera(p, look)`:
//!    `zoom = ease(clamp(p / 0.24))`, desired pose = `lerp(start, board, zoom)`,
//!    live pose moves `12%` of the way to the desired pose
//! 6. `Renderer::render(camera)`
//!
//! The smoothing factors (`0.08` for scroll, `0.12` for the camera) are applied per frame, not
//! per second; at a lower refresh rate the page settles more slowly.
//!
//! ## Visibility hysteresis
//!
//! Opacity is written every frame with three decimals. The visible class and `aria-hidden` are
//! written only when an overlay crosses the `0.05` threshold (and once on the first frame), so a
//! page at rest generates no class churn.
//!
//! ## Hosting
//!
//! A host implements the [`host`](crate::host) traits:
//!
//! - [`DocumentHost`](crate::host::DocumentHost): scroll metrics, `scrollTo`, root style
//! - [`DomPanel`](crate::host::DomPanel): style, class toggle, attribute
//! - [`SceneGraph`](crate::host::SceneGraph): named world positions, visibility, materials
//! - [`Renderer`](crate::host::Renderer): resize and draw
//!
//! and wires events to the stage: scroll -> [`Stage::on_scroll`](crate::Stage::on_scroll),
//! resize -> [`Stage::on_resize`](crate::Stage::on_resize), anchor clicks ->
//! [`Stage::navigate`](crate::Stage::navigate). Scene groups that load asynchronously simply
//! appear in the scene graph later; until then the stage uses fallbacks.
//!
//! ```
//! use scrollfolio::{Size, Stage, StageConfig, host::headless::HeadlessPage};
//!
//! let page = HeadlessPage::new(Size::new(1400.0, 900.0), 5400.0);
//! let config = StageConfig::portfolio();
//! let mut builder = Stage::builder(config.clone())
//!     .document(page.document())
//!     .scene(page.scene())
//!     .renderer(page.renderer());
//! for o in &config.overlays {
//!     builder = builder.panel(&o.element_id, page.panel(&o.element_id));
//! }
//! let mut stage = builder.build()?;
//! // `page.stage_builder(config)` does the same wiring in one call.
//!
//! page.scroll_to_y(900.0);
//! stage.on_scroll();
//! let report = stage.frame()?;
//! assert!(report.progress > 0.0);
//! # Ok::<(), scrollfolio::ScrollfolioError>(())
//! ```
