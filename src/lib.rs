//! scrollfolio maps vertical scroll position onto the visual state of an animated portfolio page.
//!
//! The page has a 3D hero scene (character, globe, signboard) and six DOM overlay cards. As the
//! reader scrolls, one normalized progress value drives:
//!
//! - **Overlays**: trapezoidal opacity windows per card, with threshold-based visibility classes
//! - **Camera**: an eased zoom from the hero framing onto the signboard, smoothed per frame
//! - **Hero fade**: the hero group fades out past a threshold and while overlays are showing
//!
//! # Frame overview
//!
//! 1. **Smooth**: raw scroll progress -> smoothed progress (per-frame EMA)
//! 2. **Resolve**: signboard world position -> camera look target (fallback while loading)
//! 3. **Overlays**: smoothed progress -> ordered overlay alphas + blend
//! 4. **Hero**: progress + blend -> hero opacity on every hero material
//! 5. **Camera**: progress -> desired pose -> live pose, then render
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: every frame is a pure function of configuration, prior frame state and
//!   the host's scroll geometry.
//! - **Hosts behind traits**: the document, panels, scene graph and renderer are reached only
//!   through [`host`] traits, so the same stage runs in a page binding or fully headless.
//!
//! See [`crate::guide`] for a walkthrough.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod camera;
mod config;
mod foundation;
mod overlay;
mod runtime;
mod scene;
mod scroll;

/// High-level, standalone documentation for scrollfolio's concepts.
pub mod guide;
pub mod host;

pub use animation::ease::{Ease, ease_in_out_cubic};
pub use animation::phase::{MIN_RAMP, TimingWindow, phase_alpha};
pub use camera::rig::{CameraConfig, CameraRig};
pub use camera::state::CameraState;
pub use camera::viewport::{ViewportProfile, ViewportProfiles};
pub use config::stage::StageConfig;
pub use foundation::core::{ScrollMetrics, Size, Vec3, clamp01};
pub use foundation::error::{ScrollfolioError, ScrollfolioResult};
pub use overlay::descriptor::{
    Adjust, AdjustFn, AdjustRule, OverlayContext, OverlayDescriptor, OverlaySpec,
};
pub use overlay::scheduler::{DEFAULT_VISIBILITY_THRESHOLD, OverlayFrame, OverlayScheduler};
pub use runtime::stage::{FrameReport, Stage, StageBuilder};
pub use scene::hero::{HeroConfig, HeroFade, HeroState};
pub use scene::panel::{PanelConfig, PanelTracker};
pub use scroll::bridge::{ScrollBridge, ScrollConfig, parse_scroll_progress};
