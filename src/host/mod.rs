//! Collaborator seams between the stage and its hosting page.
//!
//! The stage never touches a browser, a DOM or a GPU directly. Everything it drives goes through
//! the small traits in this module, so a page binding, a test double or the in-memory
//! [`headless`] page can all host the same frame loop.

mod dom;
/// In-memory host used by the CLI and by tests.
pub mod headless;
mod scene;

pub use dom::{DocumentHost, DomPanel, ScrollBehavior};
pub use scene::{Renderer, SceneGraph, SceneMaterial};
