use crate::foundation::core::{ScrollMetrics, Size};

/// How a programmatic scroll should be performed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollBehavior {
    /// Animated scroll (`behavior: 'smooth'`).
    Smooth,
    /// Jump straight to the offset.
    Instant,
}

/// The document/window the stage is mounted in.
pub trait DocumentHost {
    /// Current scroll geometry.
    fn scroll_metrics(&self) -> ScrollMetrics;

    /// Current inner window size in CSS pixels.
    fn viewport_size(&self) -> Size;

    /// Scroll the document to `top` pixels.
    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior);

    /// Set a style property on the root element (used for CSS custom properties).
    fn set_root_style(&mut self, property: &str, value: &str);
}

/// A DOM element driven by an overlay.
pub trait DomPanel {
    /// Set an inline style property.
    fn set_style(&mut self, property: &str, value: &str);

    /// Add (`on == true`) or remove a class.
    fn toggle_class(&mut self, class: &str, on: bool);

    /// Set an attribute.
    fn set_attribute(&mut self, name: &str, value: &str);
}
