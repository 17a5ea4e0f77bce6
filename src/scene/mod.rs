pub(crate) mod hero;
pub(crate) mod panel;
