pub(crate) mod rig;
pub(crate) mod state;
pub(crate) mod viewport;
