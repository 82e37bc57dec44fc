pub(crate) mod navigation;
pub(crate) mod session_panel;
pub(crate) mod sessions;
pub(crate) mod window;
