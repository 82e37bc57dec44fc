pub(crate) mod backdrop;
pub(crate) mod context_menu;
pub(crate) mod session_list;
pub(crate) mod toggle_button;
