//! Contextual menu helpers for [`iced`] list widgets.
//!
//! The crate is UI-agnostic about what a "row" is. It only knows three things:
//! - where a menu should appear relative to the control that opened it
//!   ([`compute_menu_position`]);
//! - which control currently owns the single open menu ([`MenuState`]);
//! - where every trigger control was laid out during the latest pass, so that
//!   pointer presses can be classified as inside or outside
//!   ([`TriggerRegistry`], [`ElementHandle`]).
//!
//! The recommended flow:
//! 1. rebuild the registry whenever your layout changes, starting each pass
//!    with [`TriggerRegistry::begin_pass`];
//! 2. on a trigger click, call [`MenuState::toggle`] with the registry;
//! 3. on every pointer press anywhere in the window, call
//!    [`MenuState::dismiss_outside`].
//!
//! # Quick Example
//!
//! ```
//! use iced::{Point, Rectangle, Size};
//! use recall_ui_menu::{LayoutHandle, MenuState, TriggerRegistry};
//!
//! let mut registry = TriggerRegistry::new();
//! registry.begin_pass();
//! registry.register(
//!     "a",
//!     LayoutHandle::new(Rectangle::new(
//!         Point::new(100.0, 40.0),
//!         Size::new(24.0, 24.0),
//!     )),
//! );
//!
//! let mut menu = MenuState::default();
//! menu.toggle("a", &registry);
//! let position = menu.position().expect("menu should be open");
//! assert_eq!(position.top, 72.0);
//! assert_eq!(position.left, 80.0);
//!
//! menu.dismiss_outside(Point::new(5.0, 5.0), &registry, None);
//! assert!(!menu.is_open());
//! ```

mod geometry;
mod registry;
mod state;

pub use geometry::{
    MENU_OFFSET_LEFT, MENU_OFFSET_TOP, MenuPosition, compute_menu_position,
    menu_bounds, menu_height_for_items,
};
pub use registry::{ElementHandle, LayoutHandle, TriggerRegistry};
pub use state::{MenuState, MenuTransition};
