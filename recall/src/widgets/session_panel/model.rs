use iced::{Point, Rectangle, Size};
use recall_ui_menu::{MenuPosition, menu_bounds, menu_height_for_items};

use crate::components::primitive::menu_item::MENU_ITEM_HEIGHT;
use crate::store::{Session, SessionId, SessionListView};

pub(crate) const PANEL_WIDTH_NARROW: f32 = 280.0;
pub(crate) const PANEL_WIDTH_WIDE: f32 = 320.0;
pub(crate) const HEADER_HEIGHT: f32 = 64.0;
pub(crate) const SEPARATOR_HEIGHT: f32 = 1.0;
pub(crate) const LIST_PADDING: f32 = 16.0;
pub(crate) const LIST_GUTTER: f32 = 8.0;
pub(crate) const ROW_HEIGHT: f32 = 56.0;
pub(crate) const ROW_SPACING: f32 = 8.0;
pub(crate) const ROW_PADDING_X: f32 = 16.0;
pub(crate) const TRIGGER_SIZE: f32 = 24.0;
pub(crate) const NOTICE_HEIGHT: f32 = 56.0;
pub(crate) const MENU_WIDTH: f32 = 96.0;
pub(crate) const MENU_PADDING: f32 = 4.0;
pub(crate) const MENU_ITEM_COUNT: usize = 1;

/// Body of the session list, exactly one of which renders at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ListBody<'a> {
    Busy,
    Error(&'a str),
    Empty,
    Rows(&'a [Session]),
}

impl<'a> ListBody<'a> {
    /// Select the body for a store projection.
    ///
    /// Priority: loading, then error, then empty, then rows.
    pub(crate) fn from_view(view: SessionListView<'a>) -> Self {
        if view.fetch_loading {
            return ListBody::Busy;
        }
        if let Some(message) = view.fetch_error {
            return ListBody::Error(message);
        }
        if view.sessions.is_empty() {
            return ListBody::Empty;
        }
        ListBody::Rows(view.sessions)
    }

    /// Sessions that have rows on screen.
    pub(crate) fn rows(&self) -> &'a [Session] {
        match self {
            ListBody::Rows(sessions) => sessions,
            _ => &[],
        }
    }
}

/// Fixed geometry of the panel for a given window.
///
/// Mirrors the sizes used by the view so trigger bounds can be derived
/// without querying the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PanelGeometry {
    panel_width: f32,
    window_size: Size,
}

impl PanelGeometry {
    pub(crate) fn new(window_size: Size, wide_layout: bool) -> Self {
        let panel_width = if wide_layout {
            PANEL_WIDTH_WIDE
        } else {
            PANEL_WIDTH_NARROW
        };
        Self {
            panel_width,
            window_size,
        }
    }

    pub(crate) fn panel_width(&self) -> f32 {
        self.panel_width
    }

    /// Region covered by the panel landmark.
    pub(crate) fn panel_region(&self) -> Rectangle {
        Rectangle::new(
            Point::ORIGIN,
            Size::new(self.panel_width, self.window_size.height),
        )
    }

    fn list_top(&self) -> f32 {
        HEADER_HEIGHT + SEPARATOR_HEIGHT + LIST_PADDING
    }

    /// Visible part of the scrollable list.
    pub(crate) fn list_viewport(&self, has_notice: bool) -> Rectangle {
        let notice = if has_notice { NOTICE_HEIGHT } else { 0.0 };
        let height =
            (self.window_size.height - self.list_top() - LIST_PADDING - notice)
                .max(0.0);
        Rectangle::new(
            Point::new(LIST_PADDING, self.list_top()),
            Size::new((self.panel_width - 2.0 * LIST_PADDING).max(0.0), height),
        )
    }

    /// Largest offset the list scrolls to when it holds `row_count` rows.
    ///
    /// The scrollable clamps its own offset the same way and reports
    /// nothing once the content fits, so callers clamp their copy here.
    pub(crate) fn max_scroll_offset(
        &self,
        row_count: usize,
        has_notice: bool,
    ) -> f32 {
        let viewport = self.list_viewport(has_notice);
        (list_content_height(row_count) - viewport.height).max(0.0)
    }

    /// Bounds of the row at `index` after scrolling by `scroll_offset`.
    pub(crate) fn row_bounds(
        &self,
        index: usize,
        scroll_offset: f32,
    ) -> Rectangle {
        let y = self.list_top() + index as f32 * (ROW_HEIGHT + ROW_SPACING)
            - scroll_offset;
        let width =
            (self.panel_width - 2.0 * LIST_PADDING - LIST_GUTTER).max(0.0);
        Rectangle::new(
            Point::new(LIST_PADDING, y),
            Size::new(width, ROW_HEIGHT),
        )
    }

    /// Bounds of the menu trigger inside the row at `index`.
    pub(crate) fn trigger_bounds(
        &self,
        index: usize,
        scroll_offset: f32,
    ) -> Rectangle {
        let row = self.row_bounds(index, scroll_offset);
        Rectangle::new(
            Point::new(
                row.x + row.width - ROW_PADDING_X - TRIGGER_SIZE,
                row.y + (ROW_HEIGHT - TRIGGER_SIZE) / 2.0,
            ),
            Size::new(TRIGGER_SIZE, TRIGGER_SIZE),
        )
    }
}

/// Height of the row column holding `row_count` rows.
fn list_content_height(row_count: usize) -> f32 {
    match row_count {
        0 => 0.0,
        n => n as f32 * ROW_HEIGHT + (n - 1) as f32 * ROW_SPACING,
    }
}

/// Size of the floating session menu.
pub(crate) fn menu_size() -> Size {
    Size::new(
        MENU_WIDTH,
        menu_height_for_items(
            MENU_ITEM_COUNT,
            MENU_ITEM_HEIGHT,
            2.0 * MENU_PADDING,
        ),
    )
}

/// Region covered by a menu placed at `position`.
pub(crate) fn menu_region(position: MenuPosition) -> Rectangle {
    menu_bounds(position, menu_size())
}

/// Open menu snapshot handed to the overlay view.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct OpenMenu {
    pub(crate) session_id: SessionId,
    pub(crate) position: MenuPosition,
}

/// Read-only snapshot of panel-owned state for rendering.
#[derive(Debug, Clone)]
pub(crate) struct SessionPanelViewModel<'a> {
    pub(crate) open_menu_id: Option<&'a SessionId>,
    pub(crate) notice: Option<&'a str>,
}
