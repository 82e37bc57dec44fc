use iced::{Point, Rectangle};
use recall_ui_menu::{
    LayoutHandle, MenuPosition, MenuState, MenuTransition, TriggerRegistry,
};

use super::model::{PanelGeometry, menu_region};
use crate::store::{Session, SessionId};

/// Panel-local interaction state.
#[derive(Debug, Default)]
pub(crate) struct SessionPanelState {
    menu: MenuState<SessionId>,
    triggers: TriggerRegistry<SessionId>,
    panel_region: Option<Rectangle>,
    cursor: Point,
    scroll_offset: f32,
    notice: Option<String>,
}

impl SessionPanelState {
    // --- Read access ---

    #[cfg(test)]
    pub(crate) fn menu(&self) -> &MenuState<SessionId> {
        &self.menu
    }

    pub(crate) fn open_menu_id(&self) -> Option<&SessionId> {
        self.menu.open_id()
    }

    pub(crate) fn menu_position(&self) -> Option<MenuPosition> {
        self.menu.position()
    }

    #[cfg(test)]
    pub(crate) fn triggers(&self) -> &TriggerRegistry<SessionId> {
        &self.triggers
    }

    pub(crate) fn cursor(&self) -> Point {
        self.cursor
    }

    pub(crate) fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Return whether `point` lies on the panel as laid out last.
    pub(crate) fn panel_contains(&self, point: Point) -> bool {
        self.panel_region
            .is_some_and(|region| region.contains(point))
    }

    /// Return whether `point` lies on the open menu.
    pub(crate) fn menu_contains(&self, point: Point) -> bool {
        self.menu
            .position()
            .is_some_and(|position| menu_region(position).contains(point))
    }

    // --- Write access ---

    pub(super) fn toggle_menu(&mut self, id: SessionId) -> MenuTransition {
        self.menu.toggle(id, &self.triggers)
    }

    pub(super) fn close_menu(&mut self) -> MenuTransition {
        self.menu.close()
    }

    /// Close the menu if `point` is outside every trigger and the menu.
    pub(super) fn dismiss_menu_at(&mut self, point: Point) -> MenuTransition {
        let keep = self.menu.position().map(menu_region);
        self.menu.dismiss_outside(point, &self.triggers, keep)
    }

    pub(super) fn set_cursor(&mut self, position: Point) {
        self.cursor = position;
    }

    pub(super) fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = offset.max(0.0);
    }

    pub(super) fn set_notice(&mut self, message: String) {
        self.notice = Some(message);
    }

    pub(super) fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Rebuild trigger bounds for the rows currently on screen.
    ///
    /// Rows scrolled out of the list viewport are left unmounted. An open
    /// menu whose session is no longer listed, or whose panel is no longer
    /// shown, is closed. The scroll offset is clamped to what the rows can
    /// still scroll, and reset while the panel is hidden.
    pub(super) fn sync_layout(
        &mut self,
        geometry: PanelGeometry,
        rows: &[Session],
        shown: bool,
    ) {
        self.triggers.begin_pass();

        if !shown {
            self.panel_region = None;
            self.scroll_offset = 0.0;
            self.menu.close();
            return;
        }

        let has_notice = self.notice.is_some();
        self.scroll_offset = self
            .scroll_offset
            .min(geometry.max_scroll_offset(rows.len(), has_notice));

        self.panel_region = Some(geometry.panel_region());
        let viewport = geometry.list_viewport(has_notice);
        for (index, session) in rows.iter().enumerate() {
            let bounds = geometry.trigger_bounds(index, self.scroll_offset);
            if viewport.intersects(&bounds) {
                self.triggers
                    .register(session.id().clone(), LayoutHandle::new(bounds));
            }
        }

        let menu_orphaned = self
            .menu
            .open_id()
            .is_some_and(|id| !rows.iter().any(|session| session.id() == id));
        if menu_orphaned {
            self.menu.close();
        }
    }
}
