mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{SessionPanelEffect, SessionPanelEvent};
use model::{OpenMenu, SessionPanelViewModel};
pub(crate) use model::{ListBody, PanelGeometry};
pub(crate) use reducer::SessionPanelCtx;
use state::SessionPanelState;

/// Session history panel owning its private interaction state.
///
/// The widget lives only while the panel is mounted; dropping it discards
/// the open menu, the trigger registry and the pointer snapshot.
#[derive(Debug)]
pub(crate) struct SessionPanelWidget {
    state: SessionPanelState,
}

impl SessionPanelWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: SessionPanelState::default(),
        }
    }

    /// Reduce an event into state updates and effects for the app.
    pub(crate) fn reduce(
        &mut self,
        event: SessionPanelEvent,
        ctx: &SessionPanelCtx<'_>,
    ) -> Vec<SessionPanelEffect> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> SessionPanelViewModel<'_> {
        SessionPanelViewModel {
            open_menu_id: self.state.open_menu_id(),
            notice: self.state.notice(),
        }
    }

    /// Return the open menu and its anchor, if any.
    pub(crate) fn open_menu(&self) -> Option<OpenMenu> {
        let session_id = self.state.open_menu_id()?.clone();
        let position = self.state.menu_position()?;
        Some(OpenMenu {
            session_id,
            position,
        })
    }

    /// Return the last pointer position seen by the panel.
    #[cfg(test)]
    pub(crate) fn cursor(&self) -> iced::Point {
        self.state.cursor()
    }

    #[cfg(test)]
    pub(crate) fn notice(&self) -> Option<&str> {
        self.state.notice()
    }
}

impl Default for SessionPanelWidget {
    fn default() -> Self {
        Self::new()
    }
}
