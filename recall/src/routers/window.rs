use iced::{Size, Task};

use super::session_panel;
use crate::app::{App, AppEvent};
use crate::widgets::session_panel::SessionPanelEvent;

/// Handle window resize events and propagate layout changes.
pub(crate) fn handle_resize(app: &mut App, size: Size) -> Task<AppEvent> {
    app.layout.set_window_size(size);
    session_panel::route_event(app, SessionPanelEvent::LayoutChanged)
}

#[cfg(test)]
mod tests {
    use iced::Size;

    use super::handle_resize;
    use crate::routers::session_panel::{mount, route_event};
    use crate::routers::testing::{app_with_sessions, complete_fetch};
    use crate::store::SessionId;
    use crate::widgets::session_panel::SessionPanelEvent;

    #[test]
    fn given_open_menu_when_window_narrows_with_panel_hidden_then_menu_closes()
    {
        let mut app = app_with_sessions(&["a"]);
        let _task = mount(&mut app);
        complete_fetch(&mut app);
        let _task = route_event(
            &mut app,
            SessionPanelEvent::TriggerPressed {
                id: SessionId::from("a"),
            },
        );

        let _task = handle_resize(&mut app, Size::new(600.0, 800.0));

        assert!(!app.layout.is_wide());
        let open = app
            .widgets
            .session_panel
            .as_ref()
            .and_then(|panel| panel.open_menu());
        assert!(open.is_none());
    }
}
