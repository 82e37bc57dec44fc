use iced::Task;

use super::{App, AppEvent};
use crate::routers;

/// Thin dispatch: route each event to its owning router.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::IcedReady => routers::navigation::open_history(app),
        // Session panel widget
        AppEvent::SessionPanel(event) => {
            routers::session_panel::route_event(app, event)
        },
        // Service completions
        AppEvent::SessionsFetched { ticket, result } => {
            routers::sessions::handle_fetched(app, ticket, result)
        },
        AppEvent::SessionDeleted { id, result } => {
            routers::sessions::handle_deleted(app, id, result)
        },
        // Navigation
        AppEvent::OpenHistory => routers::navigation::open_history(app),
        // Direct operations
        AppEvent::Window(iced::window::Event::Resized(size)) => {
            routers::window::handle_resize(app, size)
        },
        AppEvent::Window(_) => Task::none(),
    }
}
