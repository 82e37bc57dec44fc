use iced::Task;

use super::session_panel;
use crate::app::{App, AppEvent};
use crate::route::Route;
use crate::store::SessionId;

/// Show the chat view for `id` with the history panel mounted.
pub(crate) fn open_session(app: &mut App, id: SessionId) -> Task<AppEvent> {
    log::debug!("navigating to session {id}");
    app.route = Route::Chat {
        session_id: Some(id),
    };
    session_panel::mount(app)
}

/// Show the chat view without a selected session.
pub(crate) fn open_history(app: &mut App) -> Task<AppEvent> {
    if !app.route.shows_session_panel() {
        app.route = Route::Chat { session_id: None };
    }
    session_panel::mount(app)
}

/// Leave the chat view for the dashboard.
pub(crate) fn go_home(app: &mut App) -> Task<AppEvent> {
    log::debug!("navigating home");
    app.route = Route::Dashboard;
    session_panel::unmount(app);
    Task::none()
}
