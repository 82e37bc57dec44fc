use iced::Task;

use super::{navigation, sessions};
use crate::app::{App, AppEvent};
use crate::widgets::session_panel::{
    SessionPanelCtx, SessionPanelEffect, SessionPanelEvent, SessionPanelWidget,
};

/// Mount the panel if it is not mounted yet.
///
/// Mounting issues the panel's one fetch for this mount.
pub(crate) fn mount(app: &mut App) -> Task<AppEvent> {
    if app.widgets.session_panel.is_some() {
        return Task::none();
    }

    log::debug!("session panel mounted");
    app.widgets.session_panel = Some(SessionPanelWidget::new());
    route_event(app, SessionPanelEvent::Mounted)
}

/// Drop the panel and every piece of its interaction state.
pub(crate) fn unmount(app: &mut App) {
    if app.widgets.session_panel.take().is_some() {
        log::debug!("session panel unmounted");
    }
}

/// Reduce a panel event and carry out the resulting effects.
pub(crate) fn route_event(
    app: &mut App,
    event: SessionPanelEvent,
) -> Task<AppEvent> {
    let Some(widget) = app.widgets.session_panel.as_mut() else {
        log::trace!("session panel not mounted, ignoring {event:?}");
        return Task::none();
    };

    let ctx = SessionPanelCtx {
        list: app.store.view(),
        panel_visible: app.layout.panel_visible(),
        window_size: app.layout.window_size(),
        wide_layout: app.layout.is_wide(),
    };
    let effects = widget.reduce(event, &ctx);

    let mut tasks = Vec::with_capacity(effects.len());
    for effect in effects {
        tasks.push(route_effect(app, effect));
    }
    Task::batch(tasks)
}

fn route_effect(app: &mut App, effect: SessionPanelEffect) -> Task<AppEvent> {
    use SessionPanelEffect as E;

    match effect {
        E::RequestSessions => sessions::request_sessions(app),
        E::Navigate { id } => navigation::open_session(app, id),
        E::NavigateHome => navigation::go_home(app),
        E::SetPanelVisible(visible) => {
            app.layout.set_panel_visible(visible);
            Task::none()
        },
        E::DeleteSession { id } => sessions::delete_session(app, id),
    }
}
