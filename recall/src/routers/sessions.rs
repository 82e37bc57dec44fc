use std::sync::Arc;

use iced::Task;

use super::session_panel;
use crate::app::{App, AppEvent};
use crate::route::Route;
use crate::store::{FetchTicket, Session, SessionId};
use crate::widgets::session_panel::SessionPanelEvent;

/// Start a fresh fetch of the session list.
pub(crate) fn request_sessions(app: &mut App) -> Task<AppEvent> {
    let ticket = app.store.begin_fetch();
    let service = Arc::clone(&app.service);
    log::debug!("fetching sessions ({ticket:?})");

    Task::perform(
        async move { service.fetch_sessions().map_err(|err| err.to_string()) },
        move |result| AppEvent::SessionsFetched { ticket, result },
    )
}

/// Apply a fetch completion to the store.
pub(crate) fn handle_fetched(
    app: &mut App,
    ticket: FetchTicket,
    result: Result<Vec<Session>, String>,
) -> Task<AppEvent> {
    if let Err(err) = &result {
        log::warn!("failed to fetch sessions: {err}");
    }
    if !app.store.apply_fetch(ticket, result) {
        log::debug!("dropping stale session fetch ({ticket:?})");
        return Task::none();
    }

    session_panel::route_event(app, SessionPanelEvent::LayoutChanged)
}

/// Start deleting a session.
pub(crate) fn delete_session(app: &mut App, id: SessionId) -> Task<AppEvent> {
    app.store.begin_delete();
    let service = Arc::clone(&app.service);
    log::debug!("deleting session {id}");

    let target = id.clone();
    Task::perform(
        async move {
            service.delete_session(&target).map_err(|err| err.to_string())
        },
        move |result| AppEvent::SessionDeleted { id, result },
    )
}

/// Apply a delete completion to the store and the route.
pub(crate) fn handle_deleted(
    app: &mut App,
    id: SessionId,
    result: Result<(), String>,
) -> Task<AppEvent> {
    match result {
        Ok(()) => {
            let removed = app.store.apply_delete(&id, Ok(()));
            log::debug!("deleted session {id} (listed: {removed})");
            if app.route.active_session_id() == Some(&id) {
                app.route = Route::Chat { session_id: None };
            }
            session_panel::route_event(app, SessionPanelEvent::LayoutChanged)
        },
        Err(message) => {
            log::warn!("failed to delete session {id}: {message}");
            app.store.apply_delete(&id, Err(message.clone()));
            session_panel::route_event(
                app,
                SessionPanelEvent::DeleteFailed { message },
            )
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{handle_deleted, handle_fetched, request_sessions};
    use crate::route::Route;
    use crate::routers::session_panel::mount;
    use crate::routers::testing::{app_with_sessions, complete_fetch, session};
    use crate::store::{OperationKind, SessionId};

    #[test]
    fn given_fetch_completes_when_handled_then_rows_are_listed_in_order() {
        let mut app = app_with_sessions(&["b", "a", "c"]);
        let _task = mount(&mut app);

        complete_fetch(&mut app);

        let ids: Vec<&str> = app
            .store
            .sessions()
            .iter()
            .map(|session| session.id().as_str())
            .collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
        assert!(!app.store.view().fetch_loading);
    }

    #[test]
    fn given_two_fetches_when_older_completes_last_then_it_is_ignored() {
        let mut app = app_with_sessions(&[]);
        let _task = request_sessions(&mut app);
        let stale = app.store.last_ticket();
        let _task = request_sessions(&mut app);
        let fresh = app.store.last_ticket();

        let _task = handle_fetched(&mut app, fresh, Ok(vec![session("new")]));
        let _task = handle_fetched(&mut app, stale, Ok(vec![session("old")]));

        assert_eq!(app.store.sessions().len(), 1);
        assert_eq!(app.store.sessions()[0].id().as_str(), "new");
    }

    #[test]
    fn given_fetch_fails_when_handled_then_error_is_kept_verbatim() {
        let mut app = app_with_sessions(&[]);
        let _task = mount(&mut app);
        let ticket = app.store.last_ticket();

        let _task = handle_fetched(
            &mut app,
            ticket,
            Err(String::from("Network Error: 503")),
        );

        assert_eq!(app.store.view().fetch_error, Some("Network Error: 503"));
    }

    #[test]
    fn given_active_session_deleted_when_handled_then_route_falls_back() {
        let mut app = app_with_sessions(&["a", "b"]);
        let _task = mount(&mut app);
        complete_fetch(&mut app);
        app.route = Route::Chat {
            session_id: Some(SessionId::from("a")),
        };

        let _task = handle_deleted(&mut app, SessionId::from("a"), Ok(()));

        assert_eq!(app.route, Route::Chat { session_id: None });
        assert_eq!(app.store.sessions().len(), 1);
        assert_eq!(app.store.sessions()[0].id().as_str(), "b");
    }

    #[test]
    fn given_delete_fails_when_handled_then_session_stays_and_notice_shows() {
        let mut app = app_with_sessions(&["a"]);
        let _task = mount(&mut app);
        complete_fetch(&mut app);

        let _task = handle_deleted(
            &mut app,
            SessionId::from("a"),
            Err(String::from("Session a does not exist.")),
        );

        assert_eq!(app.store.sessions().len(), 1);
        assert!(app.store.load_state().error(OperationKind::Delete).is_some());
        let notice = app
            .widgets
            .session_panel
            .as_ref()
            .and_then(|panel| panel.notice());
        assert_eq!(
            notice,
            Some("Could not delete session: Session a does not exist.")
        );
    }

    #[test]
    fn given_delete_completes_after_unmount_when_handled_then_store_updates() {
        let mut app = app_with_sessions(&["a", "b"]);
        let _task = mount(&mut app);
        complete_fetch(&mut app);
        crate::routers::session_panel::unmount(&mut app);

        let _task = handle_deleted(&mut app, SessionId::from("b"), Ok(()));

        assert_eq!(app.store.sessions().len(), 1);
        assert!(app.widgets.session_panel.is_none());
    }
}
