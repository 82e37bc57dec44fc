mod errors;
mod load_state;
mod model;
mod services;
mod storage;

use load_state::LoadState;
pub(crate) use load_state::OperationKind;
pub(crate) use model::{Session, SessionId};
pub(crate) use services::{JsonSessionService, SessionService};
#[cfg(test)]
pub(crate) use services::MemorySessionService;

/// Ticket identifying one fetch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FetchTicket(u64);

/// Read projection of the store consumed by the session panel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SessionListView<'a> {
    pub(crate) sessions: &'a [Session],
    pub(crate) fetch_loading: bool,
    pub(crate) fetch_error: Option<&'a str>,
    pub(crate) delete_loading: bool,
}

/// App-level store of query sessions and their load state.
///
/// The store outlives any panel that reads it, so completions that arrive
/// after the panel is gone are still applied here and nowhere else.
#[derive(Debug, Default)]
pub(crate) struct SessionStore {
    sessions: Vec<Session>,
    load: LoadState,
    last_ticket: u64,
}

impl SessionStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Return the read projection used for rendering.
    pub(crate) fn view(&self) -> SessionListView<'_> {
        SessionListView {
            sessions: &self.sessions,
            fetch_loading: self.load.is_loading(OperationKind::Fetch),
            fetch_error: self.load.error(OperationKind::Fetch),
            delete_loading: self.load.is_loading(OperationKind::Delete),
        }
    }

    #[cfg(test)]
    pub(crate) fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub(crate) fn session(&self, id: &SessionId) -> Option<&Session> {
        self.sessions.iter().find(|session| session.id() == id)
    }

    #[cfg(test)]
    pub(crate) fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// Mark a new fetch as in flight and return its ticket.
    pub(crate) fn begin_fetch(&mut self) -> FetchTicket {
        self.last_ticket += 1;
        self.load.start(OperationKind::Fetch);
        FetchTicket(self.last_ticket)
    }

    /// Apply a fetch completion.
    ///
    /// Returns `false` when a newer fetch was started after `ticket`; the
    /// result is dropped in that case.
    pub(crate) fn apply_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Session>, String>,
    ) -> bool {
        if ticket.0 != self.last_ticket {
            return false;
        }

        match result {
            Ok(sessions) => {
                self.sessions = sessions;
                self.load.succeed(OperationKind::Fetch);
            },
            Err(message) => {
                self.load.fail(OperationKind::Fetch, message);
            },
        }
        true
    }

    /// Ticket of the most recent fetch.
    #[cfg(test)]
    pub(crate) fn last_ticket(&self) -> FetchTicket {
        FetchTicket(self.last_ticket)
    }

    pub(crate) fn begin_delete(&mut self) {
        self.load.start(OperationKind::Delete);
    }

    /// Apply a delete completion, removing the session on success.
    ///
    /// Returns `true` when a session was removed from the list.
    pub(crate) fn apply_delete(
        &mut self,
        id: &SessionId,
        result: Result<(), String>,
    ) -> bool {
        match result {
            Ok(()) => {
                self.load.succeed(OperationKind::Delete);
                let before = self.sessions.len();
                self.sessions.retain(|session| session.id() != id);
                self.sessions.len() != before
            },
            Err(message) => {
                self.load.fail(OperationKind::Delete, message);
                false
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;

    fn session(id: &str) -> Session {
        let created_at = DateTime::from_timestamp(1_700_000_000, 0)
            .expect("timestamp should be valid");
        Session::new(SessionId::from(id), format!("Title {id}"), created_at)
    }

    #[test]
    fn given_new_store_when_fetch_begins_then_projection_is_loading() {
        let mut store = SessionStore::new();

        let _ticket = store.begin_fetch();

        let view = store.view();
        assert!(view.fetch_loading);
        assert!(view.fetch_error.is_none());
        assert!(view.sessions.is_empty());
    }

    #[test]
    fn given_fetch_succeeds_when_applied_then_sessions_keep_service_order() {
        let mut store = SessionStore::new();
        let ticket = store.begin_fetch();

        assert!(
            store.apply_fetch(ticket, Ok(vec![session("b"), session("a")]))
        );

        let view = store.view();
        assert!(!view.fetch_loading);
        assert_eq!(view.sessions[0].id().as_str(), "b");
        assert_eq!(view.sessions[1].id().as_str(), "a");
    }

    #[test]
    fn given_failed_fetch_when_refetched_then_previous_error_is_cleared() {
        let mut store = SessionStore::new();
        let ticket = store.begin_fetch();
        store.apply_fetch(ticket, Err(String::from("offline")));
        assert_eq!(store.view().fetch_error, Some("offline"));

        let _retry = store.begin_fetch();

        let view = store.view();
        assert!(view.fetch_loading);
        assert!(view.fetch_error.is_none());
    }

    #[test]
    fn given_stale_ticket_when_applied_then_result_is_dropped() {
        let mut store = SessionStore::new();
        let stale = store.begin_fetch();
        let fresh = store.begin_fetch();

        assert!(!store.apply_fetch(stale, Ok(vec![session("old")])));
        assert!(store.view().fetch_loading);

        assert!(store.apply_fetch(fresh, Ok(vec![session("new")])));
        assert_eq!(store.sessions()[0].id().as_str(), "new");
    }

    #[test]
    fn given_delete_succeeds_when_applied_then_session_is_removed() {
        let mut store = SessionStore::new();
        let ticket = store.begin_fetch();
        store.apply_fetch(
            ticket,
            Ok(vec![session("a"), session("b"), session("c")]),
        );
        store.begin_delete();

        assert!(store.apply_delete(&SessionId::from("b"), Ok(())));

        let ids: Vec<&str> =
            store.sessions().iter().map(|s| s.id().as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn given_delete_fails_when_applied_then_session_is_kept_and_error_recorded()
    {
        let mut store = SessionStore::new();
        let ticket = store.begin_fetch();
        store.apply_fetch(ticket, Ok(vec![session("a")]));
        store.begin_delete();

        assert!(!store.apply_delete(
            &SessionId::from("a"),
            Err(String::from("denied"))
        ));

        assert_eq!(store.sessions().len(), 1);
        assert_eq!(
            store.load_state().error(OperationKind::Delete),
            Some("denied")
        );
        assert!(store.view().fetch_error.is_none());
    }
}
