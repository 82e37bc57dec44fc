use crate::store::SessionId;

/// Current navigation target of the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Route {
    Dashboard,
    Chat { session_id: Option<SessionId> },
}

impl Route {
    /// Session highlighted in the history panel, if any.
    pub(crate) fn active_session_id(&self) -> Option<&SessionId> {
        match self {
            Route::Chat { session_id } => session_id.as_ref(),
            Route::Dashboard => None,
        }
    }

    /// Return whether the route renders the session panel.
    pub(crate) fn shows_session_panel(&self) -> bool {
        matches!(self, Route::Chat { .. })
    }
}
