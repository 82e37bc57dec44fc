use iced::Point;

use crate::store::SessionId;

/// Intent events handled by the session panel.
#[derive(Debug, Clone)]
pub(crate) enum SessionPanelEvent {
    /// Panel entered the tree; the session list is requested.
    Mounted,
    RowPressed { id: SessionId },
    TriggerPressed { id: SessionId },
    DeletePressed,
    RetryPressed,
    HomePressed,
    ExpandPressed,
    CollapsePressed,
    NoticeDismissed,
    Scrolled { offset_y: f32 },
    PointerMoved { position: Point },
    /// Mouse press anywhere in the window, at the last cursor position.
    ///
    /// Also decides backdrop presses, since the backdrop reports none.
    PointerPressed,
    /// Touch start anywhere in the window.
    TouchPressed { position: Point },
    DeleteFailed { message: String },
    /// Store contents or window geometry changed.
    LayoutChanged,
}

/// Effects produced by the session panel reducer and carried out by the app.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SessionPanelEffect {
    RequestSessions,
    Navigate { id: SessionId },
    NavigateHome,
    SetPanelVisible(bool),
    DeleteSession { id: SessionId },
}
