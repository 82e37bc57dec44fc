pub(crate) mod session_panel;

/// Container for widget instances mounted by the app.
#[derive(Default)]
pub(crate) struct Widgets {
    /// Present only while the current route shows the history panel.
    pub(crate) session_panel: Option<session_panel::SessionPanelWidget>,
}
