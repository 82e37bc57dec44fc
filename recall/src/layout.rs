use iced::Size;

/// Parent layout state shared with the session panel.
///
/// The panel never owns `panel_visible`; it reads the flag through its
/// reducer context and asks for changes through effects.
#[derive(Debug, Clone)]
pub(crate) struct ChatLayout {
    window_size: Size,
    wide_layout_min_width: f32,
    panel_visible: bool,
}

impl ChatLayout {
    pub(crate) fn new(window_size: Size, wide_layout_min_width: f32) -> Self {
        Self {
            window_size,
            wide_layout_min_width,
            panel_visible: false,
        }
    }

    pub(crate) fn window_size(&self) -> Size {
        self.window_size
    }

    /// Return whether the window is wide enough to dock the panel.
    pub(crate) fn is_wide(&self) -> bool {
        self.window_size.width >= self.wide_layout_min_width
    }

    /// Raw visibility flag; wide layouts render the panel regardless.
    pub(crate) fn panel_visible(&self) -> bool {
        self.panel_visible
    }

    pub(crate) fn set_panel_visible(&mut self, visible: bool) {
        self.panel_visible = visible;
    }

    pub(crate) fn set_window_size(&mut self, size: Size) {
        self.window_size = size;
    }
}
