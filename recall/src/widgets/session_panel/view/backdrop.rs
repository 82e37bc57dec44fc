use iced::widget::{Space, container, opaque};
use iced::{Element, Length, Theme};

use crate::style::backdrop_style;
use crate::theme::ThemeProps;
use crate::widgets::session_panel::event::SessionPanelEvent;

/// Props for the dimmed layer behind the narrow-layout panel.
pub(crate) struct BackdropProps<'a> {
    pub(crate) theme: ThemeProps<'a>,
}

/// Render a full-window backdrop that keeps presses off the content.
///
/// Presses on it are judged from the window's pointer events, which carry
/// the press position.
pub(crate) fn view(
    props: BackdropProps<'_>,
) -> Element<'_, SessionPanelEvent, Theme, iced::Renderer> {
    opaque(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(backdrop_style(props.theme)),
    )
}
