use iced::widget::container;
use iced::{Element, Length, Theme};

use crate::components::primitive::icon_button;
use crate::theme::ThemeProps;
use crate::widgets::session_panel::event::SessionPanelEvent;

const TOGGLE_GLYPH: &str = "☰";
const TOGGLE_SIZE: f32 = 40.0;
const TOGGLE_GLYPH_SIZE: f32 = 22.0;
const TOGGLE_MARGIN: f32 = 16.0;

/// Props for the hamburger button shown while the panel is hidden.
pub(crate) struct ToggleButtonProps<'a> {
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the expand button pinned to the top-left corner.
pub(crate) fn view(
    props: ToggleButtonProps<'_>,
) -> Element<'_, SessionPanelEvent, Theme, iced::Renderer> {
    let button = icon_button::view(icon_button::IconButtonProps {
        glyph: TOGGLE_GLYPH,
        theme: props.theme,
        size: TOGGLE_SIZE,
        glyph_size: TOGGLE_GLYPH_SIZE,
    })
    .map(|_| SessionPanelEvent::ExpandPressed);

    container(button)
        .width(Length::Shrink)
        .height(Length::Shrink)
        .padding(TOGGLE_MARGIN)
        .into()
}
