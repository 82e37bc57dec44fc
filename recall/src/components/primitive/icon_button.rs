use iced::widget::{button, container, text};
use iced::{Element, Length, alignment};

use crate::theme::{IcedColorPalette, ThemeProps};

const ICON_BUTTON_PADDING: f32 = 0.0;

/// UI events emitted by an icon button.
#[derive(Debug, Clone)]
pub(crate) enum IconButtonEvent {
    Pressed,
}

/// Props for rendering a square glyph button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IconButtonProps<'a> {
    pub(crate) glyph: &'a str,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) size: f32,
    pub(crate) glyph_size: f32,
}

/// Render a square button showing a single glyph.
pub(crate) fn view<'a>(
    props: IconButtonProps<'a>,
) -> Element<'a, IconButtonEvent> {
    let palette = props.theme.theme.iced_palette();

    let glyph = container(text(props.glyph).size(props.glyph_size))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(glyph)
        .on_press(IconButtonEvent::Pressed)
        .padding(ICON_BUTTON_PADDING)
        .width(Length::Fixed(props.size))
        .height(Length::Fixed(props.size))
        .style(move |_, status| icon_button_style(palette, status))
        .into()
}

fn icon_button_style(
    palette: &IcedColorPalette,
    status: button::Status,
) -> button::Style {
    let (background, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (Some(palette.hover.into()), palette.bright_foreground)
        },
        _ => (None, palette.dim_foreground),
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            radius: iced::border::Radius::new(8.0),
            ..Default::default()
        },
        ..Default::default()
    }
}
