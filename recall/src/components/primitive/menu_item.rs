use iced::widget::button::Status as ButtonStatus;
use iced::widget::{button, text};
use iced::{Element, Length, alignment};

use crate::theme::{IcedColorPalette, ThemeProps};

pub(crate) const MENU_ITEM_HEIGHT: f32 = 28.0;
const MENU_ITEM_FONT_SIZE: f32 = 13.0;
const MENU_ITEM_HORIZONTAL_PADDING: f32 = 10.0;
const MENU_ITEM_VERTICAL_PADDING: f32 = 1.0;

/// UI events emitted by a menu item.
#[derive(Debug, Clone)]
pub(crate) enum MenuItemEvent {
    Pressed,
}

/// Props for rendering a menu item.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MenuItemProps<'a> {
    pub(crate) label: &'a str,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render a single destructive menu row used in context menus.
pub(crate) fn view<'a>(props: MenuItemProps<'a>) -> Element<'a, MenuItemEvent> {
    let palette = props.theme.theme.iced_palette();

    let label = text(props.label)
        .size(MENU_ITEM_FONT_SIZE)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Center);

    button(label)
        .padding([MENU_ITEM_VERTICAL_PADDING, MENU_ITEM_HORIZONTAL_PADDING])
        .width(Length::Fill)
        .height(Length::Fixed(MENU_ITEM_HEIGHT))
        .style(move |_, status| menu_button_style(palette, status))
        .on_press(MenuItemEvent::Pressed)
        .into()
}

fn menu_button_style(
    palette: &IcedColorPalette,
    status: ButtonStatus,
) -> button::Style {
    let is_active =
        matches!(status, ButtonStatus::Hovered | ButtonStatus::Pressed);

    let (background, text_color) = if is_active {
        let mut tint = palette.red;
        tint.a = 0.1;
        (Some(tint.into()), palette.bright_red)
    } else {
        (None, palette.red)
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            width: 0.0,
            radius: iced::border::Radius::new(6.0),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use iced::Background;
    use iced::widget::button::Status as ButtonStatus;

    use super::menu_button_style;
    use crate::theme::AppTheme;

    #[test]
    fn given_hovered_danger_item_when_building_style_then_uses_bright_red() {
        let theme = AppTheme::default();
        let palette = theme.iced_palette();

        let style = menu_button_style(palette, ButtonStatus::Hovered);

        assert_eq!(style.text_color, palette.bright_red);
        assert!(style.background.is_some());
    }

    #[test]
    fn given_idle_item_when_building_style_then_has_no_background() {
        let theme = AppTheme::default();
        let palette = theme.iced_palette();

        let style = menu_button_style(palette, ButtonStatus::Active);

        assert_eq!(style.text_color, palette.red);
        assert_eq!(style.background, None::<Background>);
    }
}
