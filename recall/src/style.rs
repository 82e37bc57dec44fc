use iced::widget::{button, container, scrollable};
use iced::{Background, Border, Color, Shadow, Vector};

use crate::theme::{IcedColorPalette, ThemeProps};

const ROW_RADIUS: f32 = 8.0;
const MENU_RADIUS: f32 = 8.0;
const SELECTED_ALPHA: f32 = 0.12;
const ERROR_ALPHA: f32 = 0.1;

pub(crate) fn thin_scroll_style(
    palette: IcedColorPalette,
) -> impl Fn(&iced::Theme, scrollable::Status) -> scrollable::Style + 'static {
    move |theme, status| {
        let mut style = scrollable::default(theme, status);
        let radius = iced::border::Radius::from(0.0);

        style.vertical_rail.border.radius = radius;
        style.vertical_rail.scroller.border.radius = radius;

        let mut scroller_color = match style.vertical_rail.scroller.background {
            Background::Color(color) => color,
            _ => palette.muted_foreground,
        };
        scroller_color.a = (scroller_color.a * 0.7).min(1.0);
        style.vertical_rail.scroller.background =
            Background::Color(scroller_color);

        style
    }
}

pub(crate) fn panel_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    let palette = theme.theme.iced_palette().clone();
    move |_theme: &iced::Theme| container::Style {
        background: Some(palette.panel.into()),
        text_color: Some(palette.foreground),
        border: Border {
            width: 1.0,
            color: palette.border,
            radius: iced::border::Radius::from(0.0),
        },
        ..Default::default()
    }
}

pub(crate) fn separator_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    let color = theme.theme.iced_palette().border;
    move |_theme: &iced::Theme| container::Style {
        background: Some(color.into()),
        ..Default::default()
    }
}

pub(crate) fn session_row_style(
    palette: &IcedColorPalette,
    is_selected: bool,
    status: button::Status,
) -> button::Style {
    let (background, text_color) = if is_selected {
        let mut color = palette.cyan;
        color.a = SELECTED_ALPHA;
        (Some(color.into()), palette.bright_foreground)
    } else {
        match status {
            button::Status::Hovered | button::Status::Pressed => {
                (Some(palette.hover.into()), palette.foreground)
            },
            _ => (None, palette.foreground),
        }
    };

    button::Style {
        background,
        text_color,
        border: Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: iced::border::Radius::from(ROW_RADIUS),
        },
        ..Default::default()
    }
}

pub(crate) fn trigger_button_style(
    palette: &IcedColorPalette,
    is_open: bool,
    status: button::Status,
) -> button::Style {
    let text_color = match status {
        _ if is_open => palette.bright_foreground,
        button::Status::Hovered | button::Status::Pressed => {
            palette.bright_foreground
        },
        _ => palette.muted_foreground,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        ..Default::default()
    }
}

pub(crate) fn menu_panel_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    let palette = theme.theme.iced_palette().clone();
    move |_theme: &iced::Theme| container::Style {
        background: Some(palette.overlay.into()),
        text_color: Some(palette.foreground),
        border: Border {
            width: 1.0,
            color: palette.menu_border,
            radius: iced::border::Radius::new(MENU_RADIUS),
        },
        shadow: Shadow {
            color: Color::from_rgba8(0, 0, 0, 0.4),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    }
}

pub(crate) fn backdrop_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    let color = theme.theme.iced_palette().backdrop;
    move |_theme: &iced::Theme| container::Style {
        background: Some(color.into()),
        ..Default::default()
    }
}

pub(crate) fn error_box_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    let palette = theme.theme.iced_palette().clone();
    move |_theme: &iced::Theme| {
        let mut background = palette.red;
        background.a = ERROR_ALPHA;
        container::Style {
            background: Some(background.into()),
            text_color: Some(palette.red),
            border: Border {
                width: 0.0,
                color: Color::TRANSPARENT,
                radius: iced::border::Radius::from(ROW_RADIUS),
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use iced::Background;
    use iced::widget::button;

    use super::session_row_style;
    use crate::theme::AppTheme;

    #[test]
    fn given_selected_row_when_building_style_then_highlight_ignores_hover() {
        let theme = AppTheme::default();
        let palette = theme.iced_palette();

        let idle = session_row_style(palette, true, button::Status::Active);
        let hovered = session_row_style(palette, true, button::Status::Hovered);

        assert_eq!(idle.background, hovered.background);
        assert_eq!(idle.text_color, palette.bright_foreground);
    }

    #[test]
    fn given_unselected_row_when_hovered_then_uses_hover_background() {
        let theme = AppTheme::default();
        let palette = theme.iced_palette();

        let style = session_row_style(palette, false, button::Status::Hovered);

        assert_eq!(style.background, Some(Background::Color(palette.hover)));
    }

    #[test]
    fn given_unselected_row_when_idle_then_has_no_background() {
        let theme = AppTheme::default();
        let palette = theme.iced_palette();

        let style = session_row_style(palette, false, button::Status::Active);

        assert!(style.background.is_none());
        assert_eq!(style.text_color, palette.foreground);
    }
}
