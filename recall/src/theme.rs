use iced::theme::Palette;
use iced::{Color, Theme};

const THEME_NAME: &str = "Recall Dark";

/// Colors used by Recall widgets.
#[derive(Debug, Clone)]
pub(crate) struct IcedColorPalette {
    pub(crate) background: Color,
    pub(crate) panel: Color,
    pub(crate) overlay: Color,
    pub(crate) hover: Color,
    pub(crate) border: Color,
    pub(crate) menu_border: Color,
    pub(crate) foreground: Color,
    pub(crate) bright_foreground: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) muted_foreground: Color,
    pub(crate) green: Color,
    pub(crate) cyan: Color,
    pub(crate) red: Color,
    pub(crate) bright_red: Color,
    pub(crate) backdrop: Color,
}

impl Default for IcedColorPalette {
    fn default() -> Self {
        Self {
            background: Color::from_rgb8(0x0B, 0x0B, 0x0B),
            panel: Color::from_rgb8(0x13, 0x13, 0x13),
            overlay: Color::from_rgb8(0x1E, 0x1E, 0x1E),
            hover: Color::from_rgb8(0x2A, 0x2A, 0x2A),
            border: Color::from_rgb8(0x1F, 0x29, 0x37),
            menu_border: Color::from_rgb8(0x37, 0x41, 0x51),
            foreground: Color::from_rgb8(0xD1, 0xD5, 0xDB),
            bright_foreground: Color::WHITE,
            dim_foreground: Color::from_rgb8(0x9C, 0xA3, 0xAF),
            muted_foreground: Color::from_rgb8(0x6B, 0x72, 0x80),
            green: Color::from_rgb8(0x4A, 0xDE, 0x80),
            cyan: Color::from_rgb8(0x22, 0xD3, 0xEE),
            red: Color::from_rgb8(0xF8, 0x71, 0x71),
            bright_red: Color::from_rgb8(0xDC, 0x26, 0x26),
            backdrop: Color::from_rgba8(0x00, 0x00, 0x00, 0.5),
        }
    }
}

/// Global application theme.
#[derive(Debug, Clone, Default)]
pub(crate) struct AppTheme {
    iced_palette: IcedColorPalette,
}

impl AppTheme {
    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }

    /// Build the iced theme matching this palette.
    pub(crate) fn iced_theme(&self) -> Theme {
        let palette = &self.iced_palette;
        Theme::custom(
            String::from(THEME_NAME),
            Palette {
                background: palette.background,
                text: palette.foreground,
                primary: palette.cyan,
                success: palette.green,
                warning: palette.cyan,
                danger: palette.red,
            },
        )
    }
}

/// Theme handle passed down to views.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}
