use iced::widget::{Stack, button, column, container, row, text};
use iced::{Element, Length, Theme, alignment};

use super::{App, AppEvent};
use crate::route::Route;
use crate::style::session_row_style;
use crate::theme::ThemeProps;
use crate::widgets::session_panel::view::{
    backdrop, context_menu, session_list, toggle_button,
};
use crate::widgets::session_panel::{
    ListBody, PanelGeometry, SessionPanelWidget,
};

const HEADLINE_SIZE: f32 = 28.0;
const BODY_SIZE: f32 = 14.0;
const CONTENT_SPACING: f32 = 12.0;
const CONTENT_PADDING: f32 = 24.0;

/// Render the root view for the current route.
pub(crate) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme = ThemeProps::new(&app.theme);
    let background = theme.theme.iced_palette().background;

    let content = match (&app.route, app.widgets.session_panel.as_ref()) {
        (Route::Chat { .. }, Some(panel)) => chat_view(app, panel, theme),
        (Route::Chat { .. }, None) => chat_content(app),
        (Route::Dashboard, _) => dashboard_view(app),
    };

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(background.into()),
            ..Default::default()
        })
        .into()
}

fn chat_view<'a>(
    app: &'a App,
    panel: &'a SessionPanelWidget,
    theme: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let is_wide = app.layout.is_wide();
    let geometry = PanelGeometry::new(app.layout.window_size(), is_wide);

    let list = app.store.view();
    let session_list = session_list::view(session_list::SessionListProps {
        body: ListBody::from_view(list),
        active_id: app.route.active_session_id(),
        deleting: list.delete_loading,
        vm: panel.vm(),
        panel_width: geometry.panel_width(),
        show_collapse: !is_wide,
        theme,
    })
    .map(AppEvent::SessionPanel);

    let mut layers: Vec<Element<'a, AppEvent, Theme, iced::Renderer>> =
        Vec::new();

    if is_wide {
        layers.push(row![session_list, chat_content(app)].into());
    } else {
        layers.push(chat_content(app));
        if app.layout.panel_visible() {
            layers.push(
                backdrop::view(backdrop::BackdropProps { theme })
                    .map(AppEvent::SessionPanel),
            );
            layers.push(session_list);
        } else {
            layers.push(
                toggle_button::view(toggle_button::ToggleButtonProps { theme })
                    .map(AppEvent::SessionPanel),
            );
        }
    }

    if let Some(open) = panel.open_menu() {
        layers.push(
            context_menu::view(context_menu::ContextMenuProps {
                position: open.position,
                theme,
            })
            .map(AppEvent::SessionPanel),
        );
    }

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn chat_content(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let palette = app.theme.iced_palette();

    let selected = app
        .route
        .active_session_id()
        .and_then(|id| app.store.session(id));

    let body = match selected {
        Some(session) => column![
            text(session.title()).size(HEADLINE_SIZE),
            text(session.created_date_label())
                .size(BODY_SIZE)
                .color(palette.muted_foreground),
        ],
        None => column![
            text("Select a session from the history")
                .size(BODY_SIZE)
                .color(palette.dim_foreground),
        ],
    };

    centered(body.spacing(CONTENT_SPACING).into())
}

fn dashboard_view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let palette = app.theme.iced_palette();

    let open_history = button(text("Open history").size(BODY_SIZE))
        .padding([8.0, 16.0])
        .on_press(AppEvent::OpenHistory)
        .style(move |_, status| session_row_style(palette, false, status));

    let body = column![
        text("Recall").size(HEADLINE_SIZE).color(palette.green),
        text("Browse and manage your past query sessions.")
            .size(BODY_SIZE)
            .color(palette.dim_foreground),
        open_history,
    ]
    .spacing(CONTENT_SPACING)
    .align_x(alignment::Horizontal::Center);

    centered(body.into())
}

fn centered(
    content: Element<'_, AppEvent, Theme, iced::Renderer>,
) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(CONTENT_PADDING)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
