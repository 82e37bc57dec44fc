use iced::widget::{
    Space, button, column, container, row, scrollable, text,
};
use iced::{Element, Length, Padding, Theme, alignment};

use crate::components::primitive::icon_button;
use crate::store::{Session, SessionId};
use crate::style::{
    error_box_style, panel_style, separator_style, session_row_style,
    thin_scroll_style, trigger_button_style,
};
use crate::theme::ThemeProps;
use crate::widgets::session_panel::event::SessionPanelEvent;
use crate::widgets::session_panel::model::{
    HEADER_HEIGHT, LIST_GUTTER, LIST_PADDING, ListBody, NOTICE_HEIGHT,
    ROW_HEIGHT, ROW_PADDING_X, ROW_SPACING, SEPARATOR_HEIGHT,
    SessionPanelViewModel, TRIGGER_SIZE,
};

const PANEL_TITLE: &str = "History";
const EMPTY_MESSAGE: &str = "No query history found";
const LOADING_MESSAGE: &str = "Loading sessions...";
const RETRY_LABEL: &str = "Retry";
const HOME_GLYPH: &str = "⌂";
const COLLAPSE_GLYPH: &str = "‹";
const TRIGGER_GLYPH: &str = "⋮";
const DISMISS_GLYPH: &str = "×";

const TITLE_SIZE: f32 = 22.0;
const HEADER_BUTTON_SIZE: f32 = 32.0;
const HEADER_GLYPH_SIZE: f32 = 18.0;
const ROW_TITLE_SIZE: f32 = 14.0;
const ROW_DATE_SIZE: f32 = 12.0;
const TRIGGER_GLYPH_SIZE: f32 = 16.0;
const STATUS_TEXT_SIZE: f32 = 13.0;
const STATUS_PADDING: f32 = 16.0;
const STATUS_SPACING: f32 = 12.0;
const NOTICE_PADDING: f32 = 8.0;

/// Props for the session list panel.
pub(crate) struct SessionListProps<'a> {
    pub(crate) body: ListBody<'a>,
    pub(crate) active_id: Option<&'a SessionId>,
    /// Menu triggers are inert while a delete is in flight.
    pub(crate) deleting: bool,
    pub(crate) vm: SessionPanelViewModel<'a>,
    pub(crate) panel_width: f32,
    pub(crate) show_collapse: bool,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the panel: header, list body and optional footer notice.
pub(crate) fn view(
    props: SessionListProps<'_>,
) -> Element<'_, SessionPanelEvent, Theme, iced::Renderer> {
    let header = header_bar(&props);
    let separator = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(SEPARATOR_HEIGHT))
        .style(separator_style(props.theme));

    let body = container(list_body(&props))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(LIST_PADDING);

    let mut content = column![header, separator, body]
        .width(Length::Fill)
        .height(Length::Fill);

    if let Some(message) = props.vm.notice {
        content = content.push(notice(message, props.theme));
    }

    container(content)
        .width(Length::Fixed(props.panel_width))
        .height(Length::Fill)
        .style(panel_style(props.theme))
        .into()
}

fn header_bar<'a>(
    props: &SessionListProps<'a>,
) -> Element<'a, SessionPanelEvent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette();

    let home = icon_button::view(icon_button::IconButtonProps {
        glyph: HOME_GLYPH,
        theme: props.theme,
        size: HEADER_BUTTON_SIZE,
        glyph_size: HEADER_GLYPH_SIZE,
    })
    .map(|_| SessionPanelEvent::HomePressed);

    let title =
        container(text(PANEL_TITLE).size(TITLE_SIZE).color(palette.green))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center);

    let trailing: Element<'a, SessionPanelEvent, Theme, iced::Renderer> =
        if props.show_collapse {
            icon_button::view(icon_button::IconButtonProps {
                glyph: COLLAPSE_GLYPH,
                theme: props.theme,
                size: HEADER_BUTTON_SIZE,
                glyph_size: HEADER_GLYPH_SIZE,
            })
            .map(|_| SessionPanelEvent::CollapsePressed)
        } else {
            Space::new()
                .width(Length::Fixed(HEADER_BUTTON_SIZE))
                .height(Length::Fixed(HEADER_BUTTON_SIZE))
                .into()
        };

    container(
        row![home, title, trailing]
            .width(Length::Fill)
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(HEADER_HEIGHT))
    .padding([0.0, LIST_PADDING])
    .align_y(alignment::Vertical::Center)
    .into()
}

fn list_body<'a>(
    props: &SessionListProps<'a>,
) -> Element<'a, SessionPanelEvent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette();

    match props.body {
        ListBody::Busy => status_text(LOADING_MESSAGE, palette.cyan),
        ListBody::Error(message) => {
            let retry = button(text(RETRY_LABEL).size(STATUS_TEXT_SIZE))
                .on_press(SessionPanelEvent::RetryPressed)
                .style(move |_, status| {
                    session_row_style(palette, false, status)
                });

            container(
                column![text(message).size(STATUS_TEXT_SIZE), retry]
                    .spacing(STATUS_SPACING)
                    .align_x(alignment::Horizontal::Center),
            )
            .width(Length::Fill)
            .padding(STATUS_PADDING)
            .align_x(alignment::Horizontal::Center)
            .style(error_box_style(props.theme))
            .into()
        },
        ListBody::Empty => status_text(EMPTY_MESSAGE, palette.dim_foreground),
        ListBody::Rows(sessions) => {
            let rows =
                sessions.iter().map(|session| session_row(props, session));

            let list = column(rows)
                .spacing(ROW_SPACING)
                .width(Length::Fill)
                .padding(Padding {
                    right: LIST_GUTTER,
                    ..Padding::ZERO
                });

            scrollable(list)
                .width(Length::Fill)
                .height(Length::Fill)
                .on_scroll(|viewport| SessionPanelEvent::Scrolled {
                    offset_y: viewport.absolute_offset().y,
                })
                .style(thin_scroll_style(palette.clone()))
                .into()
        },
    }
}

fn session_row<'a>(
    props: &SessionListProps<'a>,
    session: &'a Session,
) -> Element<'a, SessionPanelEvent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette();
    let is_selected = props.active_id == Some(session.id());
    let is_open = props.vm.open_menu_id == Some(session.id());

    let title = container(
        text(session.title())
            .size(ROW_TITLE_SIZE)
            .wrapping(text::Wrapping::None),
    )
    .width(Length::Fill)
    .clip(true);

    let date = text(session.created_date_label())
        .size(ROW_DATE_SIZE)
        .color(palette.muted_foreground);

    let labels = column![title, date].width(Length::Fill).spacing(2.0);

    // Nested inside the row button: iced delivers the press to the
    // innermost button only, so a trigger press never emits `RowPressed`.
    let trigger = button(
        container(text(TRIGGER_GLYPH).size(TRIGGER_GLYPH_SIZE))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .padding(0.0)
    .width(Length::Fixed(TRIGGER_SIZE))
    .height(Length::Fixed(TRIGGER_SIZE))
    .on_press_maybe((!props.deleting).then(|| {
        SessionPanelEvent::TriggerPressed {
            id: session.id().clone(),
        }
    }))
    .style(move |_, status| trigger_button_style(palette, is_open, status));

    button(
        row![labels, trigger]
            .spacing(8.0)
            .height(Length::Fill)
            .align_y(alignment::Vertical::Center),
    )
    .padding([0.0, ROW_PADDING_X])
    .width(Length::Fill)
    .height(Length::Fixed(ROW_HEIGHT))
    .on_press(SessionPanelEvent::RowPressed {
        id: session.id().clone(),
    })
    .style(move |_, status| session_row_style(palette, is_selected, status))
    .into()
}

fn status_text<'a>(
    message: &'a str,
    color: iced::Color,
) -> Element<'a, SessionPanelEvent, Theme, iced::Renderer> {
    container(text(message).size(STATUS_TEXT_SIZE).color(color))
        .width(Length::Fill)
        .padding(STATUS_PADDING)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn notice<'a>(
    message: &'a str,
    theme: ThemeProps<'a>,
) -> Element<'a, SessionPanelEvent, Theme, iced::Renderer> {
    let dismiss = icon_button::view(icon_button::IconButtonProps {
        glyph: DISMISS_GLYPH,
        theme,
        size: TRIGGER_SIZE,
        glyph_size: TRIGGER_GLYPH_SIZE,
    })
    .map(|_| SessionPanelEvent::NoticeDismissed);

    let content = container(
        row![
            text(message)
                .size(STATUS_TEXT_SIZE)
                .width(Length::Fill),
            dismiss
        ]
        .spacing(NOTICE_PADDING)
        .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(NOTICE_PADDING)
    .align_y(alignment::Vertical::Center)
    .style(error_box_style(theme));

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(NOTICE_HEIGHT))
        .padding(Padding {
            bottom: NOTICE_PADDING,
            left: LIST_PADDING,
            right: LIST_PADDING,
            top: 0.0,
        })
        .into()
}
