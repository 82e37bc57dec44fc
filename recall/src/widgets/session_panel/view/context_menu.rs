use iced::widget::{column, container};
use iced::{Element, Length, Padding, Theme};
use recall_ui_menu::MenuPosition;

use crate::components::primitive::menu_item;
use crate::style::menu_panel_style;
use crate::theme::ThemeProps;
use crate::widgets::session_panel::event::SessionPanelEvent;
use crate::widgets::session_panel::model::{MENU_PADDING, MENU_WIDTH};

const DELETE_LABEL: &str = "Delete";

/// Props for the floating session menu.
pub(crate) struct ContextMenuProps<'a> {
    pub(crate) position: MenuPosition,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the session menu as a window-sized overlay layer.
///
/// The layer itself is transparent to the pointer; only the menu panel
/// reacts to presses.
pub(crate) fn view(
    props: ContextMenuProps<'_>,
) -> Element<'_, SessionPanelEvent, Theme, iced::Renderer> {
    let delete = menu_item::view(menu_item::MenuItemProps {
        label: DELETE_LABEL,
        theme: props.theme,
    })
    .map(|_| SessionPanelEvent::DeletePressed);

    let menu_panel = container(column![delete])
        .width(Length::Fixed(MENU_WIDTH))
        .padding(MENU_PADDING)
        .style(menu_panel_style(props.theme));

    // Negative anchors cannot be expressed as padding; the panel is pinned
    // to the window edge in that case.
    container(menu_panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: props.position.top.max(0.0),
            right: 0.0,
            bottom: 0.0,
            left: props.position.left.max(0.0),
        })
        .into()
}
