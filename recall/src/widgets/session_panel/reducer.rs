use iced::{Point, Size};

use super::event::{SessionPanelEffect, SessionPanelEvent};
use super::model::{ListBody, PanelGeometry};
use super::state::SessionPanelState;
use crate::store::SessionListView;

const DELETE_FAILED_PREFIX: &str = "Could not delete session";

/// Read-only context for session panel reduction.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SessionPanelCtx<'a> {
    pub(crate) list: SessionListView<'a>,
    pub(crate) panel_visible: bool,
    pub(crate) window_size: Size,
    pub(crate) wide_layout: bool,
}

/// Reduce a panel event into state updates and effects for the app.
pub(crate) fn reduce(
    state: &mut SessionPanelState,
    event: SessionPanelEvent,
    ctx: &SessionPanelCtx<'_>,
) -> Vec<SessionPanelEffect> {
    use SessionPanelEffect as E;
    use SessionPanelEvent as Ev;

    let effects = match event {
        Ev::Mounted | Ev::RetryPressed => vec![E::RequestSessions],
        Ev::RowPressed { id } => {
            state.close_menu();
            vec![E::Navigate { id }, E::SetPanelVisible(false)]
        },
        Ev::TriggerPressed { id } => {
            let transition = state.toggle_menu(id);
            log::trace!("session menu trigger pressed: {transition:?}");
            Vec::new()
        },
        Ev::DeletePressed => match state.open_menu_id().cloned() {
            Some(id) => {
                state.close_menu();
                state.clear_notice();
                vec![E::DeleteSession { id }]
            },
            None => Vec::new(),
        },
        Ev::HomePressed => {
            state.close_menu();
            vec![E::SetPanelVisible(false), E::NavigateHome]
        },
        Ev::ExpandPressed => vec![E::SetPanelVisible(true)],
        Ev::CollapsePressed => vec![E::SetPanelVisible(false)],
        Ev::NoticeDismissed => {
            state.clear_notice();
            Vec::new()
        },
        Ev::Scrolled { offset_y } => {
            state.set_scroll_offset(offset_y);
            Vec::new()
        },
        Ev::PointerMoved { position } => {
            state.set_cursor(position);
            Vec::new()
        },
        Ev::PointerPressed => {
            let cursor = state.cursor();
            press_at(state, ctx, cursor)
        },
        Ev::TouchPressed { position } => {
            state.set_cursor(position);
            press_at(state, ctx, position)
        },
        Ev::DeleteFailed { message } => {
            state.set_notice(format!("{DELETE_FAILED_PREFIX}: {message}"));
            Vec::new()
        },
        Ev::LayoutChanged => Vec::new(),
    };

    let panel_visible = requested_visibility(&effects)
        .unwrap_or(ctx.panel_visible);
    let shown = ctx.wide_layout || panel_visible;
    let geometry = PanelGeometry::new(ctx.window_size, ctx.wide_layout);
    state.sync_layout(geometry, ListBody::from_view(ctx.list).rows(), shown);

    effects
}

/// Handle a window press at `point`.
///
/// The menu closes unless a trigger or the menu was hit. In the narrow
/// layout a press on the backdrop, i.e. outside the panel and the menu,
/// hides the panel.
fn press_at(
    state: &mut SessionPanelState,
    ctx: &SessionPanelCtx<'_>,
    point: Point,
) -> Vec<SessionPanelEffect> {
    let on_backdrop = !ctx.wide_layout
        && ctx.panel_visible
        && !state.panel_contains(point)
        && !state.menu_contains(point);

    let transition = state.dismiss_menu_at(point);
    log::trace!("session panel press at {point:?}: {transition:?}");

    if on_backdrop {
        vec![SessionPanelEffect::SetPanelVisible(false)]
    } else {
        Vec::new()
    }
}

/// Visibility the app will apply once `effects` are carried out.
fn requested_visibility(effects: &[SessionPanelEffect]) -> Option<bool> {
    effects.iter().rev().find_map(|effect| match effect {
        SessionPanelEffect::SetPanelVisible(visible) => Some(*visible),
        _ => None,
    })
}
