use iced::{Event, Subscription, event, mouse, touch, window};

use crate::app::{App, AppEvent};
use crate::widgets::session_panel::SessionPanelEvent;

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));

    let mut subs = vec![win_subs];

    // Outside-click watcher lives exactly as long as the panel.
    if watches_pointer(app) {
        subs.push(event::listen_with(pointer_event));
    }

    Subscription::batch(subs)
}

/// Return whether window pointer events are routed to the session panel.
pub(crate) fn watches_pointer(app: &App) -> bool {
    app.widgets.session_panel.is_some()
}

fn pointer_event(
    event: Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<AppEvent> {
    let event = match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            SessionPanelEvent::PointerMoved { position }
        },
        Event::Mouse(mouse::Event::ButtonPressed(_)) => {
            SessionPanelEvent::PointerPressed
        },
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            SessionPanelEvent::TouchPressed { position }
        },
        _ => return None,
    };

    Some(AppEvent::SessionPanel(event))
}

#[cfg(test)]
mod tests {
    use iced::{Event, Point, event, mouse, window};

    use super::pointer_event;
    use crate::app::AppEvent;
    use crate::widgets::session_panel::SessionPanelEvent;

    #[test]
    fn given_mouse_press_when_mapped_then_pointer_pressed_is_emitted() {
        let mapped = pointer_event(
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
            event::Status::Captured,
            window::Id::unique(),
        );

        assert!(matches!(
            mapped,
            Some(AppEvent::SessionPanel(SessionPanelEvent::PointerPressed))
        ));
    }

    #[test]
    fn given_cursor_move_when_mapped_then_position_is_forwarded() {
        let mapped = pointer_event(
            Event::Mouse(mouse::Event::CursorMoved {
                position: Point::new(12.0, 34.0),
            }),
            event::Status::Ignored,
            window::Id::unique(),
        );

        match mapped {
            Some(AppEvent::SessionPanel(SessionPanelEvent::PointerMoved {
                position,
            })) => assert_eq!(position, Point::new(12.0, 34.0)),
            other => panic!("unexpected mapping: {other:?}"),
        }
    }

    #[test]
    fn given_scroll_when_mapped_then_event_is_ignored() {
        let mapped = pointer_event(
            Event::Mouse(mouse::Event::WheelScrolled {
                delta: mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 },
            }),
            event::Status::Ignored,
            window::Id::unique(),
        );

        assert!(mapped.is_none());
    }
}
