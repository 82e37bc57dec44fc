use iced::{Point, Rectangle, Size};

/// Vertical gap between the bottom edge of a trigger and the menu.
pub const MENU_OFFSET_TOP: f32 = 8.0;
/// Horizontal shift to the left of the trigger's left edge.
pub const MENU_OFFSET_LEFT: f32 = 20.0;

/// Absolute window position of a floating menu, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MenuPosition {
    pub top: f32,
    pub left: f32,
}

impl MenuPosition {
    /// Return the top-left corner as an [`iced::Point`].
    pub fn to_point(self) -> Point {
        Point::new(self.left, self.top)
    }
}

/// Compute where a menu opened by a trigger with `trigger` bounds appears.
///
/// The menu sits [`MENU_OFFSET_TOP`] below the trigger and overhangs it by
/// [`MENU_OFFSET_LEFT`] on the left. The result is not clamped to the
/// viewport, so menus opened near an edge may render partially off-screen.
pub fn compute_menu_position(trigger: Rectangle) -> MenuPosition {
    MenuPosition {
        top: trigger.y + trigger.height + MENU_OFFSET_TOP,
        left: trigger.x - MENU_OFFSET_LEFT,
    }
}

/// Total menu height for a given number of items.
pub fn menu_height_for_items(
    item_count: usize,
    item_height: f32,
    vertical_padding: f32,
) -> f32 {
    vertical_padding + item_height * item_count as f32
}

/// Bounds occupied by a menu of `size` placed at `position`.
pub fn menu_bounds(position: MenuPosition, size: Size) -> Rectangle {
    Rectangle::new(position.to_point(), size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_trigger_bounds_when_computing_position_then_menu_is_below_and_left()
     {
        let trigger =
            Rectangle::new(Point::new(240.0, 120.0), Size::new(24.0, 24.0));

        let position = compute_menu_position(trigger);

        assert_eq!(position.top, 152.0);
        assert_eq!(position.left, 220.0);
    }

    #[test]
    fn given_trigger_near_left_edge_when_computing_position_then_left_is_not_clamped()
     {
        let trigger =
            Rectangle::new(Point::new(4.0, 10.0), Size::new(16.0, 16.0));

        let position = compute_menu_position(trigger);

        assert_eq!(position.left, -16.0);
        assert_eq!(position.top, 34.0);
    }

    #[test]
    fn given_item_count_when_menu_height_computed_then_padding_is_added() {
        assert_eq!(menu_height_for_items(2, 24.0, 8.0), 56.0);
        assert_eq!(menu_height_for_items(0, 24.0, 8.0), 8.0);
    }

    #[test]
    fn given_position_and_size_when_menu_bounds_built_then_origin_matches() {
        let bounds = menu_bounds(
            MenuPosition {
                top: 30.0,
                left: 12.0,
            },
            Size::new(96.0, 32.0),
        );

        assert!(bounds.contains(Point::new(13.0, 31.0)));
        assert!(!bounds.contains(Point::new(11.0, 31.0)));
        assert_eq!(bounds.width, 96.0);
    }
}
