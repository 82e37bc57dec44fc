use std::hash::Hash;

use iced::{Point, Rectangle};

use crate::geometry::{MenuPosition, compute_menu_position};
use crate::registry::{ElementHandle, TriggerRegistry};

/// Single-slot contextual menu state keyed by the owning row.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuState<K> {
    Closed,
    Open { id: K, position: MenuPosition },
}

impl<K> Default for MenuState<K> {
    fn default() -> Self {
        Self::Closed
    }
}

/// Outcome of a state change, useful for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTransition {
    Opened,
    Moved,
    Closed,
    Unchanged,
}

impl<K> MenuState<K>
where
    K: Eq + Hash + Clone,
{
    /// Return whether any menu is open.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Return whether the menu is open for `id`.
    pub fn is_open_for(&self, id: &K) -> bool {
        matches!(self, Self::Open { id: open, .. } if open == id)
    }

    /// Identifier owning the open menu.
    pub fn open_id(&self) -> Option<&K> {
        match self {
            Self::Open { id, .. } => Some(id),
            Self::Closed => None,
        }
    }

    /// Position of the open menu.
    pub fn position(&self) -> Option<MenuPosition> {
        match self {
            Self::Open { position, .. } => Some(*position),
            Self::Closed => None,
        }
    }

    /// Handle a click on the trigger registered for `id`.
    ///
    /// Clicking the trigger of the open menu closes it. Clicking any other
    /// trigger opens the menu for that trigger, positioned from its current
    /// bounds. A trigger that is not mounted leaves the state unchanged.
    pub fn toggle<H>(
        &mut self,
        id: K,
        registry: &TriggerRegistry<K, H>,
    ) -> MenuTransition
    where
        H: ElementHandle,
    {
        if self.is_open_for(&id) {
            *self = Self::Closed;
            return MenuTransition::Closed;
        }

        let Some(bounds) = registry.bounds_of(&id) else {
            return MenuTransition::Unchanged;
        };

        let transition = if self.is_open() {
            MenuTransition::Moved
        } else {
            MenuTransition::Opened
        };
        *self = Self::Open {
            id,
            position: compute_menu_position(bounds),
        };
        transition
    }

    /// Close the menu unconditionally.
    pub fn close(&mut self) -> MenuTransition {
        if self.is_open() {
            *self = Self::Closed;
            MenuTransition::Closed
        } else {
            MenuTransition::Unchanged
        }
    }

    /// Close the menu when `point` lies outside every mounted trigger.
    ///
    /// `keep_inside` marks an extra region (usually the menu itself) that
    /// does not count as outside.
    pub fn dismiss_outside<H>(
        &mut self,
        point: Point,
        registry: &TriggerRegistry<K, H>,
        keep_inside: Option<Rectangle>,
    ) -> MenuTransition
    where
        H: ElementHandle,
    {
        if !self.is_open() {
            return MenuTransition::Unchanged;
        }
        if registry.any_contains(point) {
            return MenuTransition::Unchanged;
        }
        if keep_inside.is_some_and(|region| region.contains(point)) {
            return MenuTransition::Unchanged;
        }

        self.close()
    }
}
