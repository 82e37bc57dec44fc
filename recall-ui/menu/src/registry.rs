use std::collections::HashMap;
use std::hash::Hash;

use iced::{Point, Rectangle};

/// Capability exposed by an on-screen element tracked by a registry.
pub trait ElementHandle {
    /// Bounds of the element in window coordinates, or `None` when the
    /// element is not currently laid out.
    fn bounds(&self) -> Option<Rectangle>;

    /// Return whether `point` falls inside the element.
    fn contains(&self, point: Point) -> bool {
        self.bounds().is_some_and(|bounds| bounds.contains(point))
    }
}

/// Element handle backed by bounds computed during a layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutHandle {
    bounds: Rectangle,
}

impl LayoutHandle {
    pub fn new(bounds: Rectangle) -> Self {
        Self { bounds }
    }
}

impl ElementHandle for LayoutHandle {
    fn bounds(&self) -> Option<Rectangle> {
        Some(self.bounds)
    }
}

#[derive(Debug, Clone)]
struct Slot<H> {
    handle: H,
    mounted: bool,
}

/// Mapping from a stable key to the trigger element rendered for it.
///
/// Entries are overwritten on every layout pass and never removed. A key
/// that was not registered again after the latest [`begin_pass`] is treated
/// as unmounted: it has no bounds and contains no point.
///
/// [`begin_pass`]: TriggerRegistry::begin_pass
#[derive(Debug, Clone)]
pub struct TriggerRegistry<K, H = LayoutHandle> {
    slots: HashMap<K, Slot<H>>,
}

impl<K, H> Default for TriggerRegistry<K, H> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }
}

impl<K, H> TriggerRegistry<K, H>
where
    K: Eq + Hash,
    H: ElementHandle,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new layout pass, marking every known entry as unmounted.
    pub fn begin_pass(&mut self) {
        for slot in self.slots.values_mut() {
            slot.mounted = false;
        }
    }

    /// Add or overwrite the handle for `key` and mark it mounted.
    pub fn register(&mut self, key: K, handle: H) {
        self.slots.insert(
            key,
            Slot {
                handle,
                mounted: true,
            },
        );
    }

    /// Bounds of the mounted trigger for `key`.
    pub fn bounds_of(&self, key: &K) -> Option<Rectangle> {
        self.slots
            .get(key)
            .filter(|slot| slot.mounted)
            .and_then(|slot| slot.handle.bounds())
    }

    /// Return whether any mounted trigger contains `point`.
    pub fn any_contains(&self, point: Point) -> bool {
        self.slots
            .values()
            .any(|slot| slot.mounted && slot.handle.contains(point))
    }

    /// Return whether `key` is mounted in the latest pass.
    pub fn is_mounted(&self, key: &K) -> bool {
        self.slots.get(key).is_some_and(|slot| slot.mounted)
    }

    /// Number of entries ever registered, mounted or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
