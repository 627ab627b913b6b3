//! Roving tabindex: one tab stop per list, moved with arrow keys.
//!
//! Exactly one item is in the natural tab order at a time; the others are
//! reached with the orientation's arrow keys, wrapping at both ends.
//! Pointer-driven focus calls [`RovingTabindex::notify_focus`] so mouse
//! and keyboard stay in sync.

use tactus_core::{KeyCode, KeyEvent, KeyEventType};

use crate::tree::{FocusId, FocusTree};

/// Which arrow-key axis navigates the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Per-item render properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RovingItemProps {
    /// Whether this item is the list's single natural tab stop.
    pub is_tabbable: bool,
}

/// Controller for one keyboard-navigable list.
pub struct RovingTabindex {
    items: Vec<FocusId>,
    current: usize,
    orientation: Orientation,
}

impl RovingTabindex {
    /// `items` in visual order. An empty list is valid: every navigation
    /// call is then a no-op and no item is tabbable.
    pub fn new(items: Vec<FocusId>, orientation: Orientation) -> Self {
        Self {
            items,
            current: 0,
            orientation,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the current tab stop; `None` for an empty list.
    pub fn current_index(&self) -> Option<usize> {
        (!self.items.is_empty()).then_some(self.current)
    }

    /// The item handle at `index`, if in range.
    pub fn item(&self, index: usize) -> Option<FocusId> {
        self.items.get(index).copied()
    }

    pub fn item_props(&self, index: usize) -> RovingItemProps {
        RovingItemProps {
            is_tabbable: !self.items.is_empty() && index == self.current,
        }
    }

    /// Syncs the tab stop to an item that gained focus by other means
    /// (typically pointer). Out-of-range indices are ignored.
    pub fn notify_focus(&mut self, index: usize) {
        if index < self.items.len() {
            self.current = index;
        }
    }

    /// Handles one key event. Returns whether it was consumed.
    ///
    /// Modified chords (Shift/Ctrl/Alt/Meta + arrow) are left for the
    /// host; lists often layer selection shortcuts on top of navigation.
    pub fn handle_key(&mut self, tree: &mut FocusTree, event: &KeyEvent) -> bool {
        if event.event_type != KeyEventType::KeyDown
            || event.modifiers.any()
            || self.items.is_empty()
        {
            return false;
        }
        let len = self.items.len();

        let (next_key, previous_key) = match self.orientation {
            Orientation::Horizontal => (KeyCode::ArrowRight, KeyCode::ArrowLeft),
            Orientation::Vertical => (KeyCode::ArrowDown, KeyCode::ArrowUp),
        };

        let target = if event.code == next_key {
            (self.current + 1) % len
        } else if event.code == previous_key {
            (self.current + len - 1) % len
        } else if event.code == KeyCode::Home {
            0
        } else if event.code == KeyCode::End {
            len - 1
        } else {
            return false;
        };

        self.current = target;
        tree.request_focus(self.items[target]);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(n: usize, orientation: Orientation) -> (FocusTree, RovingTabindex) {
        let mut tree = FocusTree::new();
        let root = tree.insert(None, false);
        let items: Vec<_> = (0..n).map(|_| tree.insert(Some(root), true)).collect();
        (tree, RovingTabindex::new(items, orientation))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::key_down(code)
    }

    #[test]
    fn exactly_one_item_is_tabbable() {
        let (_, roving) = list(3, Orientation::Horizontal);
        let tabbable: Vec<_> = (0..3).filter(|i| roving.item_props(*i).is_tabbable).collect();
        assert_eq!(tabbable, vec![0]);
    }

    #[test]
    fn advance_wraps_past_the_end() {
        let (mut tree, mut roving) = list(3, Orientation::Horizontal);

        assert!(roving.handle_key(&mut tree, &key(KeyCode::ArrowRight)));
        assert!(roving.handle_key(&mut tree, &key(KeyCode::ArrowRight)));
        assert_eq!(roving.current_index(), Some(2));

        assert!(roving.handle_key(&mut tree, &key(KeyCode::ArrowRight)));
        assert_eq!(roving.current_index(), Some(0));
    }

    #[test]
    fn retreat_wraps_to_the_last_item() {
        let (mut tree, mut roving) = list(3, Orientation::Vertical);

        assert!(roving.handle_key(&mut tree, &key(KeyCode::ArrowUp)));
        assert_eq!(roving.current_index(), Some(2));
        assert!(roving.item_props(2).is_tabbable);
        assert!(!roving.item_props(0).is_tabbable);
    }

    #[test]
    fn home_and_end_jump() {
        let (mut tree, mut roving) = list(4, Orientation::Horizontal);

        assert!(roving.handle_key(&mut tree, &key(KeyCode::End)));
        assert_eq!(roving.current_index(), Some(3));
        assert!(roving.handle_key(&mut tree, &key(KeyCode::Home)));
        assert_eq!(roving.current_index(), Some(0));
    }

    #[test]
    fn navigation_focuses_the_new_item() {
        let (mut tree, mut roving) = list(2, Orientation::Vertical);

        assert!(roving.handle_key(&mut tree, &key(KeyCode::ArrowDown)));
        assert_eq!(tree.focused(), roving.item(1));
    }

    #[test]
    fn orthogonal_arrows_are_ignored() {
        let (mut tree, mut roving) = list(3, Orientation::Horizontal);

        assert!(!roving.handle_key(&mut tree, &key(KeyCode::ArrowDown)));
        assert_eq!(roving.current_index(), Some(0));
    }

    #[test]
    fn modified_arrow_chords_are_left_for_the_host() {
        use tactus_core::Modifiers;

        let (mut tree, mut roving) = list(3, Orientation::Horizontal);

        let shift_right = key(KeyCode::ArrowRight).with_modifiers(Modifiers::SHIFT);
        assert!(!roving.handle_key(&mut tree, &shift_right));

        let ctrl_right = key(KeyCode::ArrowRight).with_modifiers(Modifiers {
            ctrl: true,
            ..Modifiers::NONE
        });
        assert!(!roving.handle_key(&mut tree, &ctrl_right));

        assert_eq!(roving.current_index(), Some(0));
        assert!(tree.focused().is_none());
    }

    #[test]
    fn notify_focus_syncs_pointer_focus() {
        let (mut tree, mut roving) = list(3, Orientation::Horizontal);

        roving.notify_focus(2);
        assert!(roving.item_props(2).is_tabbable);

        // Arrow navigation continues from the synced position.
        assert!(roving.handle_key(&mut tree, &key(KeyCode::ArrowRight)));
        assert_eq!(roving.current_index(), Some(0));
    }

    #[test]
    fn empty_list_is_all_noops() {
        let (mut tree, mut roving) = list(0, Orientation::Horizontal);

        assert!(roving.is_empty());
        assert_eq!(roving.current_index(), None);
        assert!(!roving.item_props(0).is_tabbable);
        assert!(!roving.handle_key(&mut tree, &key(KeyCode::ArrowRight)));
        roving.notify_focus(5);
        assert_eq!(roving.current_index(), None);
    }
}
