//! The focus trap: Tab/Shift+Tab confinement inside a container.
//!
//! Activation captures the prior focus on the shared [`FocusStack`] and
//! focuses the container's first tabbable; deactivation pops the stack.
//! Tabbables are re-queried on every keystroke so elements attached or
//! detached while the trap is live are handled correctly.

use tactus_core::{KeyEvent, KeyEventType};

use crate::stack::FocusStack;
use crate::tree::{FocusId, FocusTree};

/// An active trap over one container.
pub struct FocusTrap {
    container: FocusId,
}

impl FocusTrap {
    /// Activates a trap over `container`.
    ///
    /// Returns `None` without touching focus or the stack when the
    /// container has no tabbable descendants; that state silently breaks
    /// keyboard accessibility, so it is also reported through `log::warn!`.
    pub fn activate(
        tree: &mut FocusTree,
        stack: &mut FocusStack,
        container: FocusId,
    ) -> Option<FocusTrap> {
        let tabbables = tree.tabbables(container);
        let Some(first) = tabbables.first().copied() else {
            log::warn!(
                "focus trap activation skipped: container {:?} has no tabbable descendants",
                container
            );
            return None;
        };

        stack.push(tree);
        tree.request_focus(first);
        Some(FocusTrap { container })
    }

    pub fn container(&self) -> FocusId {
        self.container
    }

    /// Handles one key event while the trap is active. Returns whether the
    /// event was consumed.
    ///
    /// Tab on the last tabbable wraps to the first; Shift+Tab on the first
    /// wraps to the last; in between, focus moves to the adjacent
    /// tabbable. If focus somehow left the container, Tab re-enters at the
    /// matching edge.
    pub fn handle_key(&self, tree: &mut FocusTree, event: &KeyEvent) -> bool {
        if event.event_type != KeyEventType::KeyDown {
            return false;
        }
        let forward = event.is_tab_forward();
        if !forward && !event.is_tab_backward() {
            return false;
        }

        let tabbables = tree.tabbables(self.container);
        if tabbables.is_empty() {
            return false;
        }
        let len = tabbables.len();

        let position = tree
            .focused()
            .and_then(|focused| tabbables.iter().position(|id| *id == focused));
        let next = match position {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            // Focus escaped the container: re-enter at the edge the key
            // direction points at.
            None if forward => 0,
            None => len - 1,
        };

        tree.request_focus(tabbables[next]);
        true
    }

    /// Deactivates the trap, restoring prior focus via the stack.
    pub fn deactivate(self, tree: &mut FocusTree, stack: &mut FocusStack) {
        stack.pop(tree);
    }
}
