//! The focus stack: what held focus before each trap began.
//!
//! One instance per application, passed by reference to every trap.
//! Push and pop are strictly paired with trap activation/deactivation;
//! pop never fabricates a frame and never invents a fallback element.

use smallvec::SmallVec;

use crate::tree::{FocusId, FocusTree};

/// Focus captured immediately before a trap activated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FocusFrame {
    pub previous: Option<FocusId>,
}

/// LIFO stack of [`FocusFrame`]s.
#[derive(Default)]
pub struct FocusStack {
    frames: SmallVec<[FocusFrame; 4]>,
}

impl FocusStack {
    pub fn new() -> Self {
        Self {
            frames: SmallVec::new(),
        }
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Captures the currently focused node onto the stack.
    pub fn push(&mut self, tree: &FocusTree) {
        self.frames.push(FocusFrame {
            previous: tree.focused(),
        });
    }

    /// Removes the top frame and restores focus to its captured node if
    /// that node is still attached. A detached node, an empty capture, or
    /// an empty stack leaves focus unchanged. Returns whether focus moved.
    pub fn pop(&mut self, tree: &mut FocusTree) -> bool {
        let Some(frame) = self.frames.pop() else {
            return false;
        };
        Self::restore(frame, tree)
    }

    /// Jumps straight to the very first captured frame, dropping every
    /// nested frame. Intended for provider-level cleanup when a whole UI
    /// subtree unwinds at once.
    pub fn restore_to_root(&mut self, tree: &mut FocusTree) -> bool {
        if self.frames.is_empty() {
            return false;
        }
        let root = self.frames[0];
        self.frames.clear();
        Self::restore(root, tree)
    }

    fn restore(frame: FocusFrame, tree: &mut FocusTree) -> bool {
        match frame.previous {
            Some(previous) if tree.is_attached(previous) => tree.request_focus(previous),
            _ => false,
        }
    }
}
