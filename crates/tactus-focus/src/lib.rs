//! Keyboard focus management for the Tactus interaction core.
//!
//! Four cooperating primitives, all running on the single UI thread:
//!
//! - [`FocusTree`] — the registry of attached, focusable nodes. This is
//!   the platform-neutral stand-in for "the document": it knows which
//!   nodes exist, their document order, and which one holds focus.
//! - [`FocusStack`] — one per application; records what held focus before
//!   each trap activation so closing a dialog restores focus correctly.
//! - [`FocusTrap`] — per-container Tab/Shift+Tab confinement.
//! - [`RovingTabindex`] — one-tab-stop-per-list arrow-key navigation.
//!
//! Plus [`LiveAnnouncer`], the shared screen-reader announcement sink.
//!
//! The stack is passed by reference to every trap rather than living in
//! ambient state, keeping ownership and lifetime explicit and testable.

pub mod announcer;
pub mod roving;
pub mod stack;
pub mod trap;
pub mod tree;


pub use announcer::{LiveAnnouncer, Priority, CLEAR_DELAY_MS};
pub use roving::{Orientation, RovingItemProps, RovingTabindex};
pub use stack::{FocusFrame, FocusStack};
pub use trap::FocusTrap;
pub use tree::{FocusId, FocusTree, Tabbables};

pub mod prelude {
    pub use crate::announcer::{LiveAnnouncer, Priority, CLEAR_DELAY_MS};
    pub use crate::roving::{Orientation, RovingItemProps, RovingTabindex};
    pub use crate::stack::{FocusFrame, FocusStack};
    pub use crate::trap::FocusTrap;
    pub use crate::tree::{FocusId, FocusTree, Tabbables};
}
