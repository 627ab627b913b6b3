//! Shared leaf types and the timer service for the Tactus interaction core.
//!
//! Everything here is platform-independent: geometry, the normalized
//! pointer/key event model, and a host-pumped timer queue. Higher crates
//! (`tactus-gesture`, `tactus-focus`) build their state machines on these
//! types without ever touching a windowing system.

pub mod geometry;
pub mod key;
pub mod pointer;
pub mod timer;

pub use geometry::Point;
pub use key::{KeyCode, KeyEvent, KeyEventType, Modifiers};
pub use pointer::{PointerEvent, PointerEventKind, PointerId, PointerType};
pub use timer::{
    advance_to, shared_timer_queue, HostClock, SharedTimerQueue, TimerHandle, TimerQueue,
};

pub mod prelude {
    pub use crate::geometry::Point;
    pub use crate::key::{KeyCode, KeyEvent, KeyEventType, Modifiers};
    pub use crate::pointer::{PointerEvent, PointerEventKind, PointerId, PointerType};
    pub use crate::timer::{
        advance_to, shared_timer_queue, HostClock, SharedTimerQueue, TimerHandle, TimerQueue,
    };
}
