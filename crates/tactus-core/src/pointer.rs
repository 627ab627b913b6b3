//! Normalized pointer input events.
//!
//! Platform integrations translate their raw touch/mouse events into this
//! model before handing them to a recognizer. Timestamps are `u64`
//! milliseconds of host uptime; the interaction core never reads a wall
//! clock of its own.

use crate::geometry::Point;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerType {
    Mouse,
    Touch,
    Stylus,
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A single normalized pointer event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    /// Host uptime in milliseconds at event delivery.
    pub uptime_ms: u64,
    pub pointer_type: PointerType,
}

impl PointerEvent {
    pub fn new(id: PointerId, kind: PointerEventKind, position: Point, uptime_ms: u64) -> Self {
        Self {
            id,
            kind,
            position,
            uptime_ms,
            pointer_type: PointerType::Touch,
        }
    }

    pub fn with_pointer_type(mut self, pointer_type: PointerType) -> Self {
        self.pointer_type = pointer_type;
        self
    }
}
