//! Surface-keyed pointer routing.
//!
//! Hosts with many touch targets register one recognizer per surface and
//! forward each platform event to the surface it hit-tested. Dispatching
//! to an unknown or detached surface is a silent no-op.

use std::collections::HashMap;

use tactus_core::{PointerEvent, SharedTimerQueue};

use crate::config::GestureConfig;
use crate::recognizer::{GestureHandlers, GestureRecognizer};

/// Identifier for one attached surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceId(u64);

impl SurfaceId {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Routes pointer events to per-surface recognizers.
pub struct PointerRouter {
    timers: SharedTimerQueue,
    next_surface: u64,
    surfaces: HashMap<SurfaceId, GestureRecognizer>,
}

impl PointerRouter {
    pub fn new(timers: SharedTimerQueue) -> Self {
        Self {
            timers,
            next_surface: 1,
            surfaces: HashMap::new(),
        }
    }

    /// Binds a recognizer to a fresh surface id.
    pub fn attach(&mut self, handlers: GestureHandlers, config: GestureConfig) -> SurfaceId {
        let id = SurfaceId(self.next_surface);
        self.next_surface += 1;
        self.surfaces.insert(
            id,
            GestureRecognizer::new(self.timers.clone(), handlers, config),
        );
        id
    }

    /// Detaches a surface, cancelling its timers. Returns `false` if the
    /// surface was already gone.
    pub fn detach(&mut self, id: SurfaceId) -> bool {
        match self.surfaces.remove(&id) {
            Some(mut recognizer) => {
                recognizer.detach();
                true
            }
            None => false,
        }
    }

    /// Forwards one event to the recognizer bound to `id`.
    pub fn dispatch(&mut self, id: SurfaceId, event: &PointerEvent) {
        if let Some(recognizer) = self.surfaces.get_mut(&id) {
            recognizer.on_pointer_event(event);
        }
    }

    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    pub fn recognizer(&self, id: SurfaceId) -> Option<&GestureRecognizer> {
        self.surfaces.get(&id)
    }
}
