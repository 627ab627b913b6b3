//! The swipe / long-press / double-tap state machine.
//!
//! A recognizer is a plain object: the host constructs it against a shared
//! timer queue, feeds it normalized [`PointerEvent`]s, and calls
//! [`GestureRecognizer::detach`] when the surface goes away. The recognizer
//! owns its long-press timer handle and cancels it on every exit path
//! (pointer-up, pointer-cancel, detach), so no callback ever fires after
//! teardown.
//!
//! Only the primary contact is tracked: the session pins the pointer id of
//! the first down and ignores every other id until that contact ends.
//! Malformed or out-of-order events (a move or up with no session, a second
//! down) are ignored silently; nothing here panics or returns errors.

use std::cell::Cell;
use std::rc::Rc;

use tactus_core::{Point, PointerEvent, PointerEventKind, PointerId, SharedTimerQueue, TimerHandle};

use crate::config::GestureConfig;

/// A captured pointer position and time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub position: Point,
    pub uptime_ms: u64,
}

/// Optional gesture callbacks for one surface.
///
/// Unset callbacks simply mean the surface does not care about that
/// gesture; classification still runs so session state stays consistent.
#[derive(Clone, Default)]
pub struct GestureHandlers {
    on_swipe_left: Option<Rc<dyn Fn(f32)>>,
    on_swipe_right: Option<Rc<dyn Fn(f32)>>,
    on_swipe_up: Option<Rc<dyn Fn(f32)>>,
    on_swipe_down: Option<Rc<dyn Fn(f32)>>,
    on_long_press: Option<Rc<dyn Fn()>>,
    on_double_tap: Option<Rc<dyn Fn()>>,
}

impl GestureHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swipe callbacks receive the dominant-axis distance in pixels.
    pub fn on_swipe_left<F: Fn(f32) + 'static>(mut self, f: F) -> Self {
        self.on_swipe_left = Some(Rc::new(f));
        self
    }

    pub fn on_swipe_right<F: Fn(f32) + 'static>(mut self, f: F) -> Self {
        self.on_swipe_right = Some(Rc::new(f));
        self
    }

    pub fn on_swipe_up<F: Fn(f32) + 'static>(mut self, f: F) -> Self {
        self.on_swipe_up = Some(Rc::new(f));
        self
    }

    pub fn on_swipe_down<F: Fn(f32) + 'static>(mut self, f: F) -> Self {
        self.on_swipe_down = Some(Rc::new(f));
        self
    }

    pub fn on_long_press<F: Fn() + 'static>(mut self, f: F) -> Self {
        self.on_long_press = Some(Rc::new(f));
        self
    }

    pub fn on_double_tap<F: Fn() + 'static>(mut self, f: F) -> Self {
        self.on_double_tap = Some(Rc::new(f));
        self
    }
}

impl std::fmt::Debug for GestureHandlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureHandlers")
            .field("has_swipe_left", &self.on_swipe_left.is_some())
            .field("has_swipe_right", &self.on_swipe_right.is_some())
            .field("has_swipe_up", &self.on_swipe_up.is_some())
            .field("has_swipe_down", &self.on_swipe_down.is_some())
            .field("has_long_press", &self.on_long_press.is_some())
            .field("has_double_tap", &self.on_double_tap.is_some())
            .finish()
    }
}

/// Per-contact mutable state, created on pointer-down and cleared on
/// pointer-up, pointer-cancel, or detach.
struct GestureSession {
    pointer_id: PointerId,
    start: PointerSample,
    long_press_timer: Option<TimerHandle>,
    /// Shared with the timer callback; set when the long-press fires so the
    /// later pointer-up skips tap/swipe classification.
    long_press_fired: Rc<Cell<bool>>,
}

/// Gesture recognizer bound to one interactive surface.
pub struct GestureRecognizer {
    timers: SharedTimerQueue,
    handlers: GestureHandlers,
    config: GestureConfig,
    session: Option<GestureSession>,
    /// Uptime of the last release that ended as a plain tap; 0 when no tap
    /// is pending a double-tap partner.
    last_tap_end_ms: u64,
    attached: bool,
}

impl GestureRecognizer {
    pub fn new(timers: SharedTimerQueue, handlers: GestureHandlers, config: GestureConfig) -> Self {
        Self {
            timers,
            handlers,
            config,
            session: None,
            last_tap_end_ms: 0,
            attached: true,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// True while a contact is being tracked.
    pub fn has_active_session(&self) -> bool {
        self.session.is_some()
    }

    /// Feeds one normalized pointer event through the state machine.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) {
        if !self.attached {
            return;
        }
        match event.kind {
            PointerEventKind::Down => self.on_down(event),
            PointerEventKind::Move => self.on_move(event),
            PointerEventKind::Up => self.on_up(event),
            PointerEventKind::Cancel => self.on_cancel(event),
        }
    }

    /// Unbinds from the surface: cancels any live timer, clears the
    /// session, and ignores all further events. No callbacks fire.
    pub fn detach(&mut self) {
        self.attached = false;
        self.clear_session();
    }

    fn on_down(&mut self, event: &PointerEvent) {
        if self.session.is_some() {
            // Secondary contact or duplicate down; primary stays tracked.
            return;
        }

        // The timer runs even without an `on_long_press` handler: a fired
        // long-press must still suppress tap/swipe on the later release.
        let long_press_fired = Rc::new(Cell::new(false));
        let fired = long_press_fired.clone();
        let handler = self.handlers.on_long_press.clone();
        let timer = self
            .timers
            .borrow_mut()
            .schedule(self.config.long_press_delay_ms, move || {
                fired.set(true);
                if let Some(handler) = &handler {
                    handler();
                }
            });

        self.session = Some(GestureSession {
            pointer_id: event.id,
            start: PointerSample {
                position: event.position,
                uptime_ms: event.uptime_ms,
            },
            long_press_timer: Some(timer),
            long_press_fired,
        });
    }

    fn on_move(&mut self, event: &PointerEvent) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.pointer_id != event.id {
            return;
        }
        // Movement past the jitter threshold voids the long-press and
        // nothing else; swipe/tap classification still happens on release.
        if session.long_press_timer.is_some()
            && event.position.distance_to(session.start.position) > self.config.jitter_threshold_px
        {
            if let Some(timer) = session.long_press_timer.take() {
                self.timers.borrow_mut().cancel(timer);
            }
        }
    }

    fn on_up(&mut self, event: &PointerEvent) {
        let Some(session) = self.session.take() else {
            return;
        };
        if session.pointer_id != event.id {
            self.session = Some(session);
            return;
        }
        if let Some(timer) = session.long_press_timer {
            self.timers.borrow_mut().cancel(timer);
        }

        // First match wins: long-press already consumed the gesture, then
        // double-tap, then swipe, else an unclassified tap.
        if session.long_press_fired.get() {
            return;
        }

        let now = event.uptime_ms;
        if self.last_tap_end_ms != 0
            && now.saturating_sub(self.last_tap_end_ms) < self.config.double_tap_window_ms
        {
            // Reset so a third tap starts over instead of chaining.
            self.last_tap_end_ms = 0;
            log::trace!("gesture classified: double-tap");
            if let Some(handler) = &self.handlers.on_double_tap {
                handler();
            }
            return;
        }
        self.last_tap_end_ms = now;

        let delta = event.position.delta(session.start.position);
        let (dx, dy) = (delta.x, delta.y);
        if dx.abs().max(dy.abs()) < self.config.swipe_threshold_px {
            return; // unclassified tap
        }

        if dx.abs() > dy.abs() {
            let distance = dx.abs();
            if dx > 0.0 {
                log::trace!("gesture classified: swipe right ({distance} px)");
                if let Some(handler) = &self.handlers.on_swipe_right {
                    handler(distance);
                }
            } else {
                log::trace!("gesture classified: swipe left ({distance} px)");
                if let Some(handler) = &self.handlers.on_swipe_left {
                    handler(distance);
                }
            }
        } else {
            let distance = dy.abs();
            if dy > 0.0 {
                log::trace!("gesture classified: swipe down ({distance} px)");
                if let Some(handler) = &self.handlers.on_swipe_down {
                    handler(distance);
                }
            } else {
                log::trace!("gesture classified: swipe up ({distance} px)");
                if let Some(handler) = &self.handlers.on_swipe_up {
                    handler(distance);
                }
            }
        }
    }

    fn on_cancel(&mut self, event: &PointerEvent) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        if session.pointer_id != event.id {
            return;
        }
        self.clear_session();
    }

    fn clear_session(&mut self) {
        if let Some(session) = self.session.take() {
            if let Some(timer) = session.long_press_timer {
                self.timers.borrow_mut().cancel(timer);
            }
        }
    }
}

impl Drop for GestureRecognizer {
    fn drop(&mut self) {
        self.clear_session();
    }
}
