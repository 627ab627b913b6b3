//! Input robot: scripted pointer sequences on a simulated clock.

use tactus_core::timer::advance_to;
use tactus_core::{Point, PointerEvent, PointerEventKind, PointerId, SharedTimerQueue};
use tactus_gesture::GestureRecognizer;

/// Drives a [`GestureRecognizer`] with synthesized pointer events while
/// pumping the shared timer queue.
///
/// The robot's clock only moves through [`InputRobot::advance_ms`], so a
/// test controls exactly when the long-press and clear timers fire.
pub struct InputRobot {
    timers: SharedTimerQueue,
    now_ms: u64,
    pointer_id: PointerId,
}

impl InputRobot {
    /// The robot must share `timers` with every component under test.
    pub fn new(timers: SharedTimerQueue) -> Self {
        Self {
            timers,
            now_ms: 0,
            pointer_id: 1,
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn timers(&self) -> &SharedTimerQueue {
        &self.timers
    }

    /// Uses a different pointer id for subsequently synthesized events,
    /// for multi-contact scenarios.
    pub fn with_pointer_id(&mut self, id: PointerId) -> &mut Self {
        self.pointer_id = id;
        self
    }

    /// Moves the clock forward, firing every timer that comes due.
    pub fn advance_ms(&mut self, ms: u64) -> &mut Self {
        self.now_ms += ms;
        advance_to(&self.timers, self.now_ms);
        self
    }

    fn event(&self, kind: PointerEventKind, x: f32, y: f32) -> PointerEvent {
        PointerEvent::new(self.pointer_id, kind, Point::new(x, y), self.now_ms)
    }

    pub fn press(&mut self, recognizer: &mut GestureRecognizer, x: f32, y: f32) -> &mut Self {
        recognizer.on_pointer_event(&self.event(PointerEventKind::Down, x, y));
        self
    }

    pub fn move_to(&mut self, recognizer: &mut GestureRecognizer, x: f32, y: f32) -> &mut Self {
        recognizer.on_pointer_event(&self.event(PointerEventKind::Move, x, y));
        self
    }

    pub fn release(&mut self, recognizer: &mut GestureRecognizer, x: f32, y: f32) -> &mut Self {
        recognizer.on_pointer_event(&self.event(PointerEventKind::Up, x, y));
        self
    }

    pub fn cancel(&mut self, recognizer: &mut GestureRecognizer, x: f32, y: f32) -> &mut Self {
        recognizer.on_pointer_event(&self.event(PointerEventKind::Cancel, x, y));
        self
    }

    /// A quick press-release at one spot.
    pub fn tap(&mut self, recognizer: &mut GestureRecognizer, x: f32, y: f32) -> &mut Self {
        self.press(recognizer, x, y);
        self.advance_ms(40);
        self.release(recognizer, x, y)
    }

    /// Press, drag in a few steps, release. `duration_ms` is split across
    /// the movement.
    pub fn swipe(
        &mut self,
        recognizer: &mut GestureRecognizer,
        from: (f32, f32),
        to: (f32, f32),
        duration_ms: u64,
    ) -> &mut Self {
        const STEPS: u64 = 4;
        self.press(recognizer, from.0, from.1);
        for step in 1..=STEPS {
            self.advance_ms(duration_ms / STEPS);
            let t = step as f32 / STEPS as f32;
            let x = from.0 + (to.0 - from.0) * t;
            let y = from.1 + (to.1 - from.1) * t;
            self.move_to(recognizer, x, y);
        }
        self.release(recognizer, to.0, to.1)
    }

    /// Holds the pointer down long enough for the recognizer's long-press
    /// delay to elapse, then releases.
    pub fn long_press(&mut self, recognizer: &mut GestureRecognizer, x: f32, y: f32) -> &mut Self {
        let delay = recognizer.config().long_press_delay_ms;
        self.press(recognizer, x, y);
        self.advance_ms(delay);
        self.release(recognizer, x, y)
    }
}
