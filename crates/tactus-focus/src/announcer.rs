//! Live-region announcer: transient text for assistive technology.
//!
//! One announcer serves the whole application. Its sink is created lazily
//! on the first announcement and holds the current message and priority;
//! a host bridges the sink to its platform's live region. Each
//! announcement schedules a clear for [`CLEAR_DELAY_MS`] later, and always
//! cancels the previously scheduled clear first. Without that
//! cancellation, two rapid announcements would have the second message
//! erased prematurely by the first's timer.

use std::cell::RefCell;
use std::rc::Rc;

use tactus_core::{SharedTimerQueue, TimerHandle};

/// How long an announcement stays in the sink before clearing.
pub const CLEAR_DELAY_MS: u64 = 1_000;

/// How urgently assistive technology should deliver a message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Priority {
    /// Delivered at the next graceful opportunity.
    #[default]
    Polite,
    /// Interrupts the user's current activity.
    Assertive,
}

#[derive(Default)]
struct Sink {
    message: String,
    priority: Priority,
}

/// The shared screen-reader announcement sink.
pub struct LiveAnnouncer {
    timers: SharedTimerQueue,
    sink: Rc<RefCell<Option<Sink>>>,
    /// At most one clear is ever pending.
    clear_timer: Option<TimerHandle>,
}

impl LiveAnnouncer {
    pub fn new(timers: SharedTimerQueue) -> Self {
        Self {
            timers,
            sink: Rc::new(RefCell::new(None)),
            clear_timer: None,
        }
    }

    /// Whether the lazy sink has been created yet.
    pub fn has_sink(&self) -> bool {
        self.sink.borrow().is_some()
    }

    /// The sink's current text; empty once cleared or before first use.
    pub fn message(&self) -> String {
        self.sink
            .borrow()
            .as_ref()
            .map(|sink| sink.message.clone())
            .unwrap_or_default()
    }

    /// The sink's current priority.
    pub fn priority(&self) -> Priority {
        self.sink
            .borrow()
            .as_ref()
            .map(|sink| sink.priority)
            .unwrap_or_default()
    }

    /// Publishes `message` with the given priority and schedules the clear.
    pub fn announce(&mut self, message: &str, priority: Priority) {
        if let Some(timer) = self.clear_timer.take() {
            self.timers.borrow_mut().cancel(timer);
        }

        {
            let mut sink = self.sink.borrow_mut();
            let sink = sink.get_or_insert_with(Sink::default);
            sink.message = message.to_owned();
            sink.priority = priority;
        }

        let sink = self.sink.clone();
        self.clear_timer = Some(self.timers.borrow_mut().schedule(CLEAR_DELAY_MS, move || {
            if let Some(sink) = sink.borrow_mut().as_mut() {
                sink.message.clear();
            }
        }));
    }

    /// [`announce`](Self::announce) with the default polite priority.
    pub fn announce_polite(&mut self, message: &str) {
        self.announce(message, Priority::Polite);
    }
}

impl Drop for LiveAnnouncer {
    fn drop(&mut self) {
        if let Some(timer) = self.clear_timer.take() {
            self.timers.borrow_mut().cancel(timer);
        }
    }
}
