//! Host-pumped timer service.
//!
//! The interaction core never spawns threads for its delays (long-press,
//! announcement clearing). Instead every pending delay is a deadline entry
//! in a [`TimerQueue`] and the host pumps the queue from its event loop
//! with the current uptime. Tests pump it with a simulated clock, which
//! makes every timing property exact.
//!
//! Entries are fired in deadline order, ties in scheduling order. The
//! queue's notion of "now" advances to each fired deadline before the
//! callback runs, so a callback that reads the clock sees its own
//! deadline, not the pump target.

use std::cell::RefCell;
use std::rc::Rc;

/// Handle to a scheduled timer, used for cancellation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

struct TimerEntry {
    handle: TimerHandle,
    deadline_ms: u64,
    seq: u64,
    callback: Box<dyn FnOnce()>,
}

/// Deadline-ordered timer queue.
///
/// Single-threaded; shared between components as a [`SharedTimerQueue`].
/// Every component that schedules a timer keeps its [`TimerHandle`] and
/// cancels it on its teardown path, so no callback fires after teardown.
pub struct TimerQueue {
    now_ms: u64,
    next_handle: u64,
    next_seq: u64,
    entries: Vec<TimerEntry>,
}

impl Default for TimerQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerQueue {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_handle: 1,
            next_seq: 0,
            entries: Vec::new(),
        }
    }

    /// Current queue time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of pending entries.
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Schedules `callback` to fire `delay_ms` from the queue's current time.
    pub fn schedule<F>(&mut self, delay_ms: u64, callback: F) -> TimerHandle
    where
        F: FnOnce() + 'static,
    {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(TimerEntry {
            handle,
            deadline_ms: self.now_ms + delay_ms,
            seq,
            callback: Box::new(callback),
        });
        handle
    }

    /// Cancels a pending timer. Returns `false` if it already fired or was
    /// cancelled; cancelling a dead handle is a harmless no-op.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.handle != handle);
        self.entries.len() != before
    }

    /// Drops all pending entries without firing them.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Removes and returns the next entry due at or before `now_ms`,
    /// advancing the queue clock to its deadline. Used by the shared pump.
    fn take_next_due(&mut self, now_ms: u64) -> Option<Box<dyn FnOnce()>> {
        let due = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.deadline_ms <= now_ms)
            .min_by_key(|(_, e)| (e.deadline_ms, e.seq))
            .map(|(i, _)| i)?;
        let entry = self.entries.swap_remove(due);
        if entry.deadline_ms > self.now_ms {
            self.now_ms = entry.deadline_ms;
        }
        log::trace!("timer {:?} fired at {} ms", entry.handle, entry.deadline_ms);
        Some(entry.callback)
    }

    fn set_now(&mut self, now_ms: u64) {
        if now_ms > self.now_ms {
            self.now_ms = now_ms;
        }
    }
}

/// The shared, single-threaded form components hold.
pub type SharedTimerQueue = Rc<RefCell<TimerQueue>>;

/// Creates a fresh shared timer queue.
pub fn shared_timer_queue() -> SharedTimerQueue {
    Rc::new(RefCell::new(TimerQueue::new()))
}

/// Pumps the queue up to `now_ms`, firing every due entry.
///
/// Callbacks run with the queue unborrowed, so they may schedule or cancel
/// further timers through their own clone of the shared queue.
pub fn advance_to(queue: &SharedTimerQueue, now_ms: u64) {
    loop {
        let callback = queue.borrow_mut().take_next_due(now_ms);
        match callback {
            Some(callback) => callback(),
            None => break,
        }
    }
    queue.borrow_mut().set_now(now_ms);
}

/// Real-host clock producing the millisecond uptimes the event model uses.
///
/// Backed by `web-time` so the same code runs on desktop and WASM hosts.
pub struct HostClock {
    origin: web_time::Instant,
}

impl Default for HostClock {
    fn default() -> Self {
        Self::new()
    }
}

impl HostClock {
    pub fn new() -> Self {
        Self {
            origin: web_time::Instant::now(),
        }
    }

    /// Milliseconds elapsed since this clock was created.
    pub fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}
