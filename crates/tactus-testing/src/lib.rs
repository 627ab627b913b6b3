//! Testing utilities for the Tactus interaction core.
//!
//! The [`InputRobot`] owns a simulated clock, pumps the shared timer
//! queue, and synthesizes pointer/key sequences, so timing-sensitive
//! properties (long-press, double-tap windows, announcement clearing)
//! are tested exactly rather than with sleeps.

pub mod keys;
pub mod robot;

pub use robot::InputRobot;

pub mod prelude {
    pub use crate::keys;
    pub use crate::robot::InputRobot;
}
