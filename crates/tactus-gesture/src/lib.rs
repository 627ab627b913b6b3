//! Pointer gesture recognition for the Tactus interaction core.
//!
//! One [`GestureRecognizer`] binds to one interactive surface and turns a
//! raw pointer-down/move/up stream into classified gestures: directional
//! swipes, long-press, and double-tap. A [`PointerRouter`] keys recognizers
//! by surface for hosts with many touch targets.

pub mod config;
pub mod recognizer;
pub mod router;

pub use config::GestureConfig;
pub use recognizer::{GestureHandlers, GestureRecognizer, PointerSample};
pub use router::{PointerRouter, SurfaceId};

pub mod prelude {
    pub use crate::config::GestureConfig;
    pub use crate::recognizer::{GestureHandlers, GestureRecognizer, PointerSample};
    pub use crate::router::{PointerRouter, SurfaceId};
}
