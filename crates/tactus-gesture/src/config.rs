//! Gesture classification thresholds.
//!
//! All distances are in logical pixels. For very high-density touch
//! screens, consider scaling the pixel thresholds by the device's DPI
//! factor before constructing the config; the recognizer itself is
//! density-agnostic.

/// Minimum dominant-axis displacement for a release to classify as a swipe.
///
/// Below this the gesture is a tap. 50 px is deliberately much larger than
/// [`JITTER_THRESHOLD_PX`]: a gesture can cancel its long-press by moving
/// and still end as an unclassified tap.
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Maximum displacement tolerated before movement voids a long-press.
///
/// Fingers drift while holding; 10 px absorbs that drift on typical touch
/// screens while still cancelling the long-press once a drag clearly began.
/// Movement past this threshold affects only the long-press timer, never
/// swipe/tap classification.
pub const JITTER_THRESHOLD_PX: f32 = 10.0;

/// How long a pointer must stay down (within the jitter threshold) before
/// the long-press fires.
pub const LONG_PRESS_DELAY_MS: u64 = 500;

/// Maximum gap between two releases for the second to count as a double-tap.
pub const DOUBLE_TAP_WINDOW_MS: u64 = 300;

/// Thresholds for one recognizer instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    pub swipe_threshold_px: f32,
    pub jitter_threshold_px: f32,
    pub long_press_delay_ms: u64,
    pub double_tap_window_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
            jitter_threshold_px: JITTER_THRESHOLD_PX,
            long_press_delay_ms: LONG_PRESS_DELAY_MS,
            double_tap_window_ms: DOUBLE_TAP_WINDOW_MS,
        }
    }
}
