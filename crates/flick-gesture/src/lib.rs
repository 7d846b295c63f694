//! Gesture layer for Flick: drag-session tracking, swipe classification,
//! and double-tap detection over the animation and runtime layers.

pub mod constants;
pub mod events;
pub mod tracker;

pub use constants::{
    DOUBLE_TAP_WINDOW_MILLIS, SWIPE_EXIT_DURATION_MILLIS, SWIPE_THRESHOLD_FRACTION,
};
pub use events::{classify, GestureEvent, SwipeOutcome};
pub use tracker::{SwipeConfig, SwipeTracker};
