//! Shared gesture constants for consistent touch/pointer handling.
//!
//! These values are in logical pixels and milliseconds. They match common
//! mobile platform conventions; very high-density touch screens may want
//! to scale the pixel values by the device's DPI factor.

/// Fraction of the gesture surface's width a drag must travel before it
/// commits as a swipe.
///
/// A release at exactly this distance snaps back: commitment requires
/// strictly exceeding the threshold, so the boundary case always returns
/// the card to origin rather than ambiguously firing a swipe.
pub const SWIPE_THRESHOLD_FRACTION: f32 = 0.25;

/// Window after a gesture start within which a second start reclassifies
/// as a double tap.
///
/// Strictly-less-than comparison: two starts exactly this far apart are
/// two independent taps. 300ms is the widely used platform default.
pub const DOUBLE_TAP_WINDOW_MILLIS: u64 = 300;

/// Duration of the continued-motion exit animation after a committed
/// swipe, carrying the surface off-screen in the swipe direction.
pub const SWIPE_EXIT_DURATION_MILLIS: u64 = 200;
