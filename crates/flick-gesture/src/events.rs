/// Classification of a completed drag session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Final horizontal offset strictly below the negative threshold.
    CommittedLeft,
    /// Final horizontal offset strictly above the positive threshold.
    CommittedRight,
    /// Everything else, including a release exactly at the threshold.
    SnappedBack,
}

/// Discrete gesture decisions delivered to the owner's handler.
///
/// One tagged enum instead of a bundle of optional callbacks: owners match
/// on what they care about and tests assert on the event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEvent {
    /// Committed left swipe; fired after the exit animation completes.
    SwipeLeft,
    /// Committed right swipe; fired after the exit animation completes.
    SwipeRight,
    /// Below-threshold release; fired when the spring return begins.
    SnappedBack,
    /// Second gesture start inside the double-tap window; fired
    /// synchronously from the start, before any drag logic.
    DoubleTap,
}

/// Classify a final horizontal offset against a distance threshold.
/// Strict comparison on both sides: `|dx| == threshold` snaps back.
pub fn classify(dx: f32, threshold: f32) -> SwipeOutcome {
    if dx > threshold {
        SwipeOutcome::CommittedRight
    } else if dx < -threshold {
        SwipeOutcome::CommittedLeft
    } else {
        SwipeOutcome::SnappedBack
    }
}
