//! Drag session tracking and swipe classification.
//!
//! A [`SwipeTracker`] owns at most one live [`DragSession`] per gesture
//! surface. Raw cumulative offsets flow through unmodified while the drag
//! is live; classification happens once, at release. Double-tap detection
//! is independent of swipe classification: a second gesture start inside
//! the window fires [`GestureEvent::DoubleTap`] immediately, and the same
//! physical gesture still resolves to its own swipe or snap-back outcome.

use crate::constants::{
    DOUBLE_TAP_WINDOW_MILLIS, SWIPE_EXIT_DURATION_MILLIS, SWIPE_THRESHOLD_FRACTION,
};
use crate::events::{classify, GestureEvent, SwipeOutcome};
use flick_animation::{AnimationPolicy, Easing, SpringSpec, Track, TweenSpec};
use flick_core::{ConfigError, RuntimeHandle, State};
use std::cell::RefCell;
use std::rc::Rc;

/// Configuration for a swipe surface. All fields have working defaults;
/// construction fails fast on values that could never classify a drag or
/// finish an exit animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    /// Horizontal extent of the gesture surface in logical pixels.
    pub surface_width: f32,
    /// Fraction of `surface_width` a drag must exceed to commit.
    pub threshold_fraction: f32,
    /// Duration of the continued-motion exit after a commit.
    pub exit_duration_millis: u64,
    /// Double-tap reclassification window.
    pub double_tap_window_millis: u64,
    /// Spring used for the below-threshold return to origin.
    pub snap_spring: SpringSpec,
}

impl SwipeConfig {
    pub fn new(surface_width: f32) -> Result<Self, ConfigError> {
        let config = Self {
            surface_width,
            threshold_fraction: SWIPE_THRESHOLD_FRACTION,
            exit_duration_millis: SWIPE_EXIT_DURATION_MILLIS,
            double_tap_window_millis: DOUBLE_TAP_WINDOW_MILLIS,
            snap_spring: SpringSpec::with_friction_tension(5.0, 40.0),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.surface_width.is_finite() || self.surface_width <= 0.0 {
            return Err(ConfigError::NonPositiveDimension(self.surface_width));
        }
        if !self.threshold_fraction.is_finite() || self.threshold_fraction <= 0.0 {
            return Err(ConfigError::NonPositiveThreshold(self.threshold_fraction));
        }
        if self.exit_duration_millis == 0 {
            return Err(ConfigError::NonPositiveDuration(self.exit_duration_millis));
        }
        Ok(())
    }

    /// Commit distance in logical pixels.
    pub fn threshold(&self) -> f32 {
        self.surface_width * self.threshold_fraction
    }
}

/// One live drag. Created on gesture start, consumed at release.
#[derive(Debug, Clone, Copy)]
struct DragSession {
    /// Origin instant (currently unused, reserved for velocity metrics)
    #[allow(dead_code)]
    started_at_nanos: u64,
}

struct TrackerInner {
    runtime: RuntimeHandle,
    config: SwipeConfig,
    session: Option<DragSession>,
    last_start_nanos: Option<u64>,
    /// Set while a committed exit animation is in flight; new sessions are
    /// refused until the exit resolves (double-tap detection still runs).
    exiting: bool,
    offset_x: Track,
    offset_y: Track,
    handler: Rc<dyn Fn(GestureEvent)>,
}

/// Converts a pointer-drag stream into live offsets plus a discrete
/// outcome. Cloning shares the same tracker.
pub struct SwipeTracker {
    inner: Rc<RefCell<TrackerInner>>,
}

impl SwipeTracker {
    pub fn new(
        runtime: RuntimeHandle,
        config: SwipeConfig,
        handler: impl Fn(GestureEvent) + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let inner = TrackerInner {
            offset_x: Track::new("swipe-offset-x", 0.0, runtime.clone()),
            offset_y: Track::new("swipe-offset-y", 0.0, runtime.clone()),
            runtime,
            config,
            session: None,
            last_start_nanos: None,
            exiting: false,
            handler: Rc::new(handler),
        };
        Ok(Self {
            inner: Rc::new(RefCell::new(inner)),
        })
    }

    /// Gesture start. Fires [`GestureEvent::DoubleTap`] synchronously when
    /// the previous start was under the window, then opens the session.
    /// The stored start instant is overwritten regardless of outcome.
    pub fn on_drag_start(&self) {
        let (now, double_tap, handler) = {
            let mut inner = self.inner.borrow_mut();
            let now = inner.runtime.now_nanos();
            let window = inner.config.double_tap_window_millis * 1_000_000;
            let double_tap = matches!(
                inner.last_start_nanos,
                Some(previous) if now.saturating_sub(previous) < window
            );
            inner.last_start_nanos = Some(now);
            (now, double_tap, Rc::clone(&inner.handler))
        };

        if double_tap {
            handler(GestureEvent::DoubleTap);
        }

        let mut inner = self.inner.borrow_mut();
        if inner.exiting {
            return;
        }
        inner.session = Some(DragSession {
            started_at_nanos: now,
        });
    }

    /// Live drag update with the raw cumulative offset from the session's
    /// origin. Forwarded unmodified; no smoothing, no rate limiting.
    pub fn on_drag_move(&self, dx: f32, dy: f32) {
        let tracks = {
            let inner = self.inner.borrow();
            if inner.session.is_none() {
                return;
            }
            (inner.offset_x.clone(), inner.offset_y.clone())
        };
        tracks.0.snap_to(dx);
        tracks.1.snap_to(dy);
    }

    /// Terminal release. Classifies against the strict threshold, then
    /// either runs the continued-motion exit (event on completion, offsets
    /// reset to origin afterwards) or springs back to `(0, 0)`.
    pub fn on_drag_end(&self, dx: f32, _dy: f32) {
        let outcome = {
            let mut inner = self.inner.borrow_mut();
            if inner.session.take().is_none() {
                return;
            }
            classify(dx, inner.config.threshold())
        };
        log::debug!("drag ended at dx={dx}: {outcome:?}");

        match outcome {
            SwipeOutcome::CommittedRight => {
                self.begin_exit(GestureEvent::SwipeRight);
            }
            SwipeOutcome::CommittedLeft => {
                self.begin_exit(GestureEvent::SwipeLeft);
            }
            SwipeOutcome::SnappedBack => {
                let (x, y, spring, handler) = {
                    let inner = self.inner.borrow();
                    (
                        inner.offset_x.clone(),
                        inner.offset_y.clone(),
                        inner.config.snap_spring,
                        Rc::clone(&inner.handler),
                    )
                };
                x.animate_to(0.0, AnimationPolicy::Spring(spring));
                y.animate_to(0.0, AnimationPolicy::Spring(spring));
                handler(GestureEvent::SnappedBack);
            }
        }
    }

    fn begin_exit(&self, event: GestureEvent) {
        let (x, tween, target) = {
            let mut inner = self.inner.borrow_mut();
            inner.exiting = true;
            let sign = if event == GestureEvent::SwipeLeft {
                -1.0
            } else {
                1.0
            };
            (
                inner.offset_x.clone(),
                TweenSpec::tween(inner.config.exit_duration_millis, Easing::EaseInOut),
                sign * inner.config.surface_width,
            )
        };

        let weak = Rc::downgrade(&self.inner);
        x.animate_with(target, AnimationPolicy::Tween(tween), move || {
            let Some(strong) = weak.upgrade() else { return };
            let (x, y, handler) = {
                let mut inner = strong.borrow_mut();
                inner.exiting = false;
                (
                    inner.offset_x.clone(),
                    inner.offset_y.clone(),
                    Rc::clone(&inner.handler),
                )
            };
            handler(event);
            x.snap_to(0.0);
            y.snap_to(0.0);
        });
    }

    /// Live horizontal offset handle for the rendering layer.
    pub fn offset_x(&self) -> State<f32> {
        self.inner.borrow().offset_x.state()
    }

    /// Live vertical offset handle for the rendering layer.
    pub fn offset_y(&self) -> State<f32> {
        self.inner.borrow().offset_y.state()
    }

    pub fn is_dragging(&self) -> bool {
        self.inner.borrow().session.is_some()
    }

    pub fn config(&self) -> SwipeConfig {
        self.inner.borrow().config
    }
}

impl Clone for SwipeTracker {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
#[path = "tests/tracker_tests.rs"]
mod tests;
