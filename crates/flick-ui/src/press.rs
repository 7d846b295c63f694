//! Press feedback for buttons and cards: a single scale track driven by
//! press-in/press-out, or a continuous pulse while enabled.

use flick_animation::{AnimationPolicy, LoopSpec, SpringSpec, Track, TweenSpec};
use flick_core::{RuntimeHandle, State};
use std::cell::RefCell;
use std::rc::Rc;

const PRESS_DIP_SCALE: f32 = 0.95;
const BOUNCE_OVERSHOOT_SCALE: f32 = 1.1;
const PRESS_STEP_MILLIS: u64 = 100;
const PULSE_HIGH_SCALE: f32 = 1.05;
const PULSE_LEG_MILLIS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressStyle {
    /// Dip on press, return on release.
    Scale,
    /// Dip on press, overshoot then spring home on release.
    Bounce,
    /// Continuous breathing pulse; presses are ignored.
    Pulse,
}

struct PressInner {
    style: PressStyle,
    enabled: bool,
    scale: Track,
}

/// Cloning shares the animator.
pub struct PressAnimator {
    inner: Rc<RefCell<PressInner>>,
}

impl PressAnimator {
    pub fn new(runtime: RuntimeHandle, style: PressStyle) -> Self {
        let animator = Self {
            inner: Rc::new(RefCell::new(PressInner {
                style,
                enabled: true,
                scale: Track::new("press-scale", 1.0, runtime),
            })),
        };
        if style == PressStyle::Pulse {
            animator.start_pulse();
        }
        animator
    }

    /// Disabling freezes presses and stops the pulse; re-enabling a pulse
    /// animator restarts the loop.
    pub fn set_enabled(&self, enabled: bool) {
        let (style, scale, was_enabled) = {
            let mut inner = self.inner.borrow_mut();
            let was_enabled = inner.enabled;
            inner.enabled = enabled;
            (inner.style, inner.scale.clone(), was_enabled)
        };
        if was_enabled == enabled {
            return;
        }
        if style == PressStyle::Pulse {
            if enabled {
                self.start_pulse();
            } else {
                scale.stop();
                scale.snap_to(1.0);
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.borrow().enabled
    }

    pub fn style(&self) -> PressStyle {
        self.inner.borrow().style
    }

    pub fn press_in(&self) {
        let scale = {
            let inner = self.inner.borrow();
            if !inner.enabled || inner.style == PressStyle::Pulse {
                return;
            }
            inner.scale.clone()
        };
        scale.animate_to(
            PRESS_DIP_SCALE,
            AnimationPolicy::Tween(TweenSpec::linear(PRESS_STEP_MILLIS)),
        );
    }

    pub fn press_out(&self) {
        let (style, scale) = {
            let inner = self.inner.borrow();
            if !inner.enabled {
                return;
            }
            (inner.style, inner.scale.clone())
        };
        match style {
            PressStyle::Scale => {
                scale.animate_to(
                    1.0,
                    AnimationPolicy::Tween(TweenSpec::linear(PRESS_STEP_MILLIS)),
                );
            }
            PressStyle::Bounce => {
                let spring_home = scale.clone();
                scale.animate_with(
                    BOUNCE_OVERSHOOT_SCALE,
                    AnimationPolicy::Tween(TweenSpec::linear(PRESS_STEP_MILLIS)),
                    move || {
                        spring_home.animate_to(
                            1.0,
                            AnimationPolicy::Spring(SpringSpec::with_friction_tension(3.0, 40.0)),
                        );
                    },
                );
            }
            PressStyle::Pulse => {}
        }
    }

    /// Live scale handle. Multiply with other scale sources (entrance
    /// scale, for instance); never substitute one for the other.
    pub fn scale(&self) -> State<f32> {
        self.inner.borrow().scale.state()
    }

    pub fn scale_value(&self) -> f32 {
        self.inner.borrow().scale.value()
    }

    /// Tear down on unmount: guarantees no further frame fires.
    pub fn stop(&self) {
        self.inner.borrow().scale.stop();
    }

    fn start_pulse(&self) {
        let scale = self.inner.borrow().scale.clone();
        scale.run_loop(LoopSpec::pulse(1.0, PULSE_HIGH_SCALE, PULSE_LEG_MILLIS));
    }
}

impl Clone for PressAnimator {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
#[path = "tests/press_tests.rs"]
mod tests;
