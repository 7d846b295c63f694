//! Pull-to-refresh controller: negative scroll offset becomes pull
//! distance, a distance past the arm threshold turns release into a
//! refresh, and the spinner winds up/down on a 300ms tween. The owner's
//! refresh work is asynchronous to this controller; it calls `finish`
//! when done.

use flick_animation::{interpolate, AnimationPolicy, Extrapolate, Track, TweenSpec};
use flick_core::{ConfigError, RuntimeHandle, State};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshPhase {
    Idle,
    /// Finger down, pulled but not far enough to arm.
    Pulling,
    /// Pulled past the arm distance; releasing now refreshes.
    Armed,
    Refreshing,
}

/// Status line the renderer should show for the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshHint {
    None,
    PullToRefresh,
    ReleaseToRefresh,
    Refreshing,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PullToRefreshConfig {
    /// Pull distance past which release triggers a refresh.
    pub arm_distance: f32,
    /// Spinner wind-up/down duration.
    pub spin_duration_millis: u64,
}

impl PullToRefreshConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.arm_distance.is_finite() || self.arm_distance <= 0.0 {
            return Err(ConfigError::NonPositiveThreshold(self.arm_distance));
        }
        if self.spin_duration_millis == 0 {
            return Err(ConfigError::NonPositiveDuration(self.spin_duration_millis));
        }
        Ok(())
    }
}

impl Default for PullToRefreshConfig {
    fn default() -> Self {
        Self {
            arm_distance: 80.0,
            spin_duration_millis: 300,
        }
    }
}

struct RefreshInner {
    config: PullToRefreshConfig,
    phase: RefreshPhase,
    pull_distance: f32,
    progress: Track,
    on_refresh: Rc<dyn Fn()>,
}

/// Cloning shares the controller.
pub struct PullToRefresh {
    inner: Rc<RefCell<RefreshInner>>,
}

impl PullToRefresh {
    pub fn new(
        runtime: RuntimeHandle,
        config: PullToRefreshConfig,
        on_refresh: impl Fn() + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            inner: Rc::new(RefCell::new(RefreshInner {
                config,
                phase: RefreshPhase::Idle,
                pull_distance: 0.0,
                progress: Track::new("refresh-progress", 0.0, runtime),
                on_refresh: Rc::new(on_refresh),
            })),
        })
    }

    /// Feed the scroll offset; values below zero read as pull distance.
    /// Ignored while a refresh is running.
    pub fn on_scroll(&self, offset_y: f32) {
        let mut inner = self.inner.borrow_mut();
        if inner.phase == RefreshPhase::Refreshing {
            return;
        }
        let distance = (-offset_y).max(0.0);
        inner.pull_distance = distance;
        inner.phase = if distance <= 0.0 {
            RefreshPhase::Idle
        } else if distance > inner.config.arm_distance {
            RefreshPhase::Armed
        } else {
            RefreshPhase::Pulling
        };
    }

    /// Finger up. Starts the refresh only from the armed phase.
    pub fn on_release(&self) {
        let armed = {
            let mut inner = self.inner.borrow_mut();
            match inner.phase {
                RefreshPhase::Armed => true,
                RefreshPhase::Pulling => {
                    inner.phase = RefreshPhase::Idle;
                    inner.pull_distance = 0.0;
                    false
                }
                _ => false,
            }
        };
        if armed {
            self.begin();
        }
    }

    /// Enter the refreshing phase, invoke the owner's refresh callback,
    /// and wind the spinner up. Also callable programmatically.
    pub fn begin(&self) {
        let (progress, spin, on_refresh) = {
            let mut inner = self.inner.borrow_mut();
            if inner.phase == RefreshPhase::Refreshing {
                return;
            }
            inner.phase = RefreshPhase::Refreshing;
            (
                inner.progress.clone(),
                inner.config.spin_duration_millis,
                Rc::clone(&inner.on_refresh),
            )
        };
        log::debug!("refresh started");
        on_refresh();
        progress.animate_to(1.0, AnimationPolicy::Tween(TweenSpec::linear(spin)));
    }

    /// The owner's refresh work is done: wind the spinner down and return
    /// to idle when the animation completes. No-op outside the refreshing
    /// phase.
    pub fn finish(&self) {
        let (progress, spin) = {
            let inner = self.inner.borrow();
            if inner.phase != RefreshPhase::Refreshing {
                return;
            }
            (inner.progress.clone(), inner.config.spin_duration_millis)
        };
        let weak = Rc::downgrade(&self.inner);
        progress.animate_with(
            0.0,
            AnimationPolicy::Tween(TweenSpec::linear(spin)),
            move || {
                if let Some(inner) = weak.upgrade() {
                    let mut inner = inner.borrow_mut();
                    inner.phase = RefreshPhase::Idle;
                    inner.pull_distance = 0.0;
                }
            },
        );
    }

    pub fn phase(&self) -> RefreshPhase {
        self.inner.borrow().phase
    }

    pub fn is_refreshing(&self) -> bool {
        self.phase() == RefreshPhase::Refreshing
    }

    pub fn pull_distance(&self) -> f32 {
        self.inner.borrow().pull_distance
    }

    pub fn hint(&self) -> RefreshHint {
        match self.phase() {
            RefreshPhase::Idle => RefreshHint::None,
            RefreshPhase::Pulling => RefreshHint::PullToRefresh,
            RefreshPhase::Armed => RefreshHint::ReleaseToRefresh,
            RefreshPhase::Refreshing => RefreshHint::Refreshing,
        }
    }

    /// Live spinner progress handle in `[0, 1]`.
    pub fn progress(&self) -> State<f32> {
        self.inner.borrow().progress.state()
    }

    /// Spinner rotation derived from the progress track.
    pub fn spinner_degrees(&self) -> f32 {
        let progress = self.inner.borrow().progress.value();
        interpolate(progress, &[0.0, 1.0], &[0.0, 360.0], Extrapolate::Clamp)
    }

    /// Pull-indicator alpha while dragging down.
    pub fn indicator_opacity(&self) -> f32 {
        (self.pull_distance() / 100.0).min(1.0)
    }

    /// Pull-indicator vertical position while dragging down.
    pub fn indicator_lift(&self) -> f32 {
        (self.pull_distance() / 2.0).min(50.0) - 100.0
    }
}

impl Clone for PullToRefresh {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
#[path = "tests/pull_refresh_tests.rs"]
mod tests;
