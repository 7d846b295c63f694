//! Snap slider: the thumb follows the drag clamped to the track, reports
//! the rounded step while moving, and springs onto the nearest step
//! position at release.

use flick_animation::{AnimationPolicy, SpringSpec, Track};
use flick_core::{ConfigError, RuntimeHandle, State};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderConfig {
    /// Usable track length in logical pixels.
    pub track_width: f32,
    /// Number of snap steps across the track.
    pub steps: u32,
    /// Spring used for the snap at release.
    pub snap_spring: SpringSpec,
}

impl SliderConfig {
    pub fn new(track_width: f32) -> Result<Self, ConfigError> {
        let config = Self {
            track_width,
            steps: 24,
            snap_spring: SpringSpec::with_friction_tension(5.0, 40.0),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_steps(mut self, steps: u32) -> Result<Self, ConfigError> {
        self.steps = steps;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.track_width.is_finite() || self.track_width <= 0.0 {
            return Err(ConfigError::NonPositiveDimension(self.track_width));
        }
        if self.steps == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        Ok(())
    }
}

struct SliderInner {
    config: SliderConfig,
    position: Track,
    value: u32,
    on_change: Option<Rc<dyn Fn(u32)>>,
}

/// Cloning shares the slider.
pub struct SnapSlider {
    inner: Rc<RefCell<SliderInner>>,
}

impl SnapSlider {
    pub fn new(runtime: RuntimeHandle, config: SliderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            inner: Rc::new(RefCell::new(SliderInner {
                config,
                position: Track::new("slider-thumb", 0.0, runtime),
                value: 0,
                on_change: None,
            })),
        })
    }

    /// Callback fired whenever the rounded step value changes mid-drag.
    pub fn set_on_change(&self, on_change: impl Fn(u32) + 'static) {
        self.inner.borrow_mut().on_change = Some(Rc::new(on_change));
    }

    /// Thumb follows the drag, clamped to the track. `dx` is the
    /// cumulative offset along the track from its origin.
    pub fn on_drag_move(&self, dx: f32) {
        let (position, clamped, changed) = {
            let mut inner = self.inner.borrow_mut();
            let clamped = dx.clamp(0.0, inner.config.track_width);
            let value = Self::step_for(&inner.config, clamped);
            let changed = if value != inner.value {
                inner.value = value;
                inner.on_change.clone().map(|callback| (callback, value))
            } else {
                None
            };
            (inner.position.clone(), clamped, changed)
        };
        position.snap_to(clamped);
        if let Some((callback, value)) = changed {
            callback(value);
        }
    }

    /// Release: the thumb springs onto the nearest step position.
    pub fn on_release(&self, dx: f32) {
        let (position, target, spring) = {
            let mut inner = self.inner.borrow_mut();
            let clamped = dx.clamp(0.0, inner.config.track_width);
            let value = Self::step_for(&inner.config, clamped);
            inner.value = value;
            let target =
                (value as f32 / inner.config.steps as f32) * inner.config.track_width;
            (inner.position.clone(), target, inner.config.snap_spring)
        };
        position.animate_to(target, AnimationPolicy::Spring(spring));
    }

    pub fn value(&self) -> u32 {
        self.inner.borrow().value
    }

    /// Live thumb position handle.
    pub fn position(&self) -> State<f32> {
        self.inner.borrow().position.state()
    }

    /// Filled-track length equals the thumb position.
    pub fn active_track_width(&self) -> f32 {
        self.inner.borrow().position.value()
    }

    fn step_for(config: &SliderConfig, position: f32) -> u32 {
        ((position / config.track_width) * config.steps as f32).round() as u32
    }
}

impl Clone for SnapSlider {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
#[path = "tests/slider_tests.rs"]
mod tests;
