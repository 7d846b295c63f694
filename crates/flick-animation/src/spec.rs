//! Animation parameter structs. Builders are infallible for literal use;
//! `validate` is called wherever a spec crosses a configuration boundary.

use crate::easing::Easing;
use flick_core::ConfigError;

/// Fixed-duration animation specification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
    /// Delay before starting in milliseconds.
    pub delay_millis: u64,
}

impl TweenSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }

    /// Reject a tween that could never complete.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.duration_millis == 0 {
            return Err(ConfigError::NonPositiveDuration(self.duration_millis));
        }
        Ok(())
    }
}

impl Default for TweenSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowIn)
    }
}

/// Spring animation configuration. Target-seeking with no fixed duration;
/// converges once both velocity and displacement drop under the thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// 1.0 = critically damped, < 1.0 = bouncy, > 1.0 = over-damped.
    pub damping_ratio: f32,
    /// Higher values settle faster.
    pub stiffness: f32,
    /// Velocity threshold to stop the animation.
    pub velocity_threshold: f32,
    /// Position threshold to stop the animation.
    pub position_threshold: f32,
}

impl SpringSpec {
    pub fn default_spring() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 1500.0,
            velocity_threshold: 0.01,
            position_threshold: 0.001,
        }
    }

    pub fn bouncy() -> Self {
        Self {
            damping_ratio: 0.5,
            ..Self::default_spring()
        }
    }

    pub fn stiff() -> Self {
        Self {
            stiffness: 3000.0,
            ..Self::default_spring()
        }
    }

    /// Translate friction/tension pairs (the convention of the mobile
    /// animation APIs this toolkit grew out of) onto damping/stiffness.
    /// Friction 7 / tension 40 lands on the default spring.
    pub fn with_friction_tension(friction: f32, tension: f32) -> Self {
        let friction = friction.max(0.1);
        let tension = tension.max(1.0);
        Self {
            damping_ratio: (friction / 7.0).clamp(0.1, 2.0),
            stiffness: tension * 37.5,
            ..Self::default_spring()
        }
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

/// Whether a loop bounces between its bounds or restarts from the low end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopMode {
    /// low -> high -> low -> high ... (pulse)
    Alternate,
    /// low -> high, jump back, low -> high ... (shimmer sweep, spinner)
    Restart,
}

/// Indefinitely repeating animation between two bounds. Runs until the
/// owning track is stopped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopSpec {
    pub low: f32,
    pub high: f32,
    /// Duration of one leg (low to high) in milliseconds.
    pub leg_duration_millis: u64,
    pub easing: Easing,
    pub mode: LoopMode,
}

impl LoopSpec {
    /// Alternating pulse, e.g. `1.0 <-> 1.05` for a breathing button.
    pub fn pulse(low: f32, high: f32, leg_duration_millis: u64) -> Self {
        Self {
            low,
            high,
            leg_duration_millis,
            easing: Easing::Linear,
            mode: LoopMode::Alternate,
        }
    }

    /// Restarting sweep over `[0, 1]`, e.g. a spinner rotation source.
    pub fn sweep(leg_duration_millis: u64) -> Self {
        Self {
            low: 0.0,
            high: 1.0,
            leg_duration_millis,
            easing: Easing::Linear,
            mode: LoopMode::Restart,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.leg_duration_millis == 0 {
            return Err(ConfigError::NonPositiveDuration(self.leg_duration_millis));
        }
        Ok(())
    }
}

/// Policy attached to a running track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationPolicy {
    /// One-shot, fixed-duration motion toward the target.
    Tween(TweenSpec),
    /// Physics-based motion toward the target.
    Spring(SpringSpec),
    /// Indefinite repetition between the spec's bounds; the target passed
    /// alongside it is ignored.
    Loop(LoopSpec),
}

impl AnimationPolicy {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            AnimationPolicy::Tween(spec) => spec.validate(),
            AnimationPolicy::Spring(_) => Ok(()),
            AnimationPolicy::Loop(spec) => spec.validate(),
        }
    }
}

impl Default for AnimationPolicy {
    fn default() -> Self {
        AnimationPolicy::Tween(TweenSpec::default())
    }
}
