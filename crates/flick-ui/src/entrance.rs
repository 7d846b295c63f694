//! Entrance animations for cards: one progress track per card, a variant
//! selecting which transform the progress drives, and a per-index stagger
//! helper for cascading list reveals.

use flick_animation::{interpolate, AnimationPolicy, Extrapolate, Track, TweenSpec};
use flick_core::{ConfigError, RuntimeHandle, State};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntranceVariant {
    /// Slide in from the trailing edge.
    Slide,
    Fade,
    /// Grow from half size.
    Scale,
    /// Rotate in around the vertical axis.
    Flip,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceConfig {
    pub variant: EntranceVariant,
    pub duration_millis: u64,
    pub delay_millis: u64,
    /// Surface width the slide variant starts from.
    pub surface_width: f32,
}

impl EntranceConfig {
    pub fn new(variant: EntranceVariant, surface_width: f32) -> Result<Self, ConfigError> {
        let config = Self {
            variant,
            duration_millis: 500,
            delay_millis: 0,
            surface_width,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_duration(mut self, duration_millis: u64) -> Result<Self, ConfigError> {
        self.duration_millis = duration_millis;
        self.validate()?;
        Ok(self)
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.duration_millis == 0 {
            return Err(ConfigError::NonPositiveDuration(self.duration_millis));
        }
        if !self.surface_width.is_finite() || self.surface_width <= 0.0 {
            return Err(ConfigError::NonPositiveDimension(self.surface_width));
        }
        Ok(())
    }
}

/// Per-index delay for otherwise-identical entrances, producing the
/// cascading reveal of a staggered list.
pub fn stagger_delay(index: usize, step_millis: u64) -> u64 {
    index as u64 * step_millis
}

struct EntranceInner {
    config: EntranceConfig,
    progress: Track,
}

/// Cloning shares the entrance.
pub struct Entrance {
    inner: Rc<RefCell<EntranceInner>>,
}

impl Entrance {
    pub fn new(runtime: RuntimeHandle, config: EntranceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            inner: Rc::new(RefCell::new(EntranceInner {
                config,
                progress: Track::new("entrance-progress", 0.0, runtime),
            })),
        })
    }

    /// Start the reveal (typically on mount).
    pub fn play(&self) {
        let (progress, tween) = self.reveal_tween();
        progress.animate_to(1.0, AnimationPolicy::Tween(tween));
    }

    /// Like [`Entrance::play`] with a completion callback fired once when
    /// the reveal finishes.
    pub fn play_with(&self, on_complete: impl FnOnce() + 'static) {
        let (progress, tween) = self.reveal_tween();
        progress.animate_with(1.0, AnimationPolicy::Tween(tween), on_complete);
    }

    fn reveal_tween(&self) -> (Track, TweenSpec) {
        let inner = self.inner.borrow();
        let tween = TweenSpec::linear(inner.config.duration_millis)
            .with_delay(inner.config.delay_millis);
        (inner.progress.clone(), tween)
    }

    pub fn variant(&self) -> EntranceVariant {
        self.inner.borrow().config.variant
    }

    /// Live progress handle in `[0, 1]`.
    pub fn progress(&self) -> State<f32> {
        self.inner.borrow().progress.state()
    }

    /// Card alpha; every variant fades in with its transform.
    pub fn opacity(&self) -> f32 {
        self.inner.borrow().progress.value()
    }

    /// Horizontal offset; nonzero only for the slide variant.
    pub fn translate_x(&self) -> f32 {
        let inner = self.inner.borrow();
        match inner.config.variant {
            EntranceVariant::Slide => interpolate(
                inner.progress.value(),
                &[0.0, 1.0],
                &[inner.config.surface_width, 0.0],
                Extrapolate::Clamp,
            ),
            _ => 0.0,
        }
    }

    /// Entrance scale; grows from half size for the scale variant, unity
    /// otherwise.
    pub fn entrance_scale(&self) -> f32 {
        let inner = self.inner.borrow();
        match inner.config.variant {
            EntranceVariant::Scale => interpolate(
                inner.progress.value(),
                &[0.0, 1.0],
                &[0.5, 1.0],
                Extrapolate::Clamp,
            ),
            _ => 1.0,
        }
    }

    /// Entrance scale composed with a press-feedback scale. The two
    /// sources multiply; neither replaces the other.
    pub fn scale_with_press(&self, press_scale: f32) -> f32 {
        self.entrance_scale() * press_scale
    }

    /// Rotation around the vertical axis; nonzero only for flip.
    pub fn flip_degrees(&self) -> f32 {
        let inner = self.inner.borrow();
        match inner.config.variant {
            EntranceVariant::Flip => interpolate(
                inner.progress.value(),
                &[0.0, 1.0],
                &[90.0, 0.0],
                Extrapolate::Clamp,
            ),
            _ => 0.0,
        }
    }

    /// Brief highlight flash peaking mid-reveal.
    pub fn overlay_opacity(&self) -> f32 {
        let progress = self.inner.borrow().progress.value();
        interpolate(
            progress,
            &[0.0, 0.5, 1.0],
            &[0.0, 0.1, 0.0],
            Extrapolate::Clamp,
        )
    }
}

impl Clone for Entrance {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
#[path = "tests/entrance_tests.rs"]
mod tests;
