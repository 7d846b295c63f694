//! Skeleton placeholder shimmer: a loop track driving either an opacity
//! pulse or a sweeping wave across the placeholder.

use flick_animation::{interpolate, Extrapolate, LoopSpec, Track};
use flick_core::{RuntimeHandle, State};
use std::rc::Rc;

const PULSE_LEG_MILLIS: u64 = 1000;
const WAVE_LEG_MILLIS: u64 = 1500;
const PULSE_LOW_OPACITY: f32 = 0.3;
const PULSE_HIGH_OPACITY: f32 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkeletonAnimation {
    /// Opacity breathes between dim and bright.
    Pulse,
    /// A highlight sweeps across and restarts from the leading edge.
    Wave,
    /// Static placeholder.
    None,
}

struct SkeletonInner {
    animation: SkeletonAnimation,
    shimmer: Track,
}

/// Cloning shares the skeleton.
pub struct Skeleton {
    inner: Rc<SkeletonInner>,
}

impl Skeleton {
    pub fn new(runtime: RuntimeHandle, animation: SkeletonAnimation) -> Self {
        let shimmer = Track::new("skeleton-shimmer", 0.0, runtime);
        match animation {
            SkeletonAnimation::Pulse => {
                shimmer.run_loop(LoopSpec::pulse(0.0, 1.0, PULSE_LEG_MILLIS));
            }
            SkeletonAnimation::Wave => {
                shimmer.run_loop(LoopSpec::sweep(WAVE_LEG_MILLIS));
            }
            SkeletonAnimation::None => {}
        }
        Self {
            inner: Rc::new(SkeletonInner { animation, shimmer }),
        }
    }

    pub fn animation(&self) -> SkeletonAnimation {
        self.inner.animation
    }

    /// Live shimmer progress handle in `[0, 1]`.
    pub fn shimmer(&self) -> State<f32> {
        self.inner.shimmer.state()
    }

    /// Placeholder alpha for the pulse variant; the dim baseline for the
    /// others.
    pub fn opacity(&self) -> f32 {
        match self.inner.animation {
            SkeletonAnimation::Pulse => interpolate(
                self.inner.shimmer.value(),
                &[0.0, 1.0],
                &[PULSE_LOW_OPACITY, PULSE_HIGH_OPACITY],
                Extrapolate::Clamp,
            ),
            _ => PULSE_LOW_OPACITY,
        }
    }

    /// Horizontal position of the wave highlight across a placeholder of
    /// `width`; sweeps from just off the leading edge to off the trailing
    /// edge.
    pub fn wave_shift(&self, width: f32) -> f32 {
        interpolate(
            self.inner.shimmer.value(),
            &[0.0, 1.0],
            &[-width, width],
            Extrapolate::Clamp,
        )
    }

    /// Tear down on unmount: guarantees no further frame fires.
    pub fn stop(&self) {
        self.inner.shimmer.stop();
    }
}

impl Clone for Skeleton {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
#[path = "tests/skeleton_tests.rs"]
mod tests;
