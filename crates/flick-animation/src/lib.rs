//! Animation system for Flick: declarative progress tracks with tween,
//! spring, and loop policies, plus the piecewise-linear interpolation that
//! turns a track's value into visual transform outputs.

pub mod easing;
pub mod interpolate;
pub mod spec;
pub mod track;

pub use easing::Easing;
pub use interpolate::{interpolate, Extrapolate, Interpolation};
pub use spec::{AnimationPolicy, LoopMode, LoopSpec, SpringSpec, TweenSpec};
pub use track::Track;
