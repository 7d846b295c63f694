//! The animation track: a named progress scalar driven frame by frame.
//!
//! A [`Track`] owns its current value, target, and policy, publishes into a
//! [`MutableState`] handle for the rendering layer, and re-registers itself
//! with the frame clock while motion is in flight. Stopping is synchronous:
//! once `stop` returns, no frame callback for this track can fire. The
//! completion callback of a one-shot animation fires exactly once, on
//! natural completion only; retargeting or stopping drops a pending
//! callback without firing it.

use crate::spec::{AnimationPolicy, LoopMode};
use flick_core::{FrameCallbackRegistration, MutableState, RuntimeHandle, State};
use std::cell::RefCell;
use std::rc::Rc;

type CompletionCallback = Box<dyn FnOnce()>;

fn lerp(start: f32, target: f32, fraction: f32) -> f32 {
    start + (target - start) * fraction
}

/// Named progress scalar with an attached animation policy. Cloning shares
/// the same underlying track.
pub struct Track {
    inner: Rc<RefCell<TrackInner>>,
}

struct TrackInner {
    label: &'static str,
    runtime: RuntimeHandle,
    state: MutableState<f32>,
    current: f32,
    velocity: f32,
    start: f32,
    target: f32,
    policy: AnimationPolicy,
    /// Tween/loop: leg origin. Spring: previous frame time.
    start_time_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
    on_complete: Option<CompletionCallback>,
}

impl Track {
    pub fn new(label: &'static str, initial: f32, runtime: RuntimeHandle) -> Self {
        let inner = TrackInner {
            label,
            runtime,
            state: MutableState::new(initial),
            current: initial,
            velocity: 0.0,
            start: initial,
            target: initial,
            policy: AnimationPolicy::default(),
            start_time_nanos: None,
            registration: None,
            on_complete: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    pub fn label(&self) -> &'static str {
        self.inner.borrow().label
    }

    /// Current value of the track.
    pub fn value(&self) -> f32 {
        self.inner.borrow().current
    }

    pub fn target(&self) -> f32 {
        self.inner.borrow().target
    }

    pub fn policy(&self) -> AnimationPolicy {
        self.inner.borrow().policy
    }

    pub fn is_animating(&self) -> bool {
        self.inner.borrow().registration.is_some()
    }

    /// Live read handle for the rendering layer.
    pub fn state(&self) -> State<f32> {
        self.inner.borrow().state.as_state()
    }

    /// Animate toward `target` under `policy`. A completion pending from a
    /// previous animation is dropped unfired.
    pub fn animate_to(&self, target: f32, policy: AnimationPolicy) {
        self.animate_impl(target, policy, None);
    }

    /// Like [`Track::animate_to`] with a completion callback invoked once
    /// when the motion finishes on its own.
    pub fn animate_with(
        &self,
        target: f32,
        policy: AnimationPolicy,
        on_complete: impl FnOnce() + 'static,
    ) {
        self.animate_impl(target, policy, Some(Box::new(on_complete)));
    }

    /// Start an indefinite loop between the spec's bounds.
    pub fn run_loop(&self, spec: crate::spec::LoopSpec) {
        self.animate_impl(spec.high, AnimationPolicy::Loop(spec), None);
    }

    /// Jump to `value` without animating, cancelling any motion in flight.
    pub fn snap_to(&self, value: f32) {
        let state = {
            let mut inner = self.inner.borrow_mut();
            inner.registration = None;
            inner.on_complete = None;
            inner.current = value;
            inner.start = value;
            inner.target = value;
            inner.velocity = 0.0;
            inner.start_time_nanos = None;
            inner.state.clone()
        };
        state.set_value(value);
    }

    /// Halt the track at its current value. Deterministic and synchronous:
    /// after this returns no frame callback for this track fires, and any
    /// pending completion callback is dropped.
    pub fn stop(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.registration = None;
        inner.on_complete = None;
        inner.velocity = 0.0;
        inner.start_time_nanos = None;
    }

    fn animate_impl(
        &self,
        target: f32,
        policy: AnimationPolicy,
        on_complete: Option<CompletionCallback>,
    ) {
        let snapped_low = {
            let mut inner = self.inner.borrow_mut();
            inner.registration = None;
            inner.on_complete = on_complete;
            inner.policy = policy;
            inner.start_time_nanos = None;
            match policy {
                AnimationPolicy::Loop(spec) => {
                    inner.current = spec.low;
                    inner.start = spec.low;
                    inner.target = spec.high;
                    Some((inner.state.clone(), spec.low))
                }
                _ => {
                    inner.start = inner.current;
                    inner.target = target;
                    None
                }
            }
        };
        if let Some((state, low)) = snapped_low {
            state.set_value(low);
        }
        log::trace!("track {:?} animating to {target}", self.label());
        Self::schedule_frame(&self.inner);
    }

    fn schedule_frame(this: &Rc<RefCell<TrackInner>>) {
        let runtime = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return;
            }
            inner.runtime.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = runtime.frame_clock().with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        if registration.is_active() {
            this.borrow_mut().registration = Some(registration);
        } else {
            // Runtime already shut down: degrade by finishing immediately.
            let (state, target, completed) = {
                let mut inner = this.borrow_mut();
                inner.current = inner.target;
                inner.start = inner.target;
                inner.velocity = 0.0;
                inner.start_time_nanos = None;
                (inner.state.clone(), inner.target, inner.on_complete.take())
            };
            state.set_value(target);
            if let Some(callback) = completed {
                callback();
            }
        }
    }

    fn on_frame(this: &Rc<RefCell<TrackInner>>, frame_time_nanos: u64) {
        let mut schedule_next = false;
        let mut completed: Option<CompletionCallback> = None;
        let mut publish: Option<(MutableState<f32>, f32)> = None;
        {
            let mut inner = this.borrow_mut();
            inner.registration = None;

            match inner.policy {
                AnimationPolicy::Tween(spec) => {
                    let start_time = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
                    let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
                    let delay_nanos = spec.delay_millis * 1_000_000;

                    if elapsed_nanos < delay_nanos {
                        schedule_next = true;
                    } else {
                        let animation_elapsed = elapsed_nanos - delay_nanos;
                        let duration_nanos = (spec.duration_millis * 1_000_000).max(1);
                        let linear_progress =
                            (animation_elapsed as f32 / duration_nanos as f32).clamp(0.0, 1.0);
                        let progress = spec.easing.transform(linear_progress);
                        inner.current = lerp(inner.start, inner.target, progress);

                        if linear_progress >= 1.0 {
                            inner.current = inner.target;
                            inner.start = inner.target;
                            inner.start_time_nanos = None;
                            completed = inner.on_complete.take();
                        } else {
                            schedule_next = true;
                        }
                        publish = Some((inner.state.clone(), inner.current));
                    }
                }
                AnimationPolicy::Spring(spec) => {
                    // Semi-implicit Euler over the per-frame delta, with
                    // fixed substeps for stability.
                    let previous = inner
                        .start_time_nanos
                        .replace(frame_time_nanos)
                        .unwrap_or(frame_time_nanos);
                    let dt = frame_time_nanos.saturating_sub(previous) as f32 / 1_000_000_000.0;

                    if dt <= 0.0 {
                        schedule_next = true;
                    } else {
                        let stiffness = spec.stiffness;
                        let damping = 2.0 * spec.damping_ratio * stiffness.sqrt();
                        let timestep: f32 = 0.016;
                        let mut integrated = 0.0f32;

                        while integrated < dt {
                            let step = timestep.min(dt - integrated);
                            let span = inner.target - inner.start;
                            let progress = if span.abs() < f32::EPSILON {
                                1.0
                            } else {
                                (inner.current - inner.start) / span
                            };
                            let displacement = progress - 1.0;
                            let force = -stiffness * displacement - damping * inner.velocity;
                            inner.velocity += force * step;
                            let next_progress = progress + inner.velocity * step;
                            inner.current =
                                lerp(inner.start, inner.target, next_progress.clamp(-1.0, 2.0));
                            integrated += step;
                        }

                        let at_rest = inner.velocity.abs() < spec.velocity_threshold;
                        let near_target =
                            (inner.current - inner.target).abs() < spec.position_threshold;

                        if at_rest && near_target {
                            inner.current = inner.target;
                            inner.start = inner.target;
                            inner.velocity = 0.0;
                            inner.start_time_nanos = None;
                            completed = inner.on_complete.take();
                        } else {
                            schedule_next = true;
                        }
                        publish = Some((inner.state.clone(), inner.current));
                    }
                }
                AnimationPolicy::Loop(spec) => {
                    let leg_nanos = (spec.leg_duration_millis * 1_000_000).max(1);
                    let mut leg_start = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
                    let elapsed = frame_time_nanos.saturating_sub(leg_start);

                    if elapsed >= leg_nanos {
                        // Advance whole legs so long stalls stay drift-free.
                        let legs = elapsed / leg_nanos;
                        leg_start += legs * leg_nanos;
                        inner.start_time_nanos = Some(leg_start);
                        match spec.mode {
                            LoopMode::Alternate => {
                                if legs % 2 == 1 {
                                    let swapped = inner.start;
                                    inner.start = inner.target;
                                    inner.target = swapped;
                                }
                            }
                            LoopMode::Restart => {
                                inner.start = spec.low;
                                inner.target = spec.high;
                            }
                        }
                    }

                    let within = frame_time_nanos.saturating_sub(leg_start);
                    let linear_progress = (within as f32 / leg_nanos as f32).clamp(0.0, 1.0);
                    let progress = spec.easing.transform(linear_progress);
                    inner.current = lerp(inner.start, inner.target, progress);
                    publish = Some((inner.state.clone(), inner.current));
                    schedule_next = true;
                }
            }
        }

        if let Some((state, value)) = publish {
            state.set_value(value);
        }
        if schedule_next {
            Self::schedule_frame(this);
        }
        if let Some(callback) = completed {
            callback();
        }
    }
}

impl Clone for Track {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
#[path = "tests/track_tests.rs"]
mod tests;
