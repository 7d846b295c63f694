use super::*;

use crate::easing::Easing;
use crate::spec::{AnimationPolicy, LoopSpec, SpringSpec, TweenSpec};
use flick_core::Runtime;
use std::cell::Cell;
use std::rc::Rc;

fn pump(runtime: &Runtime, frames: u32) {
    for _ in 0..frames {
        runtime.advance_millis(16);
    }
}

#[test]
fn tween_interpolates_over_time_and_ends_at_target() {
    let runtime = Runtime::new();
    let track = Track::new("alpha", 0.0, runtime.handle());

    track.animate_to(1.0, AnimationPolicy::Tween(TweenSpec::linear(200)));
    assert!(track.is_animating());

    let mut saw_midpoint = false;
    for _ in 0..32 {
        runtime.advance_millis(16);
        let value = track.value();
        if value > 0.0 && value < 1.0 {
            saw_midpoint = true;
        }
    }

    assert!(saw_midpoint, "tween should report intermediate values");
    assert!((track.value() - 1.0).abs() < f32::EPSILON);
    assert!(!track.is_animating());
}

#[test]
fn tween_completion_fires_exactly_once() {
    let runtime = Runtime::new();
    let track = Track::new("exit", 0.0, runtime.handle());
    let completions = Rc::new(Cell::new(0u32));

    let completions_clone = Rc::clone(&completions);
    track.animate_with(1.0, AnimationPolicy::Tween(TweenSpec::linear(100)), move || {
        completions_clone.set(completions_clone.get() + 1);
    });

    pump(&runtime, 20);
    assert_eq!(completions.get(), 1);

    // Ticking long past completion must not re-fire.
    pump(&runtime, 20);
    assert_eq!(completions.get(), 1);
}

#[test]
fn tween_honors_its_delay() {
    let runtime = Runtime::new();
    let track = Track::new("staggered", 0.0, runtime.handle());

    track.animate_to(
        1.0,
        AnimationPolicy::Tween(TweenSpec::linear(100).with_delay(100)),
    );

    // Inside the delay window the value must not move.
    for _ in 0..5 {
        runtime.advance_millis(16);
        assert_eq!(track.value(), 0.0);
    }

    pump(&runtime, 15);
    assert!((track.value() - 1.0).abs() < f32::EPSILON);
}

#[test]
fn retargeting_drops_the_pending_completion() {
    let runtime = Runtime::new();
    let track = Track::new("retarget", 0.0, runtime.handle());
    let stale = Rc::new(Cell::new(false));
    let fresh = Rc::new(Cell::new(false));

    let stale_clone = Rc::clone(&stale);
    track.animate_with(1.0, AnimationPolicy::Tween(TweenSpec::linear(100)), move || {
        stale_clone.set(true);
    });
    pump(&runtime, 2);

    let fresh_clone = Rc::clone(&fresh);
    track.animate_with(0.5, AnimationPolicy::Tween(TweenSpec::linear(100)), move || {
        fresh_clone.set(true);
    });
    pump(&runtime, 20);

    assert!(!stale.get(), "superseded completion must never fire");
    assert!(fresh.get());
    assert!((track.value() - 0.5).abs() < f32::EPSILON);
}

#[test]
fn stop_halts_a_loop_with_no_further_callbacks() {
    let runtime = Runtime::new();
    let track = Track::new("pulse", 1.0, runtime.handle());
    let updates = Rc::new(Cell::new(0u32));

    let updates_clone = Rc::clone(&updates);
    let _watch = track.state().subscribe(move |_| {
        updates_clone.set(updates_clone.get() + 1);
    });

    track.run_loop(LoopSpec::pulse(1.0, 1.05, 100));
    pump(&runtime, 10);
    assert!(updates.get() > 0);

    track.stop();
    let frozen = updates.get();
    let value = track.value();

    pump(&runtime, 20);
    assert_eq!(updates.get(), frozen, "no update may land after stop()");
    assert_eq!(track.value(), value);
    assert!(!track.is_animating());
}

#[test]
fn alternate_loop_swings_between_its_bounds() {
    let runtime = Runtime::new();
    let track = Track::new("pulse", 1.0, runtime.handle());

    track.run_loop(LoopSpec::pulse(1.0, 1.05, 100));

    let mut peak = f32::MIN;
    let mut trough = f32::MAX;
    for _ in 0..40 {
        runtime.advance_millis(16);
        peak = peak.max(track.value());
        trough = trough.min(track.value());
    }

    assert!(peak > 1.04, "loop should approach its high bound, got {peak}");
    assert!(trough < 1.01, "loop should return toward its low bound, got {trough}");
    assert!(track.is_animating(), "loop runs until stopped");
}

#[test]
fn restart_loop_jumps_back_to_its_low_bound() {
    let runtime = Runtime::new();
    let track = Track::new("sweep", 0.0, runtime.handle());

    track.run_loop(LoopSpec::sweep(100));

    pump(&runtime, 5); // ~80ms: near the top of the first leg
    let late_first_leg = track.value();
    assert!(late_first_leg > 0.5);

    runtime.advance_millis(36); // into the second leg
    assert!(
        track.value() < late_first_leg,
        "restart mode should wrap around, not alternate"
    );
}

#[test]
fn spring_converges_and_stops_rescheduling() {
    let runtime = Runtime::new();
    let track = Track::new("snap-back", 120.0, runtime.handle());
    let completions = Rc::new(Cell::new(0u32));

    let completions_clone = Rc::clone(&completions);
    track.animate_with(
        0.0,
        AnimationPolicy::Spring(SpringSpec::default_spring()),
        move || completions_clone.set(completions_clone.get() + 1),
    );

    pump(&runtime, 120);
    assert!(
        track.value().abs() < 0.01,
        "spring should settle at target, got {}",
        track.value()
    );
    assert!(!track.is_animating());
    assert_eq!(completions.get(), 1);
}

#[test]
fn bouncy_spring_overshoots_before_settling() {
    let runtime = Runtime::new();
    let track = Track::new("bounce", 0.0, runtime.handle());

    track.animate_to(1.0, AnimationPolicy::Spring(SpringSpec::bouncy()));

    let mut overshoot = f32::MIN;
    for _ in 0..200 {
        runtime.advance_millis(16);
        overshoot = overshoot.max(track.value());
        if !track.is_animating() {
            break;
        }
    }

    assert!(overshoot > 1.0, "under-damped spring should overshoot");
    assert!((track.value() - 1.0).abs() < 0.01);
}

#[test]
fn snap_to_cancels_the_animation_in_flight() {
    let runtime = Runtime::new();
    let track = Track::new("offset", 0.0, runtime.handle());
    let completed = Rc::new(Cell::new(false));

    let completed_clone = Rc::clone(&completed);
    track.animate_with(1.0, AnimationPolicy::Tween(TweenSpec::linear(200)), move || {
        completed_clone.set(true);
    });
    pump(&runtime, 3);

    track.snap_to(0.0);
    assert_eq!(track.value(), 0.0);
    assert!(!track.is_animating());

    pump(&runtime, 20);
    assert_eq!(track.value(), 0.0);
    assert!(!completed.get());
}

#[test]
fn tween_with_easing_still_lands_exactly_on_target() {
    let runtime = Runtime::new();
    let track = Track::new("eased", 0.3, runtime.handle());

    track.animate_to(
        0.9,
        AnimationPolicy::Tween(TweenSpec::tween(150, Easing::FastOutSlowIn)),
    );
    pump(&runtime, 20);
    assert!((track.value() - 0.9).abs() < f32::EPSILON);
}

#[test]
fn specs_reject_zero_durations() {
    assert!(TweenSpec::linear(0).validate().is_err());
    assert!(TweenSpec::linear(100).validate().is_ok());
    assert!(LoopSpec::pulse(0.0, 1.0, 0).validate().is_err());
    assert!(AnimationPolicy::Loop(LoopSpec::sweep(0)).validate().is_err());
    assert!(AnimationPolicy::Spring(SpringSpec::default()).validate().is_ok());
}

#[test]
fn spring_presets_scale_as_documented() {
    assert_eq!(SpringSpec::default().damping_ratio, 1.0);
    assert!(SpringSpec::bouncy().damping_ratio < 1.0);
    assert!(SpringSpec::stiff().stiffness > SpringSpec::default().stiffness);

    // Friction 7 / tension 40 is the calibration point of the mapping.
    let mapped = SpringSpec::with_friction_tension(7.0, 40.0);
    assert!((mapped.damping_ratio - 1.0).abs() < 0.01);
    assert!((mapped.stiffness - 1500.0).abs() < 0.01);
}

#[test]
fn animations_degrade_to_snap_after_shutdown() {
    let runtime = Runtime::new();
    let track = Track::new("late", 0.0, runtime.handle());
    let completed = Rc::new(Cell::new(false));

    runtime.shutdown();

    let completed_clone = Rc::clone(&completed);
    track.animate_with(1.0, AnimationPolicy::Tween(TweenSpec::linear(100)), move || {
        completed_clone.set(true);
    });

    assert_eq!(track.value(), 1.0, "shut-down runtime finishes immediately");
    assert!(completed.get());
    assert!(!track.is_animating());
}
