use super::*;

use flick_core::Runtime;
use std::cell::Cell;
use std::rc::Rc;

fn pump(runtime: &Runtime, frames: u32) {
    for _ in 0..frames {
        runtime.advance_millis(16);
    }
}

#[test]
fn scale_style_dips_on_press_and_recovers_on_release() {
    let runtime = Runtime::new();
    let press = PressAnimator::new(runtime.handle(), PressStyle::Scale);

    press.press_in();
    pump(&runtime, 10);
    assert!((press.scale_value() - 0.95).abs() < f32::EPSILON);

    press.press_out();
    pump(&runtime, 10);
    assert!((press.scale_value() - 1.0).abs() < f32::EPSILON);
}

#[test]
fn bounce_style_overshoots_then_springs_home() {
    let runtime = Runtime::new();
    let press = PressAnimator::new(runtime.handle(), PressStyle::Bounce);

    press.press_in();
    pump(&runtime, 10);
    press.press_out();

    let mut overshoot = f32::MIN;
    for _ in 0..200 {
        runtime.advance_millis(16);
        overshoot = overshoot.max(press.scale_value());
    }

    assert!(overshoot > 1.05, "bounce should overshoot, peaked at {overshoot}");
    assert!((press.scale_value() - 1.0).abs() < 0.01);
}

#[test]
fn pulse_style_breathes_until_disabled() {
    let runtime = Runtime::new();
    let press = PressAnimator::new(runtime.handle(), PressStyle::Pulse);
    let updates = Rc::new(Cell::new(0u32));

    let updates_clone = Rc::clone(&updates);
    let _watch = press.scale().subscribe(move |_| {
        updates_clone.set(updates_clone.get() + 1);
    });

    pump(&runtime, 30);
    assert!(updates.get() > 0);
    let mut peak = f32::MIN;
    for _ in 0..80 {
        runtime.advance_millis(16);
        peak = peak.max(press.scale_value());
    }
    assert!(peak > 1.03, "pulse should approach its high bound");

    press.set_enabled(false);
    assert_eq!(press.scale_value(), 1.0, "disable snaps back to rest");
    let frozen = updates.get();
    pump(&runtime, 40);
    assert_eq!(updates.get(), frozen, "no frame may land after disable");
}

#[test]
fn re_enabling_a_pulse_restarts_the_loop() {
    let runtime = Runtime::new();
    let press = PressAnimator::new(runtime.handle(), PressStyle::Pulse);

    press.set_enabled(false);
    press.set_enabled(true);
    let mut peak = f32::MIN;
    for _ in 0..80 {
        runtime.advance_millis(16);
        peak = peak.max(press.scale_value());
    }
    assert!(peak > 1.03);
}

#[test]
fn presses_are_ignored_while_disabled_or_pulsing() {
    let runtime = Runtime::new();

    let press = PressAnimator::new(runtime.handle(), PressStyle::Scale);
    press.set_enabled(false);
    press.press_in();
    pump(&runtime, 10);
    assert_eq!(press.scale_value(), 1.0);

    let pulse = PressAnimator::new(runtime.handle(), PressStyle::Pulse);
    pulse.press_in(); // no dip: the loop owns the track
    pump(&runtime, 3);
    assert!(pulse.scale_value() >= 1.0);
}

#[test]
fn stop_halts_the_track_for_teardown() {
    let runtime = Runtime::new();
    let press = PressAnimator::new(runtime.handle(), PressStyle::Pulse);

    pump(&runtime, 10);
    press.stop();
    let value = press.scale_value();
    pump(&runtime, 20);
    assert_eq!(press.scale_value(), value);
}
