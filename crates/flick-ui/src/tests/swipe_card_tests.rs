use super::*;

use crate::haptics::HapticSink;
use flick_core::Runtime;
use flick_gesture::SwipeConfig;
use std::cell::RefCell;
use std::rc::Rc;

fn pump(runtime: &Runtime, frames: u32) {
    for _ in 0..frames {
        runtime.advance_millis(16);
    }
}

fn card_with_log(runtime: &Runtime) -> (SwipeCard, Rc<RefCell<Vec<GestureEvent>>>) {
    let events = Rc::new(RefCell::new(Vec::new()));
    let events_clone = Rc::clone(&events);
    let config = SwipeConfig::new(400.0).expect("valid config");
    let card = SwipeCard::new(runtime.handle(), config, move |event| {
        events_clone.borrow_mut().push(event);
    })
    .expect("valid card");
    (card, events)
}

struct RecordingSink {
    kinds: RefCell<Vec<HapticKind>>,
}

impl HapticSink for RecordingSink {
    fn vibrate(&self, kind: HapticKind) {
        self.kinds.borrow_mut().push(kind);
    }
}

#[test]
fn derived_values_rest_at_identity() {
    let runtime = Runtime::new();
    let (card, _events) = card_with_log(&runtime);

    assert_eq!(card.rotation_degrees(), 0.0);
    assert_eq!(card.opacity(), 1.0);
    assert_eq!(card.left_indicator_opacity(), 0.0);
    assert_eq!(card.right_indicator_opacity(), 0.0);
}

#[test]
fn dragging_right_tilts_and_fades_proportionally() {
    let runtime = Runtime::new();
    let (card, _events) = card_with_log(&runtime);

    card.on_drag_start();
    card.on_drag_move(100.0, 0.0); // half of the half-width window
    assert!((card.rotation_degrees() - 5.0).abs() < 0.01);
    assert!((card.opacity() - 0.75).abs() < 0.01);
    assert!(card.rotation_degrees() > 0.0);
}

#[test]
fn rotation_and_opacity_clamp_past_half_width() {
    let runtime = Runtime::new();
    let (card, _events) = card_with_log(&runtime);

    card.on_drag_start();
    card.on_drag_move(-350.0, 0.0);
    assert_eq!(card.rotation_degrees(), -10.0);
    assert_eq!(card.opacity(), 0.5);
}

#[test]
fn indicators_saturate_at_the_commit_threshold() {
    let runtime = Runtime::new();
    let (card, _events) = card_with_log(&runtime);

    card.on_drag_start();
    card.on_drag_move(-100.0, 0.0); // exactly the threshold
    assert_eq!(card.left_indicator_opacity(), 1.0);
    assert_eq!(card.right_indicator_opacity(), 0.0);

    card.on_drag_move(50.0, 0.0);
    assert_eq!(card.left_indicator_opacity(), 0.0);
    assert!((card.right_indicator_opacity() - 0.5).abs() < 0.01);
}

#[test]
fn committed_swipe_reaches_the_owner_after_the_exit() {
    let runtime = Runtime::new();
    let (card, events) = card_with_log(&runtime);

    card.on_drag_start();
    card.on_drag_move(150.0, 0.0);
    card.on_drag_end(150.0, 0.0);
    assert!(events.borrow().is_empty());

    pump(&runtime, 20);
    assert_eq!(events.borrow().as_slice(), &[GestureEvent::SwipeRight]);
    assert_eq!(card.offset_x().get(), 0.0);
    assert_eq!(card.rotation_degrees(), 0.0);
}

#[test]
fn committed_swipe_triggers_a_haptic_before_the_owner_handler() {
    let runtime = Runtime::new();
    let (card, events) = card_with_log(&runtime);
    let sink = Rc::new(RecordingSink {
        kinds: RefCell::new(Vec::new()),
    });
    card.set_haptics(Haptics::with_sink(sink.clone()));

    card.on_drag_start();
    card.on_drag_end(-150.0, 0.0);
    pump(&runtime, 20);

    assert_eq!(sink.kinds.borrow().as_slice(), &[HapticKind::Medium]);
    assert_eq!(events.borrow().as_slice(), &[GestureEvent::SwipeLeft]);
}

#[test]
fn double_tap_triggers_a_light_haptic() {
    let runtime = Runtime::new();
    let (card, events) = card_with_log(&runtime);
    let sink = Rc::new(RecordingSink {
        kinds: RefCell::new(Vec::new()),
    });
    card.set_haptics(Haptics::with_sink(sink.clone()));

    card.on_drag_start();
    card.on_drag_end(0.0, 0.0);
    runtime.advance_millis(100);
    card.on_drag_start();
    card.on_drag_end(0.0, 0.0);

    assert_eq!(sink.kinds.borrow().as_slice(), &[HapticKind::Light]);
    assert!(events.borrow().contains(&GestureEvent::DoubleTap));
}

#[test]
fn snap_back_fires_no_haptic() {
    let runtime = Runtime::new();
    let (card, events) = card_with_log(&runtime);
    let sink = Rc::new(RecordingSink {
        kinds: RefCell::new(Vec::new()),
    });
    card.set_haptics(Haptics::with_sink(sink.clone()));

    card.on_drag_start();
    card.on_drag_move(50.0, 0.0);
    card.on_drag_end(50.0, 0.0);
    pump(&runtime, 60);

    assert!(sink.kinds.borrow().is_empty());
    assert_eq!(events.borrow().as_slice(), &[GestureEvent::SnappedBack]);
}
