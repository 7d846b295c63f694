use super::*;

use flick_core::Runtime;
use std::cell::Cell;
use std::rc::Rc;

fn pump(runtime: &Runtime, frames: u32) {
    for _ in 0..frames {
        runtime.advance_millis(16);
    }
}

fn entrance(runtime: &Runtime, variant: EntranceVariant) -> Entrance {
    let config = EntranceConfig::new(variant, 400.0)
        .expect("valid config")
        .with_duration(200)
        .expect("valid duration");
    Entrance::new(runtime.handle(), config).expect("valid entrance")
}

#[test]
fn slide_variant_travels_from_the_edge_while_fading_in() {
    let runtime = Runtime::new();
    let card = entrance(&runtime, EntranceVariant::Slide);

    assert_eq!(card.translate_x(), 400.0);
    assert_eq!(card.opacity(), 0.0);

    card.play();
    pump(&runtime, 5);
    let mid_x = card.translate_x();
    assert!(mid_x > 0.0 && mid_x < 400.0);
    assert!(card.opacity() > 0.0 && card.opacity() < 1.0);

    pump(&runtime, 15);
    assert_eq!(card.translate_x(), 0.0);
    assert_eq!(card.opacity(), 1.0);
}

#[test]
fn scale_variant_grows_from_half_size_and_composes_with_press() {
    let runtime = Runtime::new();
    let card = entrance(&runtime, EntranceVariant::Scale);

    assert_eq!(card.entrance_scale(), 0.5);
    // Composition is multiplicative, never a replacement.
    assert!((card.scale_with_press(0.95) - 0.475).abs() < 0.001);

    card.play();
    pump(&runtime, 20);
    assert_eq!(card.entrance_scale(), 1.0);
    assert!((card.scale_with_press(0.95) - 0.95).abs() < 0.001);
}

#[test]
fn flip_variant_rotates_in_from_ninety_degrees() {
    let runtime = Runtime::new();
    let card = entrance(&runtime, EntranceVariant::Flip);

    assert_eq!(card.flip_degrees(), 90.0);
    card.play();
    pump(&runtime, 20);
    assert_eq!(card.flip_degrees(), 0.0);
}

#[test]
fn fade_variant_keeps_its_transforms_at_identity() {
    let runtime = Runtime::new();
    let card = entrance(&runtime, EntranceVariant::Fade);

    card.play();
    pump(&runtime, 5);
    assert_eq!(card.translate_x(), 0.0);
    assert_eq!(card.entrance_scale(), 1.0);
    assert_eq!(card.flip_degrees(), 0.0);
    assert!(card.opacity() > 0.0);
}

#[test]
fn overlay_flash_peaks_mid_reveal_and_clears() {
    let runtime = Runtime::new();
    let card = entrance(&runtime, EntranceVariant::Fade);

    card.play();
    let mut peak = f32::MIN;
    for _ in 0..20 {
        runtime.advance_millis(16);
        peak = peak.max(card.overlay_opacity());
    }
    assert!(peak > 0.05, "flash should appear mid-reveal");
    assert_eq!(card.overlay_opacity(), 0.0, "flash clears at full reveal");
}

#[test]
fn completion_fires_exactly_once() {
    let runtime = Runtime::new();
    let card = entrance(&runtime, EntranceVariant::Fade);
    let completions = Rc::new(Cell::new(0u32));

    let completions_clone = Rc::clone(&completions);
    card.play_with(move || completions_clone.set(completions_clone.get() + 1));

    pump(&runtime, 40);
    assert_eq!(completions.get(), 1);
}

#[test]
fn stagger_delays_scale_linearly_with_the_index() {
    assert_eq!(stagger_delay(0, 80), 0);
    assert_eq!(stagger_delay(1, 80), 80);
    assert_eq!(stagger_delay(5, 80), 400);
}

#[test]
fn staggered_cards_reveal_in_cascade_order() {
    let runtime = Runtime::new();
    let first = entrance(&runtime, EntranceVariant::Fade);
    let config = EntranceConfig::new(EntranceVariant::Fade, 400.0)
        .expect("valid config")
        .with_duration(200)
        .expect("valid duration")
        .with_delay(stagger_delay(1, 150));
    let second = Entrance::new(runtime.handle(), config).expect("valid entrance");

    first.play();
    second.play();

    pump(&runtime, 6); // ~96ms: inside the second card's delay
    assert!(first.opacity() > 0.0);
    assert_eq!(second.opacity(), 0.0, "staggered card holds during its delay");

    pump(&runtime, 30);
    assert_eq!(first.opacity(), 1.0);
    assert_eq!(second.opacity(), 1.0);
}

#[test]
fn config_rejects_degenerate_values() {
    assert!(EntranceConfig::new(EntranceVariant::Fade, 0.0).is_err());
    assert!(EntranceConfig::new(EntranceVariant::Fade, 400.0)
        .expect("valid config")
        .with_duration(0)
        .is_err());
}
