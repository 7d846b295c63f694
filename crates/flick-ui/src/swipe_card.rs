//! Swipeable card controller: a [`SwipeTracker`] plus the derived render
//! values (rotation, fade, swipe-direction indicators). The card never
//! paints anything; the rendering layer polls the derived values each
//! frame and the owner handler receives the discrete gesture events.

use crate::haptics::{HapticKind, Haptics};
use flick_animation::Interpolation;
use flick_core::{ConfigError, RuntimeHandle, State};
use flick_gesture::{GestureEvent, SwipeConfig, SwipeTracker};
use std::cell::RefCell;
use std::rc::Rc;

/// Peak rotation in degrees when the card reaches half the surface width.
const MAX_ROTATION_DEGREES: f32 = 10.0;
/// Content fade at the far edges of the interpolation window.
const EDGE_OPACITY: f32 = 0.5;

struct HandlerState {
    haptics: Option<Haptics>,
    handler: Rc<dyn Fn(GestureEvent)>,
}

struct CardInner {
    tracker: SwipeTracker,
    shared: Rc<RefCell<HandlerState>>,
    rotation: Interpolation,
    opacity: Interpolation,
    left_indicator: Interpolation,
    right_indicator: Interpolation,
}

/// Gesture-driven card that commits to a left/right swipe, snaps back, or
/// reports a double tap. Cloning shares the same card.
pub struct SwipeCard {
    inner: Rc<CardInner>,
}

impl SwipeCard {
    pub fn new(
        runtime: RuntimeHandle,
        config: SwipeConfig,
        handler: impl Fn(GestureEvent) + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let half = config.surface_width / 2.0;
        let threshold = config.threshold();

        let shared = Rc::new(RefCell::new(HandlerState {
            haptics: None,
            handler: Rc::new(handler),
        }));

        let shared_for_events = Rc::downgrade(&shared);
        let tracker = SwipeTracker::new(runtime, config, move |event| {
            let Some(shared) = shared_for_events.upgrade() else {
                return;
            };
            let (haptics, handler) = {
                let state = shared.borrow();
                (state.haptics.clone(), Rc::clone(&state.handler))
            };
            if let Some(haptics) = haptics {
                match event {
                    GestureEvent::SwipeLeft | GestureEvent::SwipeRight => {
                        haptics.trigger(HapticKind::Medium);
                    }
                    GestureEvent::DoubleTap => haptics.trigger(HapticKind::Light),
                    GestureEvent::SnappedBack => {}
                }
            }
            handler(event);
        })?;

        let inner = CardInner {
            tracker,
            shared,
            rotation: Interpolation::clamped(
                vec![-half, 0.0, half],
                vec![-MAX_ROTATION_DEGREES, 0.0, MAX_ROTATION_DEGREES],
            )?,
            opacity: Interpolation::clamped(
                vec![-half, 0.0, half],
                vec![EDGE_OPACITY, 1.0, EDGE_OPACITY],
            )?,
            left_indicator: Interpolation::clamped(vec![-threshold, 0.0], vec![1.0, 0.0])?,
            right_indicator: Interpolation::clamped(vec![0.0, threshold], vec![0.0, 1.0])?,
        };

        Ok(Self {
            inner: Rc::new(inner),
        })
    }

    /// Install a haptics manager; committed swipes and double taps then
    /// trigger feedback before the owner handler runs.
    pub fn set_haptics(&self, haptics: Haptics) {
        self.inner.shared.borrow_mut().haptics = Some(haptics);
    }

    pub fn on_drag_start(&self) {
        self.inner.tracker.on_drag_start();
    }

    pub fn on_drag_move(&self, dx: f32, dy: f32) {
        self.inner.tracker.on_drag_move(dx, dy);
    }

    pub fn on_drag_end(&self, dx: f32, dy: f32) {
        self.inner.tracker.on_drag_end(dx, dy);
    }

    /// Live horizontal offset handle.
    pub fn offset_x(&self) -> State<f32> {
        self.inner.tracker.offset_x()
    }

    /// Live vertical offset handle.
    pub fn offset_y(&self) -> State<f32> {
        self.inner.tracker.offset_y()
    }

    /// Card tilt in degrees, derived from the horizontal offset.
    pub fn rotation_degrees(&self) -> f32 {
        self.inner.rotation.sample(self.offset_x().get())
    }

    /// Content alpha, full at rest and faded toward both edges.
    pub fn opacity(&self) -> f32 {
        self.inner.opacity.sample(self.offset_x().get())
    }

    /// Alpha of the "pass" indicator shown while dragging left.
    pub fn left_indicator_opacity(&self) -> f32 {
        self.inner.left_indicator.sample(self.offset_x().get())
    }

    /// Alpha of the "like" indicator shown while dragging right.
    pub fn right_indicator_opacity(&self) -> f32 {
        self.inner.right_indicator.sample(self.offset_x().get())
    }

    pub fn is_dragging(&self) -> bool {
        self.inner.tracker.is_dragging()
    }
}

impl Clone for SwipeCard {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
#[path = "tests/swipe_card_tests.rs"]
mod tests;
