//! Expandable action menu: a collapsed/expanded state machine whose
//! transition drives one progress track, with every secondary action's
//! motion derived from that single source of truth.
//!
//! The discrete state flips synchronously in `toggle`; only the progress
//! and rotation tracks animate. Timers and frames never mutate the state.

use flick_animation::{
    interpolate, AnimationPolicy, Extrapolate, SpringSpec, Track, TweenSpec,
};
use flick_core::{ConfigError, RuntimeHandle, State};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Collapsed,
    Expanded,
}

/// One secondary action hanging off the main trigger.
pub struct MenuAction {
    pub id: String,
    pub icon: String,
    pub label: String,
    pub on_press: Rc<dyn Fn()>,
}

impl MenuAction {
    pub fn new(
        id: impl Into<String>,
        icon: impl Into<String>,
        label: impl Into<String>,
        on_press: impl Fn() + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            icon: icon.into(),
            label: label.into(),
            on_press: Rc::new(on_press),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionMenuConfig {
    /// Vertical distance between stacked secondary actions.
    pub base_spacing: f32,
    /// Main-trigger rotation when fully expanded, in degrees.
    pub rotation_degrees: f32,
    /// Spring driving the shared expansion progress.
    pub expand_spring: SpringSpec,
    /// Fixed duration of the rotation leg of the transition.
    pub rotate_duration_millis: u64,
    /// Scale dip of the main trigger's press feedback.
    pub press_dip_scale: f32,
    /// Duration of each half of the press feedback sequence.
    pub press_step_millis: u64,
}

impl ActionMenuConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_spacing.is_finite() || self.base_spacing <= 0.0 {
            return Err(ConfigError::NonPositiveDimension(self.base_spacing));
        }
        if self.rotate_duration_millis == 0 {
            return Err(ConfigError::NonPositiveDuration(self.rotate_duration_millis));
        }
        if self.press_step_millis == 0 {
            return Err(ConfigError::NonPositiveDuration(self.press_step_millis));
        }
        Ok(())
    }
}

impl Default for ActionMenuConfig {
    fn default() -> Self {
        Self {
            base_spacing: 70.0,
            rotation_degrees: 45.0,
            expand_spring: SpringSpec::with_friction_tension(5.0, 40.0),
            rotate_duration_millis: 200,
            press_dip_scale: 0.9,
            press_step_millis: 100,
        }
    }
}

struct MenuInner {
    config: ActionMenuConfig,
    state: MenuState,
    progress: Track,
    rotation: Track,
    press_scale: Track,
    actions: Vec<MenuAction>,
    on_main_press: Option<Rc<dyn Fn()>>,
}

/// Floating-action-button style menu controller. Cloning shares the menu.
pub struct ActionMenu {
    inner: Rc<RefCell<MenuInner>>,
}

impl ActionMenu {
    pub fn new(runtime: RuntimeHandle, config: ActionMenuConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let inner = MenuInner {
            config,
            state: MenuState::Collapsed,
            progress: Track::new("menu-progress", 0.0, runtime.clone()),
            rotation: Track::new("menu-rotation", 0.0, runtime.clone()),
            press_scale: Track::new("menu-press-scale", 1.0, runtime),
            actions: Vec::new(),
            on_main_press: None,
        };
        Ok(Self {
            inner: Rc::new(RefCell::new(inner)),
        })
    }

    /// Replace the registered secondary actions.
    pub fn set_actions(&self, actions: Vec<MenuAction>) {
        self.inner.borrow_mut().actions = actions;
    }

    /// Direct action invoked by the main trigger when no secondary actions
    /// are registered.
    pub fn set_main_action(&self, on_press: impl Fn() + 'static) {
        self.inner.borrow_mut().on_main_press = Some(Rc::new(on_press));
    }

    pub fn state(&self) -> MenuState {
        self.inner.borrow().state
    }

    pub fn is_expanded(&self) -> bool {
        self.inner.borrow().state == MenuState::Expanded
    }

    pub fn action_count(&self) -> usize {
        self.inner.borrow().actions.len()
    }

    /// Flip the state and retarget the shared progress and rotation
    /// tracks. All secondary-action motion follows the progress track, so
    /// the whole transition stays synchronized to one source of truth.
    pub fn toggle(&self) {
        let (target, progress, rotation, spring, rotate_millis) = {
            let mut inner = self.inner.borrow_mut();
            let target = match inner.state {
                MenuState::Collapsed => {
                    inner.state = MenuState::Expanded;
                    1.0
                }
                MenuState::Expanded => {
                    inner.state = MenuState::Collapsed;
                    0.0
                }
            };
            log::debug!("action menu -> {:?}", inner.state);
            (
                target,
                inner.progress.clone(),
                inner.rotation.clone(),
                inner.config.expand_spring,
                inner.config.rotate_duration_millis,
            )
        };
        progress.animate_to(target, AnimationPolicy::Spring(spring));
        rotation.animate_to(
            target,
            AnimationPolicy::Tween(TweenSpec::linear(rotate_millis)),
        );
    }

    /// Main trigger press: plays the press feedback, then either invokes
    /// the direct action (zero secondary actions registered) or toggles
    /// the menu (one or more). Never both.
    pub fn press_main(&self) {
        self.play_press_feedback();
        let direct = {
            let inner = self.inner.borrow();
            if inner.actions.is_empty() {
                inner.on_main_press.clone()
            } else {
                None
            }
        };
        match direct {
            Some(on_press) => on_press(),
            None => {
                if self.action_count() > 0 {
                    self.toggle();
                }
            }
        }
    }

    /// Secondary action press: invokes the action's own callback, then
    /// collapses unconditionally. The collapse is not guarded on whatever
    /// the callback did.
    pub fn press_secondary(&self, index: usize) {
        let on_press = {
            let inner = self.inner.borrow();
            if inner.state != MenuState::Expanded {
                return;
            }
            inner.actions.get(index).map(|action| Rc::clone(&action.on_press))
        };
        let Some(on_press) = on_press else { return };
        on_press();
        self.collapse();
    }

    /// Backdrop tap while expanded: collapse only, no action fires.
    pub fn press_backdrop(&self) {
        if self.is_expanded() {
            self.collapse();
        }
    }

    fn collapse(&self) {
        let (progress, rotation, spring, rotate_millis) = {
            let mut inner = self.inner.borrow_mut();
            inner.state = MenuState::Collapsed;
            (
                inner.progress.clone(),
                inner.rotation.clone(),
                inner.config.expand_spring,
                inner.config.rotate_duration_millis,
            )
        };
        progress.animate_to(0.0, AnimationPolicy::Spring(spring));
        rotation.animate_to(
            0.0,
            AnimationPolicy::Tween(TweenSpec::linear(rotate_millis)),
        );
    }

    fn play_press_feedback(&self) {
        let (press_scale, dip, step) = {
            let inner = self.inner.borrow();
            (
                inner.press_scale.clone(),
                inner.config.press_dip_scale,
                inner.config.press_step_millis,
            )
        };
        let rebound = press_scale.clone();
        press_scale.animate_with(
            dip,
            AnimationPolicy::Tween(TweenSpec::linear(step)),
            move || {
                rebound.animate_to(1.0, AnimationPolicy::Tween(TweenSpec::linear(step)));
            },
        );
    }

    /// Shared expansion progress handle.
    pub fn progress(&self) -> State<f32> {
        self.inner.borrow().progress.state()
    }

    /// Main-trigger rotation in degrees.
    pub fn rotation_degrees(&self) -> f32 {
        let inner = self.inner.borrow();
        inner.rotation.value() * inner.config.rotation_degrees
    }

    /// Main-trigger press-feedback scale.
    pub fn main_scale(&self) -> f32 {
        self.inner.borrow().press_scale.value()
    }

    /// Vertical offset of secondary action `index` (0 is nearest the
    /// trigger), proportional to the shared progress.
    pub fn action_offset(&self, index: usize) -> f32 {
        let inner = self.inner.borrow();
        -(inner.config.base_spacing * (index + 1) as f32) * inner.progress.value()
    }

    /// Secondary-action alpha. Deliberately two-phase: the first half of
    /// the transition reveals nothing, then alpha ramps to one.
    pub fn action_opacity(&self) -> f32 {
        let progress = self.inner.borrow().progress.value();
        interpolate(
            progress,
            &[0.0, 0.5, 1.0],
            &[0.0, 0.0, 1.0],
            Extrapolate::Clamp,
        )
    }

    /// Secondary-action scale across the whole transition.
    pub fn action_scale(&self) -> f32 {
        let progress = self.inner.borrow().progress.value();
        interpolate(progress, &[0.0, 1.0], &[0.5, 1.0], Extrapolate::Clamp)
    }

    /// Horizontal slide of the secondary-action labels.
    pub fn label_shift(&self) -> f32 {
        let progress = self.inner.borrow().progress.value();
        interpolate(progress, &[0.0, 1.0], &[20.0, 0.0], Extrapolate::Clamp)
    }

    /// The translucent full-surface backdrop exists only while the
    /// discrete state is expanded; it vanishes the instant a collapse is
    /// requested so a mid-collapse tap cannot reach it.
    pub fn backdrop_visible(&self) -> bool {
        self.is_expanded()
    }

    /// Backdrop alpha, scaled off the shared progress.
    pub fn backdrop_opacity(&self) -> f32 {
        let progress = self.inner.borrow().progress.value();
        interpolate(progress, &[0.0, 1.0], &[0.0, 0.3], Extrapolate::Clamp)
    }

    /// Ripple emanating from the main trigger while the menu opens.
    pub fn ripple_scale(&self) -> f32 {
        let progress = self.inner.borrow().progress.value();
        interpolate(progress, &[0.0, 1.0], &[1.0, 2.0], Extrapolate::Clamp)
    }

    pub fn ripple_opacity(&self) -> f32 {
        let progress = self.inner.borrow().progress.value();
        interpolate(
            progress,
            &[0.0, 0.5, 1.0],
            &[0.0, 0.5, 0.0],
            Extrapolate::Clamp,
        )
    }
}

impl Clone for ActionMenu {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
#[path = "tests/action_menu_tests.rs"]
mod tests;
