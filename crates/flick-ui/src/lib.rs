//! Interaction controllers for Flick.
//!
//! Everything here follows the same shape: a controller owns its discrete
//! state and animation tracks, the rendering layer polls derived values
//! per frame, and the owner receives discrete events through registered
//! callbacks. No controller renders anything itself.

pub mod action_menu;
pub mod entrance;
pub mod haptics;
pub mod press;
pub mod pull_refresh;
pub mod skeleton;
pub mod slider;
pub mod swipe_card;
pub mod toast;

pub use action_menu::{ActionMenu, ActionMenuConfig, MenuAction, MenuState};
pub use entrance::{stagger_delay, Entrance, EntranceConfig, EntranceVariant};
pub use haptics::{HapticKind, HapticSink, Haptics};
pub use press::{PressAnimator, PressStyle};
pub use pull_refresh::{PullToRefresh, PullToRefreshConfig, RefreshHint, RefreshPhase};
pub use skeleton::{Skeleton, SkeletonAnimation};
pub use slider::{SliderConfig, SnapSlider};
pub use swipe_card::SwipeCard;
pub use toast::{
    install, uninstall, with_toasts, SubscriberRegistration, Toast, ToastAction, ToastId,
    ToastKind, ToastMotion, ToastQueue, ToastView, DEFAULT_TOAST_DURATION_MILLIS,
};
