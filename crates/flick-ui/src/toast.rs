//! Transient notification queue.
//!
//! The queue is an ordered collection plus a publish mechanism; every
//! entry owns its own entrance/exit tracks and auto-dismiss timer, so
//! dismissing one entry never disturbs its neighbours. `dismiss` is
//! idempotent, which resolves the race between the auto-expiry timer and
//! a manual dismissal: whichever runs second finds the entry gone (or
//! already exiting) and does nothing.

use flick_animation::{AnimationPolicy, SpringSpec, Track, TweenSpec};
use flick_core::{set_timeout, RuntimeHandle, State, TimerRegistration};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Default time on screen before auto-dismissal.
pub const DEFAULT_TOAST_DURATION_MILLIS: u64 = 3000;
/// Off-screen vertical origin of the entrance/exit animation.
const HIDDEN_TRANSLATE_Y: f32 = -100.0;
/// Duration of the exit (and the entrance fade) leg.
const FADE_DURATION_MILLIS: u64 = 200;

pub type ToastId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

/// Optional action button on a toast.
pub struct ToastAction {
    pub label: String,
    pub on_press: Rc<dyn Fn()>,
}

impl ToastAction {
    pub fn new(label: impl Into<String>, on_press: impl Fn() + 'static) -> Self {
        Self {
            label: label.into(),
            on_press: Rc::new(on_press),
        }
    }
}

/// Parameters for one notification.
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub duration_millis: u64,
    pub action: Option<ToastAction>,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            duration_millis: DEFAULT_TOAST_DURATION_MILLIS,
            action: None,
        }
    }

    pub fn with_duration(mut self, duration_millis: u64) -> Self {
        self.duration_millis = duration_millis;
        self
    }

    pub fn with_action(mut self, action: ToastAction) -> Self {
        self.action = Some(action);
        self
    }
}

/// Renderer-facing snapshot of one visible entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastView {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    pub action_label: Option<String>,
}

/// Live animation handles for one visible entry.
pub struct ToastMotion {
    pub translate_y: State<f32>,
    pub opacity: State<f32>,
    pub scale: State<f32>,
}

struct ToastEntry {
    id: ToastId,
    toast: Toast,
    timer: Option<TimerRegistration>,
    translate_y: Track,
    opacity: Track,
    scale: Track,
    exiting: bool,
}

struct QueueInner {
    runtime: RuntimeHandle,
    next_id: ToastId,
    entries: Vec<ToastEntry>,
    next_subscriber_id: u64,
    subscribers: Vec<(u64, Rc<dyn Fn()>)>,
}

/// Ordered, auto-expiring notification queue. Cloning shares the queue;
/// inject one per process (see [`install`]) or per test.
pub struct ToastQueue {
    inner: Rc<RefCell<QueueInner>>,
}

impl ToastQueue {
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self {
            inner: Rc::new(RefCell::new(QueueInner {
                runtime,
                next_id: 1,
                entries: Vec::new(),
                next_subscriber_id: 1,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Append a toast, start its entrance animation, and arm its
    /// auto-dismiss timer. Returns the entry's identity.
    pub fn enqueue(&self, toast: Toast) -> ToastId {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;

            let runtime = inner.runtime.clone();
            let translate_y = Track::new("toast-translate-y", HIDDEN_TRANSLATE_Y, runtime.clone());
            let opacity = Track::new("toast-opacity", 0.0, runtime.clone());
            let scale = Track::new("toast-scale", 0.9, runtime.clone());

            translate_y.animate_to(
                0.0,
                AnimationPolicy::Spring(SpringSpec::with_friction_tension(8.0, 50.0)),
            );
            opacity.animate_to(
                1.0,
                AnimationPolicy::Tween(TweenSpec::linear(FADE_DURATION_MILLIS)),
            );
            scale.animate_to(
                1.0,
                AnimationPolicy::Spring(SpringSpec::with_friction_tension(5.0, 50.0)),
            );

            let duration = toast.duration_millis;
            let weak = Rc::downgrade(&self.inner);
            let timer = set_timeout(&runtime, duration, move || {
                Self::dismiss_inner(&weak, id);
            });

            inner.entries.push(ToastEntry {
                id,
                toast,
                timer: Some(timer),
                translate_y,
                opacity,
                scale,
                exiting: false,
            });
            log::debug!("toast {id} enqueued");
            id
        };
        self.notify();
        id
    }

    /// Dismiss by id. Benign no-op when the entry is unknown or already
    /// exiting; otherwise cancels the pending auto-dismiss timer, plays
    /// the exit animation, and removes the entry when it completes.
    pub fn dismiss(&self, id: ToastId) {
        Self::dismiss_inner(&Rc::downgrade(&self.inner), id);
    }

    /// Tap-to-dismiss routes straight through [`ToastQueue::dismiss`].
    pub fn tap(&self, id: ToastId) {
        self.dismiss(id);
    }

    /// Action-button press: the entry's callback runs first, then the
    /// dismissal is requested.
    pub fn press_action(&self, id: ToastId) {
        let on_press = {
            let inner = self.inner.borrow();
            inner
                .entries
                .iter()
                .find(|entry| entry.id == id && !entry.exiting)
                .and_then(|entry| entry.toast.action.as_ref())
                .map(|action| Rc::clone(&action.on_press))
        };
        if let Some(on_press) = on_press {
            on_press();
        }
        self.dismiss(id);
    }

    pub fn success(&self, message: impl Into<String>) -> ToastId {
        self.enqueue(Toast::new(message, ToastKind::Success))
    }

    pub fn error(&self, message: impl Into<String>) -> ToastId {
        self.enqueue(Toast::new(message, ToastKind::Error))
    }

    pub fn warning(&self, message: impl Into<String>) -> ToastId {
        self.enqueue(Toast::new(message, ToastKind::Warning))
    }

    pub fn info(&self, message: impl Into<String>) -> ToastId {
        self.enqueue(Toast::new(message, ToastKind::Info))
    }

    /// Snapshot of the visible entries in insertion order (oldest first).
    pub fn entries(&self) -> Vec<ToastView> {
        self.inner
            .borrow()
            .entries
            .iter()
            .map(|entry| ToastView {
                id: entry.id,
                message: entry.toast.message.clone(),
                kind: entry.toast.kind,
                action_label: entry
                    .toast
                    .action
                    .as_ref()
                    .map(|action| action.label.clone()),
            })
            .collect()
    }

    /// Live animation handles for one entry, if it is still present.
    pub fn motion(&self, id: ToastId) -> Option<ToastMotion> {
        self.inner
            .borrow()
            .entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| ToastMotion {
                translate_y: entry.translate_y.state(),
                opacity: entry.opacity.state(),
                scale: entry.scale.state(),
            })
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().entries.is_empty()
    }

    /// Register a change callback fired on enqueue and on removal.
    pub fn subscribe(&self, on_change: impl Fn() + 'static) -> SubscriberRegistration {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_subscriber_id;
            inner.next_subscriber_id += 1;
            inner.subscribers.push((id, Rc::new(on_change)));
            id
        };
        SubscriberRegistration {
            queue: Rc::downgrade(&self.inner),
            id: Some(id),
        }
    }

    fn dismiss_inner(weak: &Weak<RefCell<QueueInner>>, id: ToastId) {
        let Some(inner_rc) = weak.upgrade() else { return };
        let exit = {
            let mut inner = inner_rc.borrow_mut();
            let Some(entry) = inner.entries.iter_mut().find(|entry| entry.id == id) else {
                return;
            };
            if entry.exiting {
                return;
            }
            entry.exiting = true;
            // Cancelling before the exit closes the double-removal race
            // with the auto-dismiss timer.
            entry.timer.take();
            (entry.translate_y.clone(), entry.opacity.clone())
        };
        log::debug!("toast {id} dismissed");

        let (translate_y, opacity) = exit;
        translate_y.animate_to(
            HIDDEN_TRANSLATE_Y,
            AnimationPolicy::Tween(TweenSpec::linear(FADE_DURATION_MILLIS)),
        );
        let weak = weak.clone();
        opacity.animate_with(
            0.0,
            AnimationPolicy::Tween(TweenSpec::linear(FADE_DURATION_MILLIS)),
            move || {
                Self::remove_entry(&weak, id);
            },
        );
    }

    fn remove_entry(weak: &Weak<RefCell<QueueInner>>, id: ToastId) {
        let Some(inner_rc) = weak.upgrade() else { return };
        let subscribers = {
            let mut inner = inner_rc.borrow_mut();
            let before = inner.entries.len();
            inner.entries.retain(|entry| entry.id != id);
            if inner.entries.len() == before {
                return;
            }
            inner
                .subscribers
                .iter()
                .map(|(_, f)| Rc::clone(f))
                .collect::<SmallVec<[_; 4]>>()
        };
        for subscriber in subscribers {
            subscriber();
        }
    }

    fn notify(&self) {
        let subscribers: SmallVec<[Rc<dyn Fn()>; 4]> = {
            let inner = self.inner.borrow();
            inner.subscribers.iter().map(|(_, f)| Rc::clone(f)).collect()
        };
        for subscriber in subscribers {
            subscriber();
        }
    }
}

impl Clone for ToastQueue {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

/// Removes its subscriber on `cancel()` or drop.
pub struct SubscriberRegistration {
    queue: Weak<RefCell<QueueInner>>,
    id: Option<u64>,
}

impl SubscriberRegistration {
    pub fn cancel(mut self) {
        self.remove();
    }

    fn remove(&mut self) {
        let Some(id) = self.id.take() else { return };
        if let Some(inner) = self.queue.upgrade() {
            let mut inner = inner.borrow_mut();
            if let Some(index) = inner
                .subscribers
                .iter()
                .position(|(subscriber_id, _)| *subscriber_id == id)
            {
                inner.subscribers.remove(index);
            }
        }
    }
}

impl Drop for SubscriberRegistration {
    fn drop(&mut self) {
        self.remove();
    }
}

thread_local! {
    static ACTIVE_QUEUE: RefCell<Option<ToastQueue>> = const { RefCell::new(None) };
}

/// Install the process-wide queue, returning any previous one.
pub fn install(queue: ToastQueue) -> Option<ToastQueue> {
    ACTIVE_QUEUE.with(|active| active.borrow_mut().replace(queue))
}

/// Remove the process-wide queue.
pub fn uninstall() -> Option<ToastQueue> {
    ACTIVE_QUEUE.with(|active| active.borrow_mut().take())
}

/// Run `f` against the installed queue, if any. Call sites anywhere in
/// the process get ergonomic access without threading the handle through.
pub fn with_toasts<R>(f: impl FnOnce(&ToastQueue) -> R) -> Option<R> {
    ACTIVE_QUEUE.with(|active| active.borrow().as_ref().map(f))
}

#[cfg(test)]
#[path = "tests/toast_tests.rs"]
mod tests;
