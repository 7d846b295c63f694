//! Observable value cells.
//!
//! A [`MutableState`] is the writable side held by whatever drives the
//! value (an animation track, a controller); [`State`] is the read-only
//! handle a rendering layer polls each frame. Watchers are for discrete
//! consumers (queue subscribers, invalidation hooks) — high-frequency
//! paths read the value directly instead of subscribing.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub type WatcherId = u64;

struct StateInner<T> {
    value: T,
    next_watcher_id: WatcherId,
    watchers: Vec<(WatcherId, Rc<dyn Fn(&T)>)>,
}

/// Writable observable cell. Cloning shares the same underlying value.
pub struct MutableState<T> {
    inner: Rc<RefCell<StateInner<T>>>,
}

impl<T: Clone + 'static> MutableState<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(StateInner {
                value: initial,
                next_watcher_id: 1,
                watchers: Vec::new(),
            })),
        }
    }

    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Replace the value and notify watchers. Watchers run outside the
    /// borrow, so they may read or subscribe reentrantly.
    pub fn set_value(&self, value: T) {
        let notified: Vec<Rc<dyn Fn(&T)>> = {
            let mut inner = self.inner.borrow_mut();
            inner.value = value.clone();
            if inner.watchers.is_empty() {
                return;
            }
            inner.watchers.iter().map(|(_, f)| Rc::clone(f)).collect()
        };
        for watcher in notified {
            watcher(&value);
        }
    }

    pub fn as_state(&self) -> State<T> {
        State {
            inner: Rc::clone(&self.inner),
        }
    }

    pub fn subscribe(&self, watcher: impl Fn(&T) + 'static) -> WatcherRegistration {
        subscribe_inner(&self.inner, watcher)
    }
}

impl<T> Clone for MutableState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

/// Read-only handle to a [`MutableState`].
pub struct State<T> {
    inner: Rc<RefCell<StateInner<T>>>,
}

impl<T: Clone + 'static> State<T> {
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    pub fn subscribe(&self, watcher: impl Fn(&T) + 'static) -> WatcherRegistration {
        subscribe_inner(&self.inner, watcher)
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

fn subscribe_inner<T: 'static>(
    inner: &Rc<RefCell<StateInner<T>>>,
    watcher: impl Fn(&T) + 'static,
) -> WatcherRegistration {
    let id = {
        let mut cell = inner.borrow_mut();
        let id = cell.next_watcher_id;
        cell.next_watcher_id += 1;
        cell.watchers.push((id, Rc::new(watcher)));
        id
    };
    let weak: Weak<RefCell<StateInner<T>>> = Rc::downgrade(inner);
    WatcherRegistration {
        unregister: Some(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                let mut cell = inner.borrow_mut();
                if let Some(index) = cell.watchers.iter().position(|(wid, _)| *wid == id) {
                    cell.watchers.remove(index);
                }
            }
        })),
    }
}

/// Removes its watcher on `cancel()` or drop.
pub struct WatcherRegistration {
    unregister: Option<Box<dyn FnOnce()>>,
}

impl WatcherRegistration {
    pub fn cancel(mut self) {
        if let Some(unregister) = self.unregister.take() {
            unregister();
        }
    }
}

impl Drop for WatcherRegistration {
    fn drop(&mut self) {
        if let Some(unregister) = self.unregister.take() {
            unregister();
        }
    }
}
