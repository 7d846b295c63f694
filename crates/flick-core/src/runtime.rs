//! Tick-driven runtime: logical clock, frame callbacks, and one-shot timers.
//!
//! Everything in Flick runs on one logical thread. The embedding platform
//! calls [`Runtime::tick`] once per display frame (or a test advances the
//! clock by hand); due timers fire first, then the frame callbacks that were
//! registered before the tick began. No callback of any kind ever fires
//! outside `tick`, which is what makes cancellation race-free: cancelling a
//! timer or frame callback from inside another callback removes it before
//! the loop can reach it.

use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

/// Identifies a registered frame callback.
pub type FrameCallbackId = u64;

/// Identifies an armed timer.
pub type TimerId = u64;

type FrameCallback = Box<dyn FnOnce(u64)>;
type TimerCallback = Box<dyn FnOnce()>;

struct FrameEntry {
    id: FrameCallbackId,
    callback: FrameCallback,
}

struct TimerEntry {
    id: TimerId,
    deadline_nanos: u64,
    callback: TimerCallback,
}

struct RuntimeInner {
    now_nanos: u64,
    active: bool,
    next_frame_id: FrameCallbackId,
    next_timer_id: TimerId,
    frames: SmallVec<[FrameEntry; 8]>,
    timers: SmallVec<[TimerEntry; 8]>,
}

impl RuntimeInner {
    fn new() -> Self {
        Self {
            now_nanos: 0,
            active: true,
            next_frame_id: 1,
            next_timer_id: 1,
            frames: SmallVec::new(),
            timers: SmallVec::new(),
        }
    }
}

/// Owner of the tick loop. Created once per gesture surface or test; hand
/// out [`RuntimeHandle`]s to everything that needs to schedule work.
pub struct Runtime {
    inner: Rc<RefCell<RuntimeInner>>,
}

impl Runtime {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(RuntimeInner::new())),
        }
    }

    /// Cheap clonable handle for registering callbacks and timers.
    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            inner: Rc::clone(&self.inner),
        }
    }

    pub fn now_nanos(&self) -> u64 {
        self.inner.borrow().now_nanos
    }

    /// Advance the logical clock to `now_nanos`, fire due timers, then drain
    /// the frame callbacks registered before this tick. The clock never
    /// moves backwards; a stale `now_nanos` still drains callbacks at the
    /// current time.
    pub fn tick(&self, now_nanos: u64) {
        {
            let mut inner = self.inner.borrow_mut();
            if !inner.active {
                return;
            }
            if now_nanos > inner.now_nanos {
                inner.now_nanos = now_nanos;
            }
        }
        self.fire_due_timers();
        self.drain_frames();
    }

    /// Convenience for tests and frame-stepped embeddings.
    pub fn advance_millis(&self, delta_millis: u64) {
        let target = self.now_nanos() + delta_millis * 1_000_000;
        self.tick(target);
    }

    /// Tear down the runtime: every pending timer and frame callback is
    /// dropped without firing, and later registrations are refused.
    pub fn shutdown(&self) {
        let mut inner = self.inner.borrow_mut();
        if !inner.active {
            return;
        }
        log::trace!(
            "runtime shutdown: dropping {} frame callback(s), {} timer(s)",
            inner.frames.len(),
            inner.timers.len()
        );
        inner.active = false;
        inner.frames.clear();
        inner.timers.clear();
    }

    fn fire_due_timers(&self) {
        // Timers armed while firing get ids past the cutoff and wait for
        // the next tick, so a zero-delay timer cannot spin this loop.
        let cutoff = self.inner.borrow().next_timer_id;
        loop {
            let due = {
                let mut inner = self.inner.borrow_mut();
                let now = inner.now_nanos;
                let mut best: Option<usize> = None;
                for (index, timer) in inner.timers.iter().enumerate() {
                    if timer.id >= cutoff || timer.deadline_nanos > now {
                        continue;
                    }
                    best = match best {
                        Some(current)
                            if (inner.timers[current].deadline_nanos, inner.timers[current].id)
                                <= (timer.deadline_nanos, timer.id) =>
                        {
                            Some(current)
                        }
                        _ => Some(index),
                    };
                }
                best.map(|index| inner.timers.remove(index))
            };
            match due {
                Some(timer) => (timer.callback)(),
                None => break,
            }
        }
    }

    fn drain_frames(&self) {
        let (cutoff, now) = {
            let inner = self.inner.borrow();
            (inner.next_frame_id, inner.now_nanos)
        };
        loop {
            let entry = {
                let mut inner = self.inner.borrow_mut();
                inner
                    .frames
                    .iter()
                    .position(|frame| frame.id < cutoff)
                    .map(|index| inner.frames.remove(index))
            };
            match entry {
                Some(frame) => (frame.callback)(now),
                None => break,
            }
        }
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared handle to a [`Runtime`]. Cloning is an `Rc` bump.
#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Rc<RefCell<RuntimeInner>>,
}

impl RuntimeHandle {
    pub fn now_nanos(&self) -> u64 {
        self.inner.borrow().now_nanos
    }

    pub fn now_millis(&self) -> u64 {
        self.now_nanos() / 1_000_000
    }

    pub fn is_active(&self) -> bool {
        self.inner.borrow().active
    }

    /// Register a callback for the next tick. Fires at most once, with the
    /// tick's frame time in nanoseconds. Returns `None` after shutdown.
    pub fn register_frame_callback(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> Option<FrameCallbackId> {
        let mut inner = self.inner.borrow_mut();
        if !inner.active {
            return None;
        }
        let id = inner.next_frame_id;
        inner.next_frame_id += 1;
        inner.frames.push(FrameEntry {
            id,
            callback: Box::new(callback),
        });
        Some(id)
    }

    /// Remove a pending frame callback. Safe to call after it has fired.
    pub fn cancel_frame_callback(&self, id: FrameCallbackId) {
        let mut inner = self.inner.borrow_mut();
        if let Some(index) = inner.frames.iter().position(|frame| frame.id == id) {
            inner.frames.remove(index);
        }
    }

    /// Arm a one-shot timer firing `delay_millis` after the current logical
    /// time. Returns `None` after shutdown.
    pub fn set_timer(
        &self,
        delay_millis: u64,
        callback: impl FnOnce() + 'static,
    ) -> Option<TimerId> {
        let mut inner = self.inner.borrow_mut();
        if !inner.active {
            return None;
        }
        let id = inner.next_timer_id;
        inner.next_timer_id += 1;
        let deadline_nanos = inner.now_nanos + delay_millis * 1_000_000;
        inner.timers.push(TimerEntry {
            id,
            deadline_nanos,
            callback: Box::new(callback),
        });
        Some(id)
    }

    /// Disarm a pending timer. A timer that already fired (or was never
    /// armed) is ignored, which is what makes the explicit-dismiss vs.
    /// auto-expiry race benign: whichever side runs first wins and the
    /// other becomes a no-op.
    pub fn cancel_timer(&self, id: TimerId) {
        let mut inner = self.inner.borrow_mut();
        if let Some(index) = inner.timers.iter().position(|timer| timer.id == id) {
            inner.timers.remove(index);
        }
    }

    pub fn frame_clock(&self) -> crate::FrameClock {
        crate::FrameClock::new(self.clone())
    }
}
