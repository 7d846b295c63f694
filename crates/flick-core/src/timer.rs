use crate::runtime::{RuntimeHandle, TimerId};

/// Arm a one-shot timer and return its cancel-on-drop registration.
pub fn set_timeout(
    runtime: &RuntimeHandle,
    delay_millis: u64,
    callback: impl FnOnce() + 'static,
) -> TimerRegistration {
    match runtime.set_timer(delay_millis, callback) {
        Some(id) => TimerRegistration::new(runtime.clone(), id),
        None => TimerRegistration::inactive(runtime.clone()),
    }
}

/// Handle to an armed timer. Dropping it disarms the timer; cancelling
/// after the timer fired is a no-op.
pub struct TimerRegistration {
    runtime: RuntimeHandle,
    id: Option<TimerId>,
}

impl TimerRegistration {
    fn new(runtime: RuntimeHandle, id: TimerId) -> Self {
        Self {
            runtime,
            id: Some(id),
        }
    }

    fn inactive(runtime: RuntimeHandle) -> Self {
        Self { runtime, id: None }
    }

    pub fn is_active(&self) -> bool {
        self.id.is_some()
    }

    pub fn cancel(mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_timer(id);
        }
    }
}

impl Drop for TimerRegistration {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_timer(id);
        }
    }
}
