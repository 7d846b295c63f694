//! Haptic feedback shim. Fire-and-forget: the platform sink either
//! vibrates or it doesn't, and nothing here ever reports failure back.

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticKind {
    Light,
    Medium,
    Heavy,
    Success,
    Warning,
    Error,
    Selection,
}

/// Platform hook. Implementations map kinds onto whatever the device
/// offers; absence of a sink silently drops the feedback.
pub trait HapticSink {
    fn vibrate(&self, kind: HapticKind);
}

struct HapticsInner {
    enabled: bool,
    sink: Option<Rc<dyn HapticSink>>,
}

/// Haptic feedback manager. Cloning shares the enabled flag and sink.
pub struct Haptics {
    inner: Rc<RefCell<HapticsInner>>,
}

impl Haptics {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(HapticsInner {
                enabled: true,
                sink: None,
            })),
        }
    }

    pub fn with_sink(sink: Rc<dyn HapticSink>) -> Self {
        let haptics = Self::new();
        haptics.set_sink(Some(sink));
        haptics
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.inner.borrow_mut().enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.borrow().enabled
    }

    pub fn set_sink(&self, sink: Option<Rc<dyn HapticSink>>) {
        self.inner.borrow_mut().sink = sink;
    }

    /// Fire-and-forget feedback. No return value, failure-silent.
    pub fn trigger(&self, kind: HapticKind) {
        let sink = {
            let inner = self.inner.borrow();
            if !inner.enabled {
                return;
            }
            inner.sink.clone()
        };
        match sink {
            Some(sink) => sink.vibrate(kind),
            None => log::trace!("haptic {kind:?} dropped: no sink installed"),
        }
    }
}

impl Default for Haptics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Haptics {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}
