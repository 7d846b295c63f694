//! Core runtime for Flick: a single-threaded, tick-driven scheduler with
//! frame callbacks, one-shot timers, and observable state cells.

pub mod driver;
pub mod error;
pub mod frame_clock;
pub mod runtime;
pub mod state;
pub mod timer;

pub use driver::FrameDriver;
pub use error::ConfigError;
pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use runtime::{FrameCallbackId, Runtime, RuntimeHandle, TimerId};
pub use state::{MutableState, State, WatcherRegistration};
pub use timer::{set_timeout, TimerRegistration};

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
