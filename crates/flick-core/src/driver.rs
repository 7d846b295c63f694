use crate::runtime::{Runtime, RuntimeHandle};
use web_time::Instant;

/// Maps wall-clock time onto the runtime's logical clock for embeddings
/// that tick from a real display loop. Tests drive [`Runtime::tick`]
/// directly and never touch this.
pub struct FrameDriver {
    runtime: Runtime,
    origin: Instant,
}

impl FrameDriver {
    pub fn new(runtime: Runtime) -> Self {
        Self {
            runtime,
            origin: Instant::now(),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    /// Call once per display frame.
    pub fn frame(&self) {
        let elapsed = self.origin.elapsed();
        self.runtime.tick(elapsed.as_nanos() as u64);
    }
}
