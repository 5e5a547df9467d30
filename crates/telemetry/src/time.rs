// Path: crates/telemetry/src/time.rs
use crate::sinks::IdentityMetricsSink;
use std::time::Instant;

/// Reports the lifetime of the guard as a resolution duration when dropped.
pub struct Timer<'a> {
    sink: &'a dyn IdentityMetricsSink,
    start: Instant,
}

impl<'a> Timer<'a> {
    pub fn new(sink: &'a dyn IdentityMetricsSink) -> Self {
        Self {
            sink,
            start: Instant::now(),
        }
    }
}

impl Drop for Timer<'_> {
    fn drop(&mut self) {
        self.sink
            .observe_resolution_duration(self.start.elapsed().as_secs_f64());
    }
}
