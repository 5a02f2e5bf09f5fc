//! Step profiler - times individual steps

use std::time::{Duration, Instant};

/// Start/stop timer scoped to one step at a time
#[derive(Debug, Default)]
pub struct StepProfiler {
    started_at: Option<Instant>,
}

impl StepProfiler {
    pub fn new() -> Self {
        Self { started_at: None }
    }

    /// Start (or restart) the timer
    pub fn start(&mut self) {
        self.started_at = Some(Instant::now());
    }

    /// Stop the timer and return the time elapsed since the last `start()`
    pub fn stop(&mut self) -> Duration {
        self.started_at
            .take()
            .map(|started| started.elapsed())
            .unwrap_or_default()
    }
}

/// Format a duration the way activity log lines show it
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{}ms", elapsed.as_millis())
}
