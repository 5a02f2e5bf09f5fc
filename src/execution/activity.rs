//! Activity logging for completed steps

use crate::execution::profiler::format_elapsed;
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

/// Logging facility the executor reports completed steps to
///
/// Implementations must not fail; the executor relies on logging never
/// masking a step error.
pub trait ActivityLog {
    fn log_step(&self, description: &str, elapsed: Duration);
}

impl<T: ActivityLog + ?Sized> ActivityLog for &T {
    fn log_step(&self, description: &str, elapsed: Duration) {
        (**self).log_step(description, elapsed)
    }
}

impl<T: ActivityLog + ?Sized> ActivityLog for Box<T> {
    fn log_step(&self, description: &str, elapsed: Duration) {
        (**self).log_step(description, elapsed)
    }
}

/// Activity log backed by `tracing`, scoped to one task
#[derive(Debug, Clone)]
pub struct TracingActivityLog {
    task: String,
    task_id: Uuid,
}

impl TracingActivityLog {
    /// Create a log for a task with a fresh task ID
    pub fn new(task: impl Into<String>) -> Self {
        Self::with_task_id(task, Uuid::new_v4())
    }

    pub fn with_task_id(task: impl Into<String>, task_id: Uuid) -> Self {
        Self {
            task: task.into(),
            task_id,
        }
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn task_id(&self) -> Uuid {
        self.task_id
    }
}

impl ActivityLog for TracingActivityLog {
    fn log_step(&self, description: &str, elapsed: Duration) {
        let span = tracing::info_span!("compute_task", task = %self.task, task_id = %self.task_id);
        let _entered = span.enter();
        info!("{} | time={}", description, format_elapsed(elapsed));
    }
}
