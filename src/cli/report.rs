//! Run report - what the CLI records while a task executes

use crate::cli::output::format_step_line;
use crate::execution::{ActivityLog, TracingActivityLog};
use chrono::{DateTime, Utc};
use indicatif::ProgressBar;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::time::Duration;
use uuid::Uuid;

/// A step that completed during the run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepReport {
    pub description: String,
    pub duration_ms: u64,
}

/// Summary of one task run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub task: String,
    pub task_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub all_steps_executed: bool,
    pub steps: Vec<StepReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Activity log that traces, advances a progress bar and records each step
pub struct ConsoleActivityLog {
    tracing: TracingActivityLog,
    progress: ProgressBar,
    echo_steps: bool,
    steps: RefCell<Vec<StepReport>>,
}

impl ConsoleActivityLog {
    /// `echo_steps` prints one console line per completed step
    pub fn new(tracing: TracingActivityLog, progress: ProgressBar, echo_steps: bool) -> Self {
        Self {
            tracing,
            progress,
            echo_steps,
            steps: RefCell::new(Vec::new()),
        }
    }

    pub fn task(&self) -> &str {
        self.tracing.task()
    }

    pub fn progress(&self) -> &ProgressBar {
        &self.progress
    }

    /// Whether step lines bypass the progress bar
    ///
    /// A hidden bar (stderr is not a terminal) would drop them.
    pub fn prints_directly(&self) -> bool {
        self.echo_steps && self.progress.is_hidden()
    }

    /// Completed steps so far, in execution order
    pub fn steps(&self) -> Vec<StepReport> {
        self.steps.borrow().clone()
    }

    /// Build the final report of the run
    pub fn into_report(
        self,
        started_at: DateTime<Utc>,
        all_steps_executed: bool,
        error: Option<String>,
    ) -> RunReport {
        RunReport {
            task: self.tracing.task().to_string(),
            task_id: self.tracing.task_id(),
            started_at,
            finished_at: Utc::now(),
            all_steps_executed,
            steps: self.steps.into_inner(),
            error,
        }
    }
}

impl ActivityLog for ConsoleActivityLog {
    fn log_step(&self, description: &str, elapsed: Duration) {
        self.tracing.log_step(description, elapsed);
        if self.prints_directly() {
            println!("{}", format_step_line(description, elapsed));
        } else if self.echo_steps {
            self.progress.println(format_step_line(description, elapsed));
        }
        self.progress.inc(1);
        self.steps.borrow_mut().push(StepReport {
            description: description.to_string(),
            duration_ms: duration_ms(elapsed),
        });
    }
}

/// Milliseconds in `elapsed`, saturating at `u64::MAX`
pub fn duration_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
