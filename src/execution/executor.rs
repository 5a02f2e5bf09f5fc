//! Step executor - runs every computation step of a task, in order

use crate::{
    core::ComputationSteps,
    execution::{activity::ActivityLog, profiler::StepProfiler},
};
use anyhow::Result;
use tracing::debug;

/// Observer notified once per `execute()` call with the overall outcome
pub trait Listener {
    fn finished(&self, all_steps_executed: bool);
}

impl<F: Fn(bool)> Listener for F {
    fn finished(&self, all_steps_executed: bool) {
        self(all_steps_executed)
    }
}

/// Notifies the listener when dropped, so every exit path reports
struct FinishGuard<'l> {
    listener: Option<&'l dyn Listener>,
    all_steps_executed: bool,
}

impl Drop for FinishGuard<'_> {
    fn drop(&mut self) {
        if let Some(listener) = self.listener {
            listener.finished(self.all_steps_executed);
        }
    }
}

/// Runs the steps of a task sequentially, timing and logging each one
///
/// Steps are executed exactly once per call, in the order given by
/// [`ComputationSteps::instances`]. The first failing step stops the run and
/// its error is returned unchanged.
pub struct ComputationStepExecutor<'a, S: ?Sized, A> {
    steps: &'a S,
    activity: A,
    listener: Option<Box<dyn Listener + 'a>>,
}

impl<'a, S, A> ComputationStepExecutor<'a, S, A>
where
    S: ComputationSteps + ?Sized,
    A: ActivityLog,
{
    /// Create an executor that reports to no listener
    pub fn new(steps: &'a S, activity: A) -> Self {
        Self {
            steps,
            activity,
            listener: None,
        }
    }

    pub fn with_listener<L: Listener + 'a>(steps: &'a S, activity: A, listener: L) -> Self {
        Self {
            steps,
            activity,
            listener: Some(Box::new(listener)),
        }
    }

    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Execute all steps
    ///
    /// The listener, if any, is told `finished(true)` only when the last step
    /// returned successfully. On a step error, or a panic unwinding out of a
    /// step, it is told `finished(false)` before control leaves this method.
    pub fn execute(&self) -> Result<()> {
        let mut guard = FinishGuard {
            listener: self.listener.as_deref(),
            all_steps_executed: false,
        };

        debug!("Task state: NotStarted -> Running");
        match self.execute_steps() {
            Ok(()) => {
                guard.all_steps_executed = true;
                debug!("Task state: Running -> Completed");
                Ok(())
            }
            Err(e) => {
                debug!("Task state: Running -> Failed ({})", e);
                Err(e)
            }
        }
    }

    fn execute_steps(&self) -> Result<()> {
        let mut profiler = StepProfiler::new();
        for step in self.steps.instances() {
            profiler.start();
            step.execute()?;
            self.activity.log_step(step.description(), profiler.stop());
        }
        Ok(())
    }
}
