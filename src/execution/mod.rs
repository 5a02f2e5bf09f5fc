//! Task execution

pub mod activity;
pub mod executor;
pub mod profiler;

pub use activity::{ActivityLog, TracingActivityLog};
pub use executor::{ComputationStepExecutor, Listener};
pub use profiler::StepProfiler;
