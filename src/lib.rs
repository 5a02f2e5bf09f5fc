//! step-executor - runs the computation steps of a task in order

pub mod cli;
pub mod core;
pub mod execution;

// Re-export commonly used types
pub use crate::core::{ComputationStep, ComputationSteps, StepRegistry, CommandStep};
pub use crate::core::config::{TaskConfig, ConfigError};
pub use crate::execution::{ComputationStepExecutor, Listener, ActivityLog, TracingActivityLog};
