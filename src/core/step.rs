//! Step domain model

use anyhow::Result;

/// A single unit of work in a task
///
/// Steps are owned by a [`ComputationSteps`] container; the executor only
/// borrows them while running.
pub trait ComputationStep {
    /// Perform the work of this step
    fn execute(&self) -> Result<()>;

    /// Human-readable label, used in activity logs
    fn description(&self) -> &str;
}

/// Ordered provider of the steps to run
///
/// The order of `instances()` is the execution order.
pub trait ComputationSteps {
    fn instances(&self) -> Box<dyn Iterator<Item = &dyn ComputationStep> + '_>;
}

/// Ordered, owning container of computation steps
#[derive(Default)]
pub struct StepRegistry {
    steps: Vec<Box<dyn ComputationStep>>,
}

impl StepRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step; it runs after every step already registered
    pub fn register<S: ComputationStep + 'static>(&mut self, step: S) {
        self.steps.push(Box::new(step));
    }

    /// Builder-style variant of [`StepRegistry::register`]
    pub fn with_step<S: ComputationStep + 'static>(mut self, step: S) -> Self {
        self.register(step);
        self
    }

    /// Number of registered steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Descriptions of all steps, in execution order
    pub fn descriptions(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.description()).collect()
    }
}

impl ComputationSteps for StepRegistry {
    fn instances(&self) -> Box<dyn Iterator<Item = &dyn ComputationStep> + '_> {
        Box::new(self.steps.iter().map(|s| &**s as &dyn ComputationStep))
    }
}

impl std::fmt::Debug for StepRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepRegistry")
            .field("steps", &self.descriptions())
            .finish()
    }
}
