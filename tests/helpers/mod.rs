//! Test utilities shared by the integration tests
#![allow(dead_code)]

use step_executor::{ActivityLog, ComputationStep, Listener, StepRegistry};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Shared, ordered record of which steps were invoked
pub type Journal = Rc<RefCell<Vec<String>>>;

pub fn journal() -> Journal {
    Rc::new(RefCell::new(Vec::new()))
}

/// What a scripted step does when executed
#[derive(Debug, Clone)]
pub enum Behavior {
    Succeed,
    Fail(String),
    Panic(String),
}

/// Step that records its invocation and then behaves as scripted
pub struct ScriptedStep {
    description: String,
    behavior: Behavior,
    journal: Journal,
}

impl ScriptedStep {
    pub fn new(description: &str, behavior: Behavior, journal: &Journal) -> Self {
        Self {
            description: description.to_string(),
            behavior,
            journal: journal.clone(),
        }
    }
}

impl ComputationStep for ScriptedStep {
    fn execute(&self) -> anyhow::Result<()> {
        self.journal.borrow_mut().push(self.description.clone());
        match &self.behavior {
            Behavior::Succeed => Ok(()),
            Behavior::Fail(message) => Err(anyhow::anyhow!(message.clone())),
            Behavior::Panic(message) => panic!("{}", message),
        }
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// Build a registry of scripted steps sharing one journal
pub fn scripted_registry(steps: &[(&str, Behavior)], journal: &Journal) -> StepRegistry {
    let mut registry = StepRegistry::new();
    for (description, behavior) in steps {
        registry.register(ScriptedStep::new(description, behavior.clone(), journal));
    }
    registry
}

/// Listener recording every notification it receives
#[derive(Debug, Clone, Default)]
pub struct RecordingListener {
    calls: Rc<RefCell<Vec<bool>>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<bool> {
        self.calls.borrow().clone()
    }
}

impl Listener for RecordingListener {
    fn finished(&self, all_steps_executed: bool) {
        self.calls.borrow_mut().push(all_steps_executed);
    }
}

/// Activity log recording the descriptions it was given
#[derive(Debug, Default)]
pub struct RecordingLog {
    entries: RefCell<Vec<(String, Duration)>>,
}

impl RecordingLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn descriptions(&self) -> Vec<String> {
        self.entries.borrow().iter().map(|(d, _)| d.clone()).collect()
    }

    pub fn durations(&self) -> Vec<Duration> {
        self.entries.borrow().iter().map(|(_, e)| *e).collect()
    }
}

impl ActivityLog for RecordingLog {
    fn log_step(&self, description: &str, elapsed: Duration) {
        self.entries
            .borrow_mut()
            .push((description.to_string(), elapsed));
    }
}

/// Assert steps were invoked exactly in this order, each once
pub fn assert_invoked(journal: &Journal, expected: &[&str]) {
    let actual = journal.borrow().clone();
    assert_eq!(
        actual, expected,
        "Expected invocations: {:?}\nActual: {:?}",
        expected, actual
    );
}

/// Assert the listener was notified exactly once with the given flag
pub fn assert_notified_once(listener: &RecordingListener, all_steps_executed: bool) {
    assert_eq!(
        listener.calls(),
        vec![all_steps_executed],
        "Listener should be notified exactly once with {}",
        all_steps_executed
    );
}
