//! End-to-end tests: YAML task definition -> registry -> executor

mod helpers;

use helpers::*;
use std::io::Write;
use step_executor::core::CommandError;
use step_executor::{ComputationStepExecutor, ConfigError, TaskConfig};

fn write_task(yaml: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Should create temp file");
    file.write_all(yaml.as_bytes()).expect("Should write task file");
    file
}

#[cfg(unix)]
#[test]
fn test_task_from_file_runs_all_steps() {
    let file = write_task(
        r#"
name: "Nightly"
steps:
  - description: "compile"
    command: "echo"
    args: ["compiling"]
  - description: "analyze"
    command: "echo"
    args: ["issues: 0"]
    expect:
      pattern: "issues: \\d+"
      use_regex: true
  - description: "report"
    command: "true"
"#,
    );

    let config = TaskConfig::from_file(file.path()).unwrap();
    let registry = config.to_registry().unwrap();
    let log = RecordingLog::new();
    let listener = RecordingListener::new();

    let executor = ComputationStepExecutor::with_listener(&registry, &log, listener.clone());
    executor.execute().expect("Task should succeed");

    assert_eq!(log.descriptions(), vec!["compile", "analyze", "report"]);
    assert_notified_once(&listener, true);
}

#[cfg(unix)]
#[test]
fn test_failing_command_stops_task() {
    let file = write_task(
        r#"
name: "Broken"
steps:
  - description: "compile"
    command: "true"
  - description: "analyze"
    command: "false"
  - description: "report"
    command: "true"
"#,
    );

    let registry = TaskConfig::from_file(file.path())
        .unwrap()
        .to_registry()
        .unwrap();
    let log = RecordingLog::new();
    let listener = RecordingListener::new();

    let executor = ComputationStepExecutor::with_listener(&registry, &log, listener.clone());
    let err = executor.execute().unwrap_err();

    assert!(matches!(
        err.downcast_ref::<CommandError>(),
        Some(CommandError::ExitStatus { .. })
    ));
    assert_eq!(log.descriptions(), vec!["compile"]);
    assert_notified_once(&listener, false);
}

#[cfg(unix)]
#[test]
fn test_output_mismatch_fails_step() {
    let file = write_task(
        r#"
name: "Expectations"
steps:
  - description: "analyze"
    command: "echo"
    args: ["quality gate: ERROR"]
    expect:
      pattern: "quality gate: OK"
"#,
    );

    let registry = TaskConfig::from_file(file.path())
        .unwrap()
        .to_registry()
        .unwrap();
    let log = RecordingLog::new();

    let err = ComputationStepExecutor::new(&registry, &log)
        .execute()
        .unwrap_err();

    assert!(err.to_string().contains("quality gate: OK"));
    assert!(log.descriptions().is_empty());
}

#[test]
fn test_empty_task_file_succeeds() {
    let file = write_task("name: \"Idle\"\nsteps: []\n");

    let registry = TaskConfig::from_file(file.path())
        .unwrap()
        .to_registry()
        .unwrap();
    let log = RecordingLog::new();
    let listener = RecordingListener::new();

    ComputationStepExecutor::with_listener(&registry, &log, listener.clone())
        .execute()
        .unwrap();

    assert_notified_once(&listener, true);
}

#[test]
fn test_invalid_task_file_is_rejected() {
    let file = write_task(
        r#"
name: "Invalid"
steps:
  - description: ""
    command: "true"
"#,
    );

    match TaskConfig::from_file(file.path()) {
        Err(ConfigError::Invalid(message)) => assert!(message.contains("empty description")),
        other => panic!("Expected validation error, got {:?}", other),
    }
}
