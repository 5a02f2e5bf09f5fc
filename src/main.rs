use anyhow::{Context, Result};
use chrono::Utc;
use indicatif::ProgressBar;
use step_executor::cli::commands::{RunCommand, ValidateCommand};
use step_executor::cli::output::*;
use step_executor::cli::report::ConsoleActivityLog;
use step_executor::cli::{Cli, Command};
use step_executor::core::config::TaskConfig;
use step_executor::execution::{ComputationStepExecutor, TracingActivityLog};
use std::cell::Cell;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    match &cli.command {
        Command::Run(cmd) => run_task(cmd)?,
        Command::Validate(cmd) => validate_task(cmd)?,
    }

    Ok(())
}

fn run_task(cmd: &RunCommand) -> Result<()> {
    let config = TaskConfig::from_file(&cmd.file).context("Failed to load task config")?;
    let registry = config.to_registry()?;

    if !cmd.json {
        println!("{} Loaded task: {}", INFO, style(&config.name).bold());
        println!("{} Running {} step(s)", ROCKET, style(registry.len()).cyan());
    }

    let progress = if cmd.json {
        ProgressBar::hidden()
    } else {
        create_progress_bar(registry.len())
    };
    let activity =
        ConsoleActivityLog::new(TracingActivityLog::new(&config.name), progress, !cmd.json);

    let finished = Cell::new(None);
    let started_at = Utc::now();
    let result = {
        let executor = ComputationStepExecutor::with_listener(&registry, &activity, |done: bool| {
            finished.set(Some(done))
        });
        executor.execute()
    };
    activity.progress().finish_and_clear();

    let all_steps_executed = finished.get().unwrap_or(false);
    let elapsed = (Utc::now() - started_at).to_std().unwrap_or_default();
    let error_message = result.as_ref().err().map(|e| format!("{:#}", e));
    let task_name = activity.task().to_string();
    let report = activity.into_report(started_at, all_steps_executed, error_message);

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "\n{} {}",
            format_finished(&task_name, all_steps_executed),
            style(format_duration(elapsed)).dim()
        );
    }

    if let Err(e) = result {
        error!("{:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn validate_task(cmd: &ValidateCommand) -> Result<()> {
    println!("{} Validating task...", INFO);

    match TaskConfig::from_file(&cmd.file) {
        Ok(config) => {
            println!("{} Task configuration is valid!", CHECK);
            println!("  Name: {}", style(&config.name).bold());
            println!("  Steps: {}", style(config.steps.len()).cyan());
            for (index, step) in config.steps.iter().enumerate() {
                println!(
                    "    {}. {} {}",
                    index + 1,
                    step.description,
                    style(format!("({})", step.command)).dim()
                );
            }

            if cmd.json {
                let json = serde_json::to_string_pretty(&config)?;
                println!("\n{}", json);
            }
            Ok(())
        }
        Err(e) => {
            println!("{} Validation failed:", CROSS);
            println!("  {}", style(e).red());
            std::process::exit(1);
        }
    }
}
