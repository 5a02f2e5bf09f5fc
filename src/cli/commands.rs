//! CLI command definitions

use clap::Args;

/// Run a task
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to task YAML file
    #[arg(short, long)]
    pub file: String,

    /// Print a JSON run report instead of progress output
    #[arg(long)]
    pub json: bool,
}

/// Validate a task configuration
#[derive(Debug, Args, Clone)]
pub struct ValidateCommand {
    /// Path to task YAML file
    #[arg(short, long)]
    pub file: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}
