//! Command step - runs an external program as a computation step

use crate::core::step::ComputationStep;
use regex::Regex;
use std::path::PathBuf;
use std::process::Command;
use thiserror::Error;
use tracing::debug;

/// Error types for command steps
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with {status}: {stderr}")]
    ExitStatus {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("Output of '{program}' does not match expected pattern '{pattern}'")]
    OutputMismatch { program: String, pattern: String },
}

/// Pattern the command's stdout must contain
#[derive(Debug, Clone)]
pub enum OutputPattern {
    /// Simple string contains match
    Simple(String),
    /// Regular expression match
    Regex(Regex),
}

impl OutputPattern {
    /// Check if the pattern matches the given text
    pub fn matches(&self, text: &str) -> bool {
        match self {
            OutputPattern::Simple(pattern) => text.contains(pattern),
            OutputPattern::Regex(regex) => regex.is_match(text),
        }
    }

    pub fn display(&self) -> &str {
        match self {
            OutputPattern::Simple(pattern) => pattern,
            OutputPattern::Regex(regex) => regex.as_str(),
        }
    }
}

/// A step that runs `program args...` and fails on a non-zero exit
#[derive(Debug, Clone)]
pub struct CommandStep {
    description: String,
    program: String,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
    expect: Option<OutputPattern>,
}

impl CommandStep {
    pub fn new(description: impl Into<String>, program: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            program: program.into(),
            args: Vec::new(),
            working_dir: None,
            expect: None,
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn with_expect(mut self, pattern: OutputPattern) -> Self {
        self.expect = Some(pattern);
        self
    }

    /// Run the command, returning its captured stdout
    pub fn run(&self) -> Result<String, CommandError> {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        debug!("Running command: {} {:?}", self.program, self.args);
        let output = command.output().map_err(|source| CommandError::Spawn {
            program: self.program.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(CommandError::ExitStatus {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if let Some(pattern) = &self.expect {
            if !pattern.matches(&stdout) {
                return Err(CommandError::OutputMismatch {
                    program: self.program.clone(),
                    pattern: pattern.display().to_string(),
                });
            }
        }

        Ok(stdout)
    }
}

impl ComputationStep for CommandStep {
    fn execute(&self) -> anyhow::Result<()> {
        self.run()?;
        Ok(())
    }

    fn description(&self) -> &str {
        &self.description
    }
}
