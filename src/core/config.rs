//! Task configuration from YAML

use crate::core::{
    command::{CommandStep, OutputPattern},
    step::StepRegistry,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error types for loading task configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid task configuration: {0}")]
    Invalid(String),
}

/// Top-level task configuration loaded from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskConfig {
    /// Task name
    pub name: String,

    /// Default working directory for all steps
    #[serde(default)]
    pub working_dir: Option<PathBuf>,

    /// Steps, in execution order
    #[serde(default)]
    pub steps: Vec<StepConfig>,
}

/// Step configuration as defined in YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepConfig {
    /// Human-readable step description
    pub description: String,

    /// Program to run
    pub command: String,

    /// Program arguments
    #[serde(default)]
    pub args: Vec<String>,

    /// Working directory (overrides the task default)
    #[serde(default)]
    pub working_dir: Option<PathBuf>,

    /// Pattern the program's stdout must contain
    #[serde(default)]
    pub expect: Option<ExpectConfig>,
}

/// Expected output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpectConfig {
    pub pattern: String,

    /// Whether to use regex pattern matching
    #[serde(default)]
    pub use_regex: bool,
}

impl ExpectConfig {
    fn to_pattern(&self) -> Result<OutputPattern, regex::Error> {
        if self.use_regex {
            Regex::new(&self.pattern).map(OutputPattern::Regex)
        } else {
            Ok(OutputPattern::Simple(self.pattern.clone()))
        }
    }
}

impl TaskConfig {
    /// Load task configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Parse task configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: TaskConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the task configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Invalid("task name must not be empty".to_string()));
        }

        for (index, step) in self.steps.iter().enumerate() {
            let position = index + 1;
            if step.description.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "step {} has an empty description",
                    position
                )));
            }
            if step.command.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "step '{}' has an empty command",
                    step.description
                )));
            }
            if let Some(expect) = &step.expect {
                expect.to_pattern().map_err(|e| {
                    ConfigError::Invalid(format!(
                        "step '{}' has an invalid expect pattern: {}",
                        step.description, e
                    ))
                })?;
            }
        }

        Ok(())
    }

    /// Build the ordered step registry described by this configuration
    pub fn to_registry(&self) -> Result<StepRegistry, ConfigError> {
        let mut registry = StepRegistry::new();
        for step in &self.steps {
            registry.register(self.build_step(step)?);
        }
        Ok(registry)
    }

    fn build_step(&self, config: &StepConfig) -> Result<CommandStep, ConfigError> {
        let mut step = CommandStep::new(&config.description, &config.command)
            .with_args(config.args.iter().cloned());

        if let Some(dir) = config.working_dir.as_ref().or(self.working_dir.as_ref()) {
            step = step.with_working_dir(dir);
        }

        if let Some(expect) = &config.expect {
            let pattern = expect
                .to_pattern()
                .map_err(|e| ConfigError::Invalid(e.to_string()))?;
            step = step.with_expect(pattern);
        }

        Ok(step)
    }
}
