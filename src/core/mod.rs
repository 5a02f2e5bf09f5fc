//! Core domain models for computation tasks
//!
//! This module defines the steps a task is made of, the ordered container
//! that holds them, and the YAML configuration they are built from.

pub mod command;
pub mod config;
pub mod step;

pub use command::{CommandError, CommandStep, OutputPattern};
pub use step::*;
