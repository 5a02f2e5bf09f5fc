//! CLI output formatting

use crate::execution::profiler::format_elapsed;
use console::Emoji;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", "> ");

/// Create a progress bar over the steps of a task
pub fn create_progress_bar(total: usize) -> ProgressBar {
    let progress = ProgressBar::new(total as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    progress.set_style(style);
    progress.enable_steady_tick(Duration::from_millis(100));
    progress
}

/// Format a completed step for display
pub fn format_step_line(description: &str, elapsed: Duration) -> String {
    format!(
        "{} {} {}",
        CHECK,
        style(description).green(),
        style(format_elapsed(elapsed)).dim()
    )
}

/// Format the final task status for display
pub fn format_finished(task: &str, all_steps_executed: bool) -> String {
    if all_steps_executed {
        format!(
            "{} {} completed {}",
            CHECK,
            style(task).bold(),
            style("successfully").green()
        )
    } else {
        format!("{} {} {}", CROSS, style(task).bold(), style("failed").red())
    }
}

/// Format a human-readable duration
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs < 60 {
        format!("{}.{:03}s", secs, duration.subsec_millis())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
