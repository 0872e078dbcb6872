use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::fmt::Display;

/// Print a command output as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(output: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(output).context("Failed to serialize JSON output")?;
    println!("{}", json);
    Ok(())
}

/// Print a command banner (e.g. "Rolling: seed 42").
pub(crate) fn print_header(title: &str, subject: impl Display) {
    println!("{} {}", format!("{}:", title).cyan().bold(), subject);
}

/// Print an indented label/value line.
pub(crate) fn print_field(label: &str, value: impl Display) {
    println!("  {:<10} {}", format!("{}:", label).dimmed(), value);
}

/// Print the closing success line.
pub(crate) fn print_success(message: impl Display) {
    println!("{} {}", "SUCCESS".green().bold(), message);
}

/// Comma-separated rendering of a list of values.
pub(crate) fn join<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
