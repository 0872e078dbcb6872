//! Seed command implementation
//!
//! Derives a seed from a string, or from the system clock.

use anyhow::{bail, Result};
use serde::Serialize;
use shuu_random::seed::{generate_seed, generate_seed_from_str};
use std::process::ExitCode;

use super::reporting::{print_field, print_header, print_json};

/// Where a seed came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedSource {
    Text,
    Clock,
}

/// Output of the seed command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedOutput {
    pub source: SeedSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub seed: i32,
}

/// Derive the seed without printing anything.
pub fn derive(text: Option<&str>, clock: bool) -> Result<SeedOutput> {
    match (text, clock) {
        (Some(_), true) => bail!("Pass either TEXT or --clock, not both"),
        (Some(text), false) => Ok(SeedOutput {
            source: SeedSource::Text,
            text: Some(text.to_string()),
            seed: generate_seed_from_str(text),
        }),
        (None, true) => Ok(SeedOutput {
            source: SeedSource::Clock,
            text: None,
            seed: generate_seed(),
        }),
        (None, false) => bail!("Nothing to derive a seed from: pass TEXT or --clock"),
    }
}

/// Run the seed command
///
/// # Arguments
/// * `text` - String to hash into a seed
/// * `clock` - Use the system clock instead of a string
/// * `json` - Emit JSON instead of colored text
pub fn run(text: Option<&str>, clock: bool, json: bool) -> Result<ExitCode> {
    let output = derive(text, clock)?;

    if json {
        print_json(&output)?;
        return Ok(ExitCode::SUCCESS);
    }

    match &output.text {
        Some(text) => print_header("Seed", format!("{:?}", text)),
        None => print_header("Seed", "system clock"),
    }
    print_field("value", output.seed);

    Ok(ExitCode::SUCCESS)
}
