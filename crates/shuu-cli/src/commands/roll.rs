//! Roll command implementation
//!
//! Draws integers from a seeded provider, optionally resuming at a saved
//! call count.

use anyhow::{bail, Context, Result};
use serde::Serialize;
use shuu_random::RandomProvider;
use std::process::ExitCode;

use super::reporting::{join, print_field, print_header, print_json};

/// Output of the roll command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollOutput {
    pub seed: i32,
    pub min: i32,
    pub max: i32,
    /// Call count the provider was restored to before rolling.
    pub skip: u64,
    pub values: Vec<i32>,
    /// Call count after rolling; pass as `--skip` to continue.
    pub state: u64,
}

/// Largest `--skip` accepted. Resuming replays every skipped draw from the
/// seed, so the cost grows linearly with the call count.
pub const MAX_SKIP: u64 = 1_000_000_000;

/// Roll without printing anything.
pub fn roll(seed: i32, min: i32, max: i32, count: usize, skip: u64) -> Result<RollOutput> {
    if skip > MAX_SKIP {
        bail!(
            "--skip {} exceeds the limit of {}; resuming replays every skipped draw",
            skip,
            MAX_SKIP
        );
    }

    let mut rng = RandomProvider::new(seed);
    rng.restore_state(skip);

    let values = (0..count)
        .map(|_| rng.range(min, max))
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Cannot roll in [{}, {})", min, max))?;

    Ok(RollOutput {
        seed,
        min,
        max,
        skip,
        values,
        state: rng.get_state(),
    })
}

/// Run the roll command
///
/// # Arguments
/// * `seed` - Provider seed
/// * `min` - Inclusive lower bound
/// * `max` - Exclusive upper bound
/// * `count` - Number of values to draw
/// * `skip` - Call count to restore before drawing
/// * `json` - Emit JSON instead of colored text
pub fn run(seed: i32, min: i32, max: i32, count: usize, skip: u64, json: bool) -> Result<ExitCode> {
    let output = roll(seed, min, max, count, skip)?;

    if json {
        print_json(&output)?;
        return Ok(ExitCode::SUCCESS);
    }

    print_header("Rolling", format!("seed {}", seed));
    print_field("range", format!("[{}, {})", min, max));
    if skip > 0 {
        print_field("resumed", format!("at call {}", skip));
    }
    print_field("values", join(&output.values));
    print_field("state", output.state);

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_roll_golden() {
        let output = roll(12345, 0, 10, 3, 0).unwrap();
        assert_eq!(
            output,
            RollOutput {
                seed: 12345,
                min: 0,
                max: 10,
                skip: 0,
                values: vec![1, 3, 4],
                state: 3,
            }
        );
    }

    #[test]
    fn test_roll_resume_continues() {
        let full = roll(12345, 0, 10, 3, 0).unwrap();
        let resumed = roll(12345, 0, 10, 2, 1).unwrap();
        assert_eq!(resumed.values, full.values[1..].to_vec());
        assert_eq!(resumed.state, 3);
    }

    #[test]
    fn test_roll_invalid_range() {
        let err = roll(1, 5, 5, 1, 0).unwrap_err();
        assert!(err.to_string().contains("Cannot roll"));
    }

    #[test]
    fn test_roll_rejects_huge_skip() {
        let err = roll(1, 0, 10, 1, u64::MAX).unwrap_err();
        assert!(err.to_string().contains("exceeds the limit"));
        assert!(roll(1, 0, 10, 1, MAX_SKIP + 1).is_err());
    }
}
