//! Shuffle command implementation
//!
//! Shuffles items with a seeded provider, or picks a unique subset.

use anyhow::Result;
use serde::Serialize;
use shuu_random::RandomProvider;
use std::process::ExitCode;

use super::reporting::{join, print_field, print_header, print_json};

/// Output of the shuffle command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShuffleOutput {
    pub seed: i32,
    pub items: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pick: Option<usize>,
}

/// Shuffle without printing anything.
pub fn shuffle(seed: i32, items: &[String], pick: Option<usize>) -> ShuffleOutput {
    let mut rng = RandomProvider::new(seed);
    let items = match pick {
        Some(count) => rng.pick_uniques(items, count),
        None => rng.shuffled(items),
    };
    ShuffleOutput { seed, items, pick }
}

/// Run the shuffle command
///
/// # Arguments
/// * `seed` - Provider seed
/// * `items` - Items to shuffle
/// * `pick` - Return only this many unique items
/// * `json` - Emit JSON instead of colored text
pub fn run(seed: i32, items: &[String], pick: Option<usize>, json: bool) -> Result<ExitCode> {
    let output = shuffle(seed, items, pick);

    if json {
        print_json(&output)?;
        return Ok(ExitCode::SUCCESS);
    }

    let title = if pick.is_some() { "Picking" } else { "Shuffling" };
    print_header(title, format!("{} items with seed {}", items.len(), seed));
    print_field("result", join(&output.items));

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let input = items(&["ash", "birch", "cedar", "elm", "fir"]);
        let output = shuffle(7, &input, None);
        let mut sorted = output.items.clone();
        sorted.sort();
        assert_eq!(sorted, input);
    }

    #[test]
    fn test_pick_is_shuffle_prefix() {
        let input = items(&["a", "b", "c", "d", "e", "f"]);
        let full = shuffle(21, &input, None);
        let picked = shuffle(21, &input, Some(2));
        assert_eq!(picked.items, full.items[..2].to_vec());
    }

    #[test]
    fn test_shuffle_empty() {
        assert!(shuffle(1, &[], None).items.is_empty());
    }
}
