//! Determinism checks for byte-producing generators.
//!
//! # Example
//!
//! ```rust
//! use shuu_tests::determinism::verify_determinism;
//!
//! let result = verify_determinism(|| vec![1, 2, 3], 3);
//! result.assert_deterministic();
//! ```

use std::fmt;

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical output.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// BLAKE3 hash of the first run's output.
    pub hash: String,
    /// First difference found, if any.
    pub diff_info: Option<DiffInfo>,
}

/// First difference found between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffInfo {
    /// Byte offset of the difference, or the shorter length on a size mismatch.
    pub offset: usize,
    /// Value from the first run (`None` past its end).
    pub expected: Option<u8>,
    /// Value from the differing run (`None` past its end).
    pub actual: Option<u8>,
    /// Which run (0-indexed) produced the differing output.
    pub run_index: usize,
}

impl fmt::Display for DiffInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Difference at byte {}: expected {:?}, got {:?} (run {})",
            self.offset, self.expected, self.actual, self.run_index
        )
    }
}

impl DeterminismResult {
    /// Panic with a detailed message if not deterministic.
    pub fn assert_deterministic(&self) {
        if let Some(diff) = &self.diff_info {
            panic!(
                "Non-deterministic output detected!\n\
                 Runs: {}\n\
                 Hash: {}\n\
                 {}",
                self.runs, self.hash, diff
            );
        }
    }
}

/// Run `generate` `runs` times and compare every output with the first.
pub fn verify_determinism<F>(mut generate: F, runs: usize) -> DeterminismResult
where
    F: FnMut() -> Vec<u8>,
{
    let reference = generate();
    let hash = blake3::hash(&reference).to_hex().to_string();

    for run_index in 1..runs {
        let output = generate();
        if let Some(diff) = first_difference(&reference, &output, run_index) {
            return DeterminismResult {
                is_deterministic: false,
                runs,
                hash,
                diff_info: Some(diff),
            };
        }
    }

    DeterminismResult {
        is_deterministic: true,
        runs,
        hash,
        diff_info: None,
    }
}

fn first_difference(expected: &[u8], actual: &[u8], run_index: usize) -> Option<DiffInfo> {
    let offset = expected
        .iter()
        .zip(actual)
        .position(|(a, b)| a != b)
        .or_else(|| (expected.len() != actual.len()).then(|| expected.len().min(actual.len())))?;

    Some(DiffInfo {
        offset,
        expected: expected.get(offset).copied(),
        actual: actual.get(offset).copied(),
        run_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_runs() {
        let result = verify_determinism(|| vec![9, 8, 7], 4);
        assert!(result.is_deterministic);
        assert_eq!(result.runs, 4);
    }

    #[test]
    fn test_detects_changing_output() {
        let mut counter = 0u8;
        let result = verify_determinism(
            || {
                counter += 1;
                vec![0, counter]
            },
            2,
        );
        assert!(!result.is_deterministic);
        assert_eq!(
            result.diff_info,
            Some(DiffInfo {
                offset: 1,
                expected: Some(1),
                actual: Some(2),
                run_index: 1,
            })
        );
    }

    #[test]
    fn test_detects_length_mismatch() {
        let diff = first_difference(&[1, 2, 3], &[1, 2], 3).unwrap();
        assert_eq!(diff.offset, 2);
        assert_eq!(diff.expected, Some(3));
        assert_eq!(diff.actual, None);
    }
}
