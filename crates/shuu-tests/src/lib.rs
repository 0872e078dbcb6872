//! SHUU Integration Test Infrastructure
//!
//! Cross-crate tests for the random provider:
//!
//! - **Properties**: proptest coverage of ranges, picks and shuffles
//! - **Replay**: call-count restore and snapshot persistence
//! - **Determinism**: byte-identical noise output across runs
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p shuu-tests
//! ```

pub mod determinism;

use shuu_random::RandomProvider;

/// Draw `count` raw values from `provider`.
pub fn draw_raw(provider: &mut RandomProvider, count: usize) -> Vec<u32> {
    (0..count).map(|_| provider.next_u32()).collect()
}
