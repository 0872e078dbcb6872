//! Seed derivation helpers.
//!
//! These are plain hashes, not cryptographic ones. The string hash is
//! stable across platforms and runs; the clock seed is not meant to be.

use std::time::{SystemTime, UNIX_EPOCH};

/// Initial value of the string hash.
const STRING_HASH_BASIS: i32 = 23;

/// Multiplier shared by the string hash and the spatial hash.
pub(crate) const HASH_MULTIPLIER: i32 = 31;

/// Derive a seed from a string.
///
/// Folds each UTF-16 code unit with `hash = hash * 31 + unit`, starting
/// from 23, using wrapping 32-bit arithmetic.
///
/// # Example
/// ```
/// use shuu_random::seed::generate_seed_from_str;
///
/// assert_eq!(generate_seed_from_str("Player"), 1330829784);
/// ```
pub fn generate_seed_from_str(value: &str) -> i32 {
    value.encode_utf16().fold(STRING_HASH_BASIS, |hash, unit| {
        hash.wrapping_mul(HASH_MULTIPLIER)
            .wrapping_add(unit as i32)
    })
}

/// Combine a millisecond tick count with the sub-second clock reading.
pub fn seed_from_clock(tick_ms: u64, subsec_nanos: u32) -> i32 {
    (tick_ms as i32) ^ (subsec_nanos as i32).rotate_left(16)
}

/// Produce an arbitrary seed from the system clock.
///
/// Successive runs get different seeds. Use a fixed or string-derived seed
/// wherever the sequence must be reproducible.
pub fn generate_seed() -> i32 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    seed_from_clock(now.as_millis() as u64, now.subsec_nanos())
}
