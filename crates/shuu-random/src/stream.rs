//! Seeded PCG32 stream with a draw counter.
//!
//! The generator is frozen: PCG32 (`Lcg64Xsh32`) from `rand_pcg`, seeded by
//! duplicating the 32-bit seed into both halves of a `u64` and passing it
//! through `SeedableRng::seed_from_u64`. Any change to this pipeline must
//! bump [`GENERATOR_VERSION`].

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;

/// Revision of the seed-to-sequence mapping.
pub const GENERATOR_VERSION: u32 = 1;

/// Deterministic raw value source keyed by a 32-bit seed.
///
/// Every raw draw increments the call counter, so `(seed, call_count)`
/// fully identifies the stream position.
#[derive(Debug, Clone)]
pub struct SeededStream {
    seed: i32,
    call_count: u64,
    inner: Pcg32,
}

impl SeededStream {
    /// Create a stream positioned at its first draw.
    pub fn new(seed: i32) -> Self {
        // Expand 32-bit seed to 64-bit for PCG32 state
        let seed32 = seed as u32 as u64;
        let seed64 = seed32 | (seed32 << 32);
        Self {
            seed,
            call_count: 0,
            inner: Pcg32::seed_from_u64(seed64),
        }
    }

    /// The seed this stream was created from.
    pub fn seed(&self) -> i32 {
        self.seed
    }

    /// Number of raw draws issued so far.
    pub fn call_count(&self) -> u64 {
        self.call_count
    }

    /// Draw the next raw 32-bit value.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.call_count += 1;
        self.inner.next_u32()
    }

    /// Draw an `f64` in `[0, 1)` from a single raw value.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 * (1.0 / 4_294_967_296.0)
    }

    /// Draw an `f32` in `[0, 1)` from the top 24 bits of a single raw value.
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 * (1.0 / 16_777_216.0)
    }

    /// Discard `count` raw draws.
    pub fn skip(&mut self, count: u64) {
        for _ in 0..count {
            self.next_u32();
        }
    }
}
