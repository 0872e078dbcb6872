//! SHUU deterministic random provider
//!
//! Replayable pseudo-random generation for games and tools: one seed fully
//! determines every value a provider hands out, and the number of raw draws
//! taken so far is enough to resume a sequence exactly.
//!
//! # Features
//!
//! - **SeededStream**: frozen PCG32 generator with a draw counter
//! - **RandomProvider**: ranges, chances, weighted picks, unique sampling,
//!   Fisher-Yates shuffles, spatial hash noise, forks, state replay
//! - **PerlinNoise2D**: provider-phased coherent noise with fBm octaves
//! - **Texture output**: noise maps to deterministic grayscale PNG
//!
//! # Example
//!
//! ```
//! use shuu_random::{PerlinNoise2D, RandomProvider};
//!
//! let mut rng = RandomProvider::from_seed_str("Player");
//! let loot = rng.pick_weighted(&["common", "rare", "epic"], &[70.0, 25.0, 5.0]).unwrap();
//! assert!(["common", "rare", "epic"].contains(loot));
//!
//! // Persist the position and pick up where we left off.
//! let saved = rng.get_state();
//! let next = rng.range(0, 100).unwrap();
//! rng.restore_state(saved);
//! assert_eq!(rng.range(0, 100).unwrap(), next);
//!
//! let terrain = PerlinNoise2D::new(&mut rng.fork_channel("terrain"), 0.05);
//! let height = terrain.fractal_noise(10.0, 20.0, 4, 2.0, 0.5);
//! assert!((0.0..=1.0).contains(&height));
//! ```
//!
//! # Determinism
//!
//! - Same seed + same calls = same results, on every platform
//! - String seeds hash UTF-16 code units with a fixed polynomial
//! - Spatial hash noise depends only on seed and coordinates
//! - Providers are single-owner; use `fork` for independent streams

pub mod error;
pub mod noise;
pub mod provider;
pub mod seed;
pub mod state;
pub mod stream;
pub mod texture;

// Re-export main types for convenience
pub use error::{ErrorCode, RandomError};
pub use noise::{Fbm, Noise2D, NoiseMap, NoiseSettings, PerlinNoise2D};
pub use provider::RandomProvider;
pub use seed::{generate_seed, generate_seed_from_str};
pub use state::ProviderState;
pub use stream::{SeededStream, GENERATOR_VERSION};
pub use texture::{PngConfig, PngError};
