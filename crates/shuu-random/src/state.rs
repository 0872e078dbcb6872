//! Serializable provider position.
//!
//! A provider's position is fully described by its seed and the number of
//! raw draws taken, so that is all a save file needs to carry.

use serde::{Deserialize, Serialize};

use crate::error::{RandomError, Result};
use crate::provider::RandomProvider;
use crate::stream::GENERATOR_VERSION;

/// Snapshot of a [`RandomProvider`] that can be persisted and restored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderState {
    /// Provider name.
    pub name: String,
    /// Seed the provider was created with.
    pub seed: i32,
    /// Raw draws taken since seeding.
    pub calls: u64,
    /// Generator revision the snapshot was taken with.
    #[serde(default = "default_generator_version")]
    pub generator: u32,
}

fn default_generator_version() -> u32 {
    GENERATOR_VERSION
}

impl ProviderState {
    /// True if this snapshot replays on the current generator.
    pub fn is_compatible(&self) -> bool {
        self.generator == GENERATOR_VERSION
    }
}

impl RandomProvider {
    /// Capture the provider's name, seed and call count.
    pub fn snapshot(&self) -> ProviderState {
        ProviderState {
            name: self.name().to_string(),
            seed: self.seed(),
            calls: self.get_state(),
            generator: GENERATOR_VERSION,
        }
    }

    /// Rebuild a provider at the snapshot's position by replaying draws.
    ///
    /// Fails with [`RandomError::IncompatibleGenerator`] if the snapshot was
    /// taken with another generator revision, since replaying it here would
    /// land on a different sequence.
    pub fn from_state(state: &ProviderState) -> Result<Self> {
        if !state.is_compatible() {
            return Err(RandomError::IncompatibleGenerator {
                found: state.generator,
                expected: GENERATOR_VERSION,
            });
        }
        let mut provider = RandomProvider::named(state.name.clone(), state.seed);
        provider.restore_state(state.calls);
        Ok(provider)
    }
}
