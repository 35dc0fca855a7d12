//! Identifier generation for games and players.
//!
//! The engine never invents ids: they arrive inside actions. Hosts that
//! need fresh ids use `IdGenerator`, a ChaCha8 stream formatted as
//! version 4 UUIDs.
//!
//! ```
//! use flip7_score::core::IdGenerator;
//!
//! let mut ids = IdGenerator::new(42);
//! let mut replay = IdGenerator::new(42);
//!
//! // Same seed, same ids
//! assert_eq!(ids.game_id(), replay.game_id());
//! assert_ne!(ids.player_id(), ids.player_id());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::ids::{GameId, PlayerId};

/// Random UUID generator.
#[derive(Clone, Debug)]
pub struct IdGenerator {
    inner: ChaCha8Rng,
}

impl IdGenerator {
    /// Deterministic generator for tests and replays.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generator seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Next id as a hyphenated UUID string.
    pub fn next_id(&mut self) -> String {
        let mut bytes = [0u8; 16];
        self.inner.fill(&mut bytes);
        uuid::Builder::from_random_bytes(bytes)
            .into_uuid()
            .hyphenated()
            .to_string()
    }

    pub fn game_id(&mut self) -> GameId {
        GameId(self.next_id())
    }

    pub fn player_id(&mut self) -> PlayerId {
        PlayerId(self.next_id())
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}
