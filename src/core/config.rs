//! Engine configuration.
//!
//! - `ScoringConfig`: Constants of the scoring algorithm and win condition
//! - `EngineConfig`: Scoring plus reducer policy (lifecycle guards)
//!
//! The defaults are the published Flip 7 rules. Both types are plain
//! serde structs so a host application can load them from any format.

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Scoring constants.
///
/// ## Example
///
/// ```
/// use flip7_score::core::ScoringConfig;
///
/// let config = ScoringConfig::default().with_win_threshold(300);
/// assert_eq!(config.win_threshold, 300);
/// assert_eq!(config.flip7_bonus, 15);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Total score that ends the game at round resolution.
    pub win_threshold: u32,

    /// Number cards needed for the Flip 7 bonus (counted by occurrence).
    pub flip7_count: usize,

    /// Points awarded for a Flip 7.
    pub flip7_bonus: u32,

    /// Factor applied once when a bonus-multiply card is held.
    pub multiplier: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            win_threshold: 200,
            flip7_count: 7,
            flip7_bonus: 15,
            multiplier: 2,
        }
    }
}

impl ScoringConfig {
    #[must_use]
    pub fn with_win_threshold(mut self, threshold: u32) -> Self {
        self.win_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_flip7(mut self, count: usize, bonus: u32) -> Self {
        self.flip7_count = count;
        self.flip7_bonus = bonus;
        self
    }

    #[must_use]
    pub fn with_multiplier(mut self, multiplier: u32) -> Self {
        self.multiplier = multiplier;
        self
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.win_threshold == 0 {
            return Err(EngineError::InvalidConfig("win threshold must be positive"));
        }
        if self.flip7_count == 0 {
            return Err(EngineError::InvalidConfig("flip 7 count must be positive"));
        }
        Ok(())
    }
}

/// Reducer configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub scoring: ScoringConfig,

    /// Players required before a game may start. Only consulted by
    /// `Game::can_start`; the reducer never checks it.
    pub min_players: usize,

    /// Reject actions that break the game lifecycle.
    ///
    /// When false (the default) every action applies regardless of game
    /// status. When true, out-of-phase actions become no-ops:
    /// - `AddPlayer` / `RemovePlayer` outside `setup`
    /// - `StartGame` outside `setup`
    /// - `AddCard` / `RemoveCard` / `NewRound` outside `playing`, or after a winner
    pub enforce_lifecycle: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            min_players: 2,
            enforce_lifecycle: false,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring;
        self
    }

    #[must_use]
    pub fn with_min_players(mut self, count: usize) -> Self {
        self.min_players = count;
        self
    }

    #[must_use]
    pub fn strict(mut self) -> Self {
        self.enforce_lifecycle = true;
        self
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.min_players == 0 {
            return Err(EngineError::InvalidConfig("min players must be positive"));
        }
        self.scoring.validate()
    }
}
