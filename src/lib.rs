//! # flip7-score
//!
//! Score tracking engine for the Flip 7 card game.
//!
//! ## Design Principles
//!
//! 1. **Pure Reducer**: All state changes go through `GameEngine`, a
//!    deterministic `(GameCollection, Action) -> GameCollection` function.
//!    No I/O, no shared mutable state.
//!
//! 2. **Permissive Transitions**: Actions naming an unknown game, player or
//!    card leave the state unchanged instead of failing. Hosts can replay
//!    stale actions (double taps, late events) without error handling.
//!
//! 3. **Snapshots**: State uses `im` persistent vectors, so every dispatch
//!    yields a new snapshot sharing structure with the previous one.
//!
//! ## Scoring
//!
//! Number cards are summed, bonus-add cards added, seven or more number
//! cards earn +15 (Flip 7), and an `x2` card doubles the result once.
//! See `rules::score`.
//!
//! ## Modules
//!
//! - `core`: Identifiers, players, games, actions, configuration, id generation
//! - `cards`: Card faces, definitions and catalog
//! - `rules`: Scoring and the game reducer
//! - `store`: Single-writer dispatch loop
//! - `errors`: Parsing and configuration errors

pub mod core;
pub mod cards;
pub mod rules;
pub mod store;
pub mod errors;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    GameId, PlayerId,
    Player, Hand,
    Game, GameStatus, GameCollection,
    Action, NewPlayer,
    ScoringConfig, EngineConfig,
    IdGenerator,
};

pub use crate::cards::{Card, CardCategory, CardDefinition, CardCatalog};

pub use crate::rules::{
    GameEngine, Reducer,
    ScoreBreakdown, compute_score, has_flip7,
};

pub use crate::store::GameStore;

pub use crate::errors::EngineError;
