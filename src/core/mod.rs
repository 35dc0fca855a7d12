//! Core engine types: identifiers, players, games, actions, configuration.
//!
//! These are the snapshot types the presentation layer reads. Only the
//! reducer in `rules::engine` produces new snapshots.

pub mod ids;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use ids::{GameId, PlayerId};
pub use player::{Hand, Player};
pub use rng::IdGenerator;
pub use config::{EngineConfig, ScoringConfig};
pub use action::{Action, NewPlayer};
pub use state::{Game, GameCollection, GameStatus};
