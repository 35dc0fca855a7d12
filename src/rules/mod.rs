//! Scoring rules and the game reducer.
//!
//! - `score`: Round scoring and the Flip 7 predicate
//! - `engine`: `GameEngine`, the pure `(GameCollection, Action) -> GameCollection`
//!   transition function, behind the `Reducer` trait
//!
//! The presentation layer never mutates state directly; it dispatches
//! actions and reads the snapshot that comes back.

pub mod engine;
pub mod score;

pub use engine::{GameEngine, Reducer};
pub use score::{compute_score, has_flip7, number_count, score_with, has_flip7_with, ScoreBreakdown};
