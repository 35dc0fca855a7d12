//! Store bindings for Python.

use log::debug;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::Card;
use crate::core::{Action, EngineConfig, GameId, IdGenerator, PlayerId, ScoringConfig};
use crate::errors::EngineError;
use crate::rules::{score_with, GameEngine};
use crate::store::GameStore;

fn to_py_err(err: EngineError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn lookup_card(id: &str) -> Option<Card> {
    match id.parse::<Card>() {
        Ok(card) => Some(card),
        Err(err) => {
            debug!("{}", err);
            None
        }
    }
}

fn parse_cards(ids: &[String]) -> PyResult<Vec<Card>> {
    ids.iter()
        .map(|id| id.parse::<Card>().map_err(to_py_err))
        .collect()
}

/// Python wrapper for GameStore.
///
/// Generates game and player ids itself; card ids are catalog strings.
#[pyclass(name = "Flip7Store")]
pub struct PyFlip7Store {
    store: GameStore,
    ids: IdGenerator,
}

#[pymethods]
impl PyFlip7Store {
    /// Create a store.
    ///
    /// # Arguments
    /// - win_threshold: Total score that ends a game
    /// - strict: Ignore actions that break the game lifecycle
    /// - seed: Seed for id generation (random if omitted)
    #[new]
    #[pyo3(signature = (win_threshold = 200, strict = false, seed = None))]
    fn new(win_threshold: u32, strict: bool, seed: Option<u64>) -> PyResult<Self> {
        let mut config = EngineConfig::default()
            .with_scoring(ScoringConfig::default().with_win_threshold(win_threshold));
        config.enforce_lifecycle = strict;

        let engine = GameEngine::try_new(config).map_err(to_py_err)?;
        let ids = seed.map_or_else(IdGenerator::from_entropy, IdGenerator::new);

        Ok(Self {
            store: GameStore::with_engine(engine),
            ids,
        })
    }

    /// Create a game and return its id.
    fn create_game(&mut self) -> String {
        let game_id = self.ids.game_id();
        self.store.dispatch(Action::create_game(game_id.clone()));
        game_id.0
    }

    /// Add a player and return their id.
    fn add_player(&mut self, game_id: &str, name: &str) -> String {
        let player_id = self.ids.player_id();
        self.store
            .dispatch(Action::add_player(game_id, player_id.clone(), name));
        player_id.0
    }

    fn remove_player(&mut self, game_id: &str, player_id: &str) {
        self.store.dispatch(Action::remove_player(game_id, player_id));
    }

    fn start_game(&mut self, game_id: &str) {
        self.store.dispatch(Action::start_game(game_id));
    }

    /// Add a card by catalog id. Unknown ids are ignored.
    fn add_card(&mut self, game_id: &str, player_id: &str, card_id: &str) {
        self.store.dispatch(Action::AddCard {
            game_id: game_id.into(),
            player_id: player_id.into(),
            card_id: lookup_card(card_id),
        });
    }

    /// Remove the first copy of a card. Unknown ids are ignored.
    fn remove_card(&mut self, game_id: &str, player_id: &str, card_id: &str) {
        self.store.dispatch(Action::RemoveCard {
            game_id: game_id.into(),
            player_id: player_id.into(),
            card_id: lookup_card(card_id),
        });
    }

    /// Whether the game has enough players to start.
    fn can_start(&self, game_id: &str) -> bool {
        self.store.can_start(&GameId::new(game_id))
    }

    fn new_round(&mut self, game_id: &str) {
        self.store.dispatch(Action::new_round(game_id));
    }

    /// Current round score of a player, or None if unknown.
    fn round_score(&self, game_id: &str, player_id: &str) -> Option<u32> {
        self.store
            .game(&GameId::new(game_id))?
            .player(&PlayerId::new(player_id))
            .map(|p| p.round_score())
    }

    /// Banked total of a player, or None if unknown.
    fn total_score(&self, game_id: &str, player_id: &str) -> Option<u32> {
        self.store
            .game(&GameId::new(game_id))?
            .player(&PlayerId::new(player_id))
            .map(|p| p.total_score())
    }

    /// Winner id of a game, if decided.
    fn winner(&self, game_id: &str) -> Option<String> {
        self.store
            .game(&GameId::new(game_id))?
            .winner
            .as_ref()
            .map(|id| id.0.clone())
    }

    /// Whole collection as JSON.
    fn snapshot_json(&self) -> PyResult<String> {
        serde_json::to_string(self.store.state())
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        format!("Flip7Store(games={})", self.store.state().len())
    }
}

/// Score a list of card ids under the default rules.
#[pyfunction]
pub fn round_score(card_ids: Vec<String>) -> PyResult<u32> {
    let cards = parse_cards(&card_ids)?;
    Ok(score_with(&cards, &ScoringConfig::default()))
}

/// Display label of a card id.
#[pyfunction]
pub fn card_label(card_id: &str) -> PyResult<String> {
    card_id.parse::<Card>().map(Card::label).map_err(to_py_err)
}
