//! The game reducer.
//!
//! `GameEngine` applies one `Action` to a `GameCollection` snapshot and
//! returns the next snapshot. Transitions are pure and total:
//! - The input snapshot is never modified
//! - Unknown game, player or card ids leave the snapshot unchanged
//! - Only the targeted game differs between input and output

use im::Vector;
use log::{debug, info, trace};

use crate::cards::Card;
use crate::core::{
    Action, EngineConfig, Game, GameCollection, GameStatus, NewPlayer, Player, PlayerId,
};
use crate::errors::EngineError;
use crate::rules::score::{has_flip7_with, score_with};

/// A pure state-transition function.
///
/// Implementations must be deterministic: the same state and action
/// always produce the same next state.
pub trait Reducer {
    type State: Clone;
    type Action;

    /// Apply one action, returning the next state.
    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Apply a sequence of actions in order.
    fn reduce_all<'a, I>(&self, state: &Self::State, actions: I) -> Self::State
    where
        I: IntoIterator<Item = &'a Self::Action>,
        Self::Action: 'a,
    {
        actions
            .into_iter()
            .fold(state.clone(), |state, action| self.reduce(&state, action))
    }
}

/// Flip 7 scoring reducer.
///
/// ## Example
///
/// ```
/// use flip7_score::cards::Card;
/// use flip7_score::core::{Action, GameCollection, GameId, PlayerId};
/// use flip7_score::rules::{GameEngine, Reducer};
///
/// let engine = GameEngine::default();
/// let state = engine.reduce_all(
///     &GameCollection::new(),
///     &[
///         Action::create_game("g1"),
///         Action::add_player("g1", "p1", "Alice"),
///         Action::add_player("g1", "p2", "Bob"),
///         Action::start_game("g1"),
///         Action::add_card("g1", "p1", Card::Twelve),
///         Action::add_card("g1", "p1", Card::Times2),
///     ],
/// );
///
/// let game = state.get(&GameId::new("g1")).unwrap();
/// assert_eq!(game.player(&PlayerId::new("p1")).unwrap().round_score(), 24);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameEngine {
    config: EngineConfig,
}

impl GameEngine {
    /// Create an engine without validating the configuration.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Create an engine, rejecting invalid configurations.
    pub fn try_new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Score a hand under this engine's rules.
    #[must_use]
    pub fn score(&self, cards: &[Card]) -> u32 {
        score_with(cards, &self.config.scoring)
    }

    /// Flip 7 check matching `score`.
    #[must_use]
    pub fn has_flip7(&self, cards: &[Card]) -> bool {
        has_flip7_with(cards, &self.config.scoring)
    }

    /// Whether the host should offer to start `game`: still in setup with
    /// at least `min_players` joined. `StartGame` itself is not gated on it.
    #[must_use]
    pub fn can_start(&self, game: &Game) -> bool {
        game.can_start(self.config.min_players)
    }

    /// Apply one action to the collection.
    #[must_use]
    pub fn apply(&self, state: &GameCollection, action: &Action) -> GameCollection {
        trace!("Applying {} to game {}", action.kind(), action.game_id());

        if let Action::CreateGame { game_id } = action {
            let mut next = state.clone();
            next.games.push_back(Game::new(game_id.clone()));
            return next;
        }

        let Some(index) = state.index_of(action.game_id()) else {
            debug!("{} ignored: unknown game {}", action.kind(), action.game_id());
            return state.clone();
        };

        match self.transition(&state.games[index], action) {
            Some(game) => {
                let mut next = state.clone();
                next.games.set(index, game);
                next
            }
            None => state.clone(),
        }
    }

    /// Compute the next version of a single game.
    ///
    /// Returns `None` when the action leaves the game unchanged.
    fn transition(&self, game: &Game, action: &Action) -> Option<Game> {
        match action {
            Action::CreateGame { .. } => None,
            Action::AddPlayer { player, .. } => self.add_player(game, player),
            Action::RemovePlayer { player_id, .. } => self.remove_player(game, player_id),
            Action::StartGame { .. } => self.start_game(game),
            Action::AddCard {
                player_id, card_id, ..
            } => {
                let card = self.known_card(action, *card_id)?;
                self.update_player(game, player_id, |player| {
                    player.push_card(card, &self.config.scoring);
                    true
                })
            }
            Action::RemoveCard {
                player_id, card_id, ..
            } => {
                let card = self.known_card(action, *card_id)?;
                self.update_player(game, player_id, |player| {
                    let removed = player.remove_card(card, &self.config.scoring);
                    if !removed {
                        debug!("REMOVE_CARD ignored: {} not held by {}", card, player.id);
                    }
                    removed
                })
            }
            Action::NewRound { .. } => self.new_round(game),
        }
    }

    fn add_player(&self, game: &Game, player: &NewPlayer) -> Option<Game> {
        if !self.roster_open(game) {
            return None;
        }

        let mut next = game.clone();
        next.players
            .push_back(Player::new(player.id.clone(), player.name.clone()));
        Some(next)
    }

    fn remove_player(&self, game: &Game, player_id: &PlayerId) -> Option<Game> {
        if !self.roster_open(game) {
            return None;
        }

        let Some(index) = game.player_index(player_id) else {
            debug!("REMOVE_PLAYER ignored: unknown player {} in game {}", player_id, game.id);
            return None;
        };

        let mut next = game.clone();
        next.players.remove(index);
        Some(next)
    }

    fn start_game(&self, game: &Game) -> Option<Game> {
        if self.config.enforce_lifecycle && game.status != GameStatus::Setup {
            debug!("START_GAME ignored: game {} already started", game.id);
            return None;
        }

        let mut next = game.clone();
        next.status = GameStatus::Playing;
        Some(next)
    }

    /// Apply `f` to one player's record. `f` returns false when it made no change.
    fn update_player<F>(&self, game: &Game, player_id: &PlayerId, f: F) -> Option<Game>
    where
        F: FnOnce(&mut Player) -> bool,
    {
        if !self.in_play(game) {
            return None;
        }

        let Some(index) = game.player_index(player_id) else {
            debug!("Card action ignored: unknown player {} in game {}", player_id, game.id);
            return None;
        };

        let mut next = game.clone();
        let player = next.players.get_mut(index)?;
        if !f(player) {
            return None;
        }
        Some(next)
    }

    fn known_card(&self, action: &Action, card: Option<Card>) -> Option<Card> {
        if card.is_none() {
            debug!("{} ignored: unknown card in game {}", action.kind(), action.game_id());
        }
        card
    }

    fn new_round(&self, game: &Game) -> Option<Game> {
        if !self.in_play(game) {
            return None;
        }

        let mut next = game.clone();
        for player in next.players.iter_mut() {
            player.end_round();
        }
        next.round += 1;
        next.winner = self.resolve_winner(&next.players);

        if let Some(winner) = &next.winner {
            info!("Game {} won by {} after round {}", next.id, winner, game.round);
        }

        Some(next)
    }

    /// First player (in join order) holding the highest total, if that
    /// total reaches the win threshold. No players means no winner.
    fn resolve_winner(&self, players: &Vector<Player>) -> Option<PlayerId> {
        let max_total = players.iter().map(Player::total_score).max()?;
        if max_total < self.config.scoring.win_threshold {
            return None;
        }

        players
            .iter()
            .find(|p| p.total_score() == max_total)
            .map(|p| p.id.clone())
    }

    // === Lifecycle guards (only active with `enforce_lifecycle`) ===

    fn roster_open(&self, game: &Game) -> bool {
        if self.config.enforce_lifecycle && game.status != GameStatus::Setup {
            debug!("Roster change ignored: game {} already started", game.id);
            return false;
        }
        true
    }

    fn in_play(&self, game: &Game) -> bool {
        if self.config.enforce_lifecycle && (!game.is_playing() || game.is_finished()) {
            debug!("Play action ignored: game {} is not in play", game.id);
            return false;
        }
        true
    }
}

impl Reducer for GameEngine {
    type State = GameCollection;
    type Action = Action;

    fn reduce(&self, state: &GameCollection, action: &Action) -> GameCollection {
        self.apply(state, action)
    }
}
