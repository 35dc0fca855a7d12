//! Single-writer store for the presentation layer.
//!
//! `GameStore` owns the current snapshot and a reducer. Each `dispatch`
//! replaces the snapshot with the reducer's output; readers get shared
//! references or O(1) clones of the snapshot.
//!
//! There is exactly one writer (the owner of the `&mut GameStore`). A
//! networked or multi-threaded host would need a per-game queue in front
//! of `dispatch`.

use log::trace;

use crate::core::{Action, Game, GameCollection, GameId};
use crate::rules::{GameEngine, Reducer};

/// Current state plus the reducer that advances it.
///
/// ## Example
///
/// ```
/// use flip7_score::cards::Card;
/// use flip7_score::core::{Action, GameId, IdGenerator};
/// use flip7_score::GameStore;
///
/// let mut ids = IdGenerator::new(1);
/// let mut store: GameStore = GameStore::default();
///
/// let game_id = ids.game_id();
/// let alice = ids.player_id();
/// store.dispatch(Action::create_game(game_id.clone()));
/// store.dispatch(Action::add_player(game_id.clone(), alice.clone(), "Alice"));
/// store.dispatch(Action::start_game(game_id.clone()));
/// store.dispatch(Action::add_card(game_id.clone(), alice.clone(), Card::Nine));
///
/// let game = store.game(&game_id).unwrap();
/// assert_eq!(game.player(&alice).unwrap().round_score(), 9);
/// ```
#[derive(Clone)]
pub struct GameStore<R: Reducer = GameEngine> {
    reducer: R,
    state: R::State,
    dispatched: u64,
}

impl<R: Reducer> GameStore<R> {
    /// Create a store starting from `initial`.
    pub fn new(reducer: R, initial: R::State) -> Self {
        Self {
            reducer,
            state: initial,
            dispatched: 0,
        }
    }

    /// Apply an action and return the new snapshot.
    pub fn dispatch(&mut self, action: R::Action) -> &R::State {
        self.state = self.reducer.reduce(&self.state, &action);
        self.dispatched += 1;
        &self.state
    }

    /// Apply several actions in order.
    pub fn dispatch_all<I>(&mut self, actions: I) -> &R::State
    where
        I: IntoIterator<Item = R::Action>,
    {
        for action in actions {
            self.dispatch(action);
        }
        &self.state
    }

    #[must_use]
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Owned copy of the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> R::State {
        self.state.clone()
    }

    #[must_use]
    pub fn reducer(&self) -> &R {
        &self.reducer
    }

    /// Number of actions dispatched so far.
    #[must_use]
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }
}

impl GameStore<GameEngine> {
    /// Empty store driven by `engine`.
    #[must_use]
    pub fn with_engine(engine: GameEngine) -> Self {
        Self::new(engine, GameCollection::new())
    }

    #[must_use]
    pub fn game(&self, id: &GameId) -> Option<&Game> {
        self.state.get(id)
    }

    /// Whether a game exists and has enough players to start.
    #[must_use]
    pub fn can_start(&self, id: &GameId) -> bool {
        self.game(id).map_or(false, |game| self.reducer.can_start(game))
    }

    /// Dispatch and return the targeted game as it now stands.
    pub fn dispatch_to_game(&mut self, action: Action) -> Option<&Game> {
        let game_id = action.game_id().clone();
        trace!("Dispatch #{}: {}", self.dispatched + 1, action.kind());
        self.dispatch(action);
        self.game(&game_id)
    }
}

impl Default for GameStore<GameEngine> {
    fn default() -> Self {
        Self::with_engine(GameEngine::default())
    }
}
