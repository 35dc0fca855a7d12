//! Game state: sessions and the collection holding them.
//!
//! ## Game
//!
//! One scoring session: status, roster (in join order), round counter and
//! winner.
//!
//! ## GameCollection
//!
//! All sessions held in memory, in creation order. Uses `im` persistent
//! vectors so each reducer step produces a new snapshot in O(1) clone
//! plus the cost of the touched game.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::ids::{GameId, PlayerId};
use super::player::Player;

/// Phase of a game. `Setup -> Playing` is the only transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Building the roster.
    #[default]
    Setup,
    /// Rounds are being scored.
    Playing,
}

/// One game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub status: GameStatus,
    pub players: Vector<Player>,
    /// Current round (starts at 1).
    pub round: u32,
    /// Set at round resolution once someone reaches the win threshold.
    pub winner: Option<PlayerId>,
}

impl Game {
    /// Create an empty game in `Setup`.
    #[must_use]
    pub fn new(id: GameId) -> Self {
        Self {
            id,
            status: GameStatus::Setup,
            players: Vector::new(),
            round: 1,
            winner: None,
        }
    }

    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    #[must_use]
    pub fn player_index(&self, id: &PlayerId) -> Option<usize> {
        self.players.iter().position(|p| &p.id == id)
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Whether the roster is ready for `StartGame`.
    #[must_use]
    pub fn can_start(&self, min_players: usize) -> bool {
        self.status == GameStatus::Setup && self.players.len() >= min_players
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    /// A winner has been decided.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    #[must_use]
    pub fn winner_player(&self) -> Option<&Player> {
        self.winner.as_ref().and_then(|id| self.player(id))
    }

    /// Players by total score, highest first. Ties keep join order.
    #[must_use]
    pub fn standings(&self) -> Vec<&Player> {
        let mut sorted: Vec<_> = self.players.iter().collect();
        sorted.sort_by(|a, b| b.total_score().cmp(&a.total_score()));
        sorted
    }
}

/// All in-memory games, in creation order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameCollection {
    pub games: Vector<Game>,
}

impl GameCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, id: &GameId) -> Option<&Game> {
        self.games.iter().find(|g| &g.id == id)
    }

    #[must_use]
    pub fn index_of(&self, id: &GameId) -> Option<usize> {
        self.games.iter().position(|g| &g.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Game> {
        self.games.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::core::ScoringConfig;

    fn scored_player(id: &str, points: Card) -> Player {
        let mut player = Player::new(PlayerId::new(id), id.to_uppercase());
        player.push_card(points, &ScoringConfig::default());
        player.end_round();
        player
    }

    #[test]
    fn test_new_game() {
        let game = Game::new(GameId::new("g"));

        assert_eq!(game.status, GameStatus::Setup);
        assert_eq!(game.round, 1);
        assert_eq!(game.player_count(), 0);
        assert!(!game.is_finished());
        assert!(!game.is_playing());
    }

    #[test]
    fn test_player_lookup() {
        let mut game = Game::new(GameId::new("g"));
        game.players.push_back(Player::new(PlayerId::new("a"), "A"));
        game.players.push_back(Player::new(PlayerId::new("b"), "B"));

        assert_eq!(game.player(&PlayerId::new("b")).map(|p| p.name.as_str()), Some("B"));
        assert_eq!(game.player_index(&PlayerId::new("b")), Some(1));
        assert!(game.player(&PlayerId::new("c")).is_none());
    }

    #[test]
    fn test_can_start() {
        let mut game = Game::new(GameId::new("g"));
        assert!(!game.can_start(2));

        game.players.push_back(Player::new(PlayerId::new("a"), "A"));
        assert!(!game.can_start(2));
        assert!(game.can_start(1));

        game.players.push_back(Player::new(PlayerId::new("b"), "B"));
        assert!(game.can_start(2));

        game.status = GameStatus::Playing;
        assert!(!game.can_start(2));
    }

    #[test]
    fn test_standings_keep_join_order_on_ties() {
        let mut game = Game::new(GameId::new("g"));
        game.players.push_back(scored_player("a", Card::Three));
        game.players.push_back(scored_player("b", Card::Nine));
        game.players.push_back(scored_player("c", Card::Three));
        game.players.push_back(scored_player("d", Card::Nine));

        let order: Vec<_> = game.standings().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(order, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_winner_player() {
        let mut game = Game::new(GameId::new("g"));
        game.players.push_back(scored_player("a", Card::One));
        game.winner = Some(PlayerId::new("a"));

        assert!(game.is_finished());
        assert_eq!(game.winner_player().map(|p| p.total_score()), Some(1));
    }

    #[test]
    fn test_collection_lookup() {
        let mut collection = GameCollection::new();
        assert!(collection.is_empty());

        collection.games.push_back(Game::new(GameId::new("g1")));
        collection.games.push_back(Game::new(GameId::new("g2")));

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.index_of(&GameId::new("g2")), Some(1));
        assert!(collection.get(&GameId::new("g3")).is_none());

        let ids: Vec<_> = collection.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["g1", "g2"]);
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&GameStatus::Playing).unwrap();
        assert_eq!(json, r#""playing""#);

        let game = Game::new(GameId::new("g"));
        let json = serde_json::to_value(&game).unwrap();
        assert_eq!(json["status"], "setup");
        assert_eq!(json["round"], 1);
        assert!(json["winner"].is_null());
    }
}
