//! Actions dispatched by the presentation layer.
//!
//! Each action names its target game. Serialized actions use the
//! presentation contract: an internal `type` tag and camelCase fields.
//!
//! ```json
//! {"type": "ADD_CARD", "gameId": "g1", "playerId": "p1", "cardId": "plus_4"}
//! ```
//!
//! A `cardId` outside the catalog still deserializes: the card field is
//! `None` and the reducer ignores the action.

use serde::{Deserialize, Serialize};

use super::ids::{GameId, PlayerId};
use crate::cards::Card;

/// Roster entry carried by `Action::AddPlayer`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPlayer {
    pub id: PlayerId,
    pub name: String,
}

impl NewPlayer {
    #[must_use]
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A state transition request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    #[serde(rename_all = "camelCase")]
    CreateGame { game_id: GameId },

    #[serde(rename_all = "camelCase")]
    AddPlayer { game_id: GameId, player: NewPlayer },

    #[serde(rename_all = "camelCase")]
    RemovePlayer { game_id: GameId, player_id: PlayerId },

    #[serde(rename_all = "camelCase")]
    StartGame { game_id: GameId },

    #[serde(rename_all = "camelCase")]
    AddCard {
        game_id: GameId,
        player_id: PlayerId,
        #[serde(with = "lenient_card")]
        card_id: Option<Card>,
    },

    #[serde(rename_all = "camelCase")]
    RemoveCard {
        game_id: GameId,
        player_id: PlayerId,
        #[serde(with = "lenient_card")]
        card_id: Option<Card>,
    },

    #[serde(rename_all = "camelCase")]
    NewRound { game_id: GameId },
}

impl Action {
    pub fn create_game(game_id: impl Into<GameId>) -> Self {
        Action::CreateGame {
            game_id: game_id.into(),
        }
    }

    pub fn add_player(
        game_id: impl Into<GameId>,
        player_id: impl Into<PlayerId>,
        name: impl Into<String>,
    ) -> Self {
        Action::AddPlayer {
            game_id: game_id.into(),
            player: NewPlayer::new(player_id, name),
        }
    }

    pub fn remove_player(game_id: impl Into<GameId>, player_id: impl Into<PlayerId>) -> Self {
        Action::RemovePlayer {
            game_id: game_id.into(),
            player_id: player_id.into(),
        }
    }

    pub fn start_game(game_id: impl Into<GameId>) -> Self {
        Action::StartGame {
            game_id: game_id.into(),
        }
    }

    pub fn add_card(
        game_id: impl Into<GameId>,
        player_id: impl Into<PlayerId>,
        card: Card,
    ) -> Self {
        Action::AddCard {
            game_id: game_id.into(),
            player_id: player_id.into(),
            card_id: Some(card),
        }
    }

    pub fn remove_card(
        game_id: impl Into<GameId>,
        player_id: impl Into<PlayerId>,
        card: Card,
    ) -> Self {
        Action::RemoveCard {
            game_id: game_id.into(),
            player_id: player_id.into(),
            card_id: Some(card),
        }
    }

    pub fn new_round(game_id: impl Into<GameId>) -> Self {
        Action::NewRound {
            game_id: game_id.into(),
        }
    }

    /// The game this action targets.
    #[must_use]
    pub fn game_id(&self) -> &GameId {
        match self {
            Action::CreateGame { game_id }
            | Action::AddPlayer { game_id, .. }
            | Action::RemovePlayer { game_id, .. }
            | Action::StartGame { game_id }
            | Action::AddCard { game_id, .. }
            | Action::RemoveCard { game_id, .. }
            | Action::NewRound { game_id } => game_id,
        }
    }

    /// Short name for logging.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Action::CreateGame { .. } => "CREATE_GAME",
            Action::AddPlayer { .. } => "ADD_PLAYER",
            Action::RemovePlayer { .. } => "REMOVE_PLAYER",
            Action::StartGame { .. } => "START_GAME",
            Action::AddCard { .. } => "ADD_CARD",
            Action::RemoveCard { .. } => "REMOVE_CARD",
            Action::NewRound { .. } => "NEW_ROUND",
        }
    }
}

/// Card ids that do not resolve map to `None` instead of failing the
/// whole action.
mod lenient_card {
    use log::debug;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::cards::Card;

    pub fn serialize<S: Serializer>(card: &Option<Card>, serializer: S) -> Result<S::Ok, S::Error> {
        card.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Card>, D::Error> {
        let id = Option::<String>::deserialize(deserializer)?;
        Ok(id.and_then(|id| match id.parse::<Card>() {
            Ok(card) => Some(card),
            Err(err) => {
                debug!("{}", err);
                None
            }
        }))
    }
}
