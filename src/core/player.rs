//! Player records.
//!
//! A player's `round_score` is derived: it is always the score of the
//! current hand, so it has no setter. Hands are kept in draw order in a
//! `SmallVec` since they rarely grow past 8 cards.
//!
//! Deserialized players are rescored from their cards under the default
//! rules; a serialized `roundScore` is never trusted.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::ScoringConfig;
use super::ids::PlayerId;
use crate::cards::Card;
use crate::rules::score::{has_flip7_with, score_with};

/// Cards held during the current round, in draw order.
pub type Hand = SmallVec<[Card; 8]>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "PlayerRecord")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    cards: Hand,
    round_score: u32,
    total_score: u32,
}

/// Stored form of a player. `roundScore`, if present, is ignored.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerRecord {
    id: PlayerId,
    name: String,
    #[serde(default)]
    cards: Hand,
    #[serde(default)]
    total_score: u32,
}

impl From<PlayerRecord> for Player {
    fn from(record: PlayerRecord) -> Self {
        let mut player = Self {
            id: record.id,
            name: record.name,
            cards: record.cards,
            round_score: 0,
            total_score: record.total_score,
        };
        player.rescore(&ScoringConfig::default());
        player
    }
}

impl Player {
    /// Create a player with an empty hand and no points.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            cards: Hand::new(),
            round_score: 0,
            total_score: 0,
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn round_score(&self) -> u32 {
        self.round_score
    }

    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Occurrences of `card` in the hand.
    #[must_use]
    pub fn card_count(&self, card: Card) -> usize {
        self.cards.iter().filter(|&&c| c == card).count()
    }

    /// Whether `card` may be drawn: a number card already in the hand
    /// cannot be taken again. The reducer does not enforce this.
    #[must_use]
    pub fn can_take(&self, card: Card) -> bool {
        !(card.is_number() && self.cards.contains(&card))
    }

    /// Flip 7 under the default rules.
    #[must_use]
    pub fn has_flip7(&self) -> bool {
        self.has_flip7_with(&ScoringConfig::default())
    }

    #[must_use]
    pub fn has_flip7_with(&self, config: &ScoringConfig) -> bool {
        has_flip7_with(&self.cards, config)
    }

    // === Transitions (used by the reducer) ===

    /// Append a card and rescore.
    pub(crate) fn push_card(&mut self, card: Card, config: &ScoringConfig) {
        self.cards.push(card);
        self.rescore(config);
    }

    /// Remove the first occurrence of a card and rescore.
    ///
    /// Returns false if the card was not in the hand.
    pub(crate) fn remove_card(&mut self, card: Card, config: &ScoringConfig) -> bool {
        match self.cards.iter().position(|&c| c == card) {
            Some(pos) => {
                self.cards.remove(pos);
                self.rescore(config);
                true
            }
            None => false,
        }
    }

    /// Bank the round score and clear the hand.
    pub(crate) fn end_round(&mut self) {
        self.total_score = self.total_score.saturating_add(self.round_score);
        self.round_score = 0;
        self.cards.clear();
    }

    fn rescore(&mut self, config: &ScoringConfig) {
        self.round_score = score_with(&self.cards, config);
    }
}
