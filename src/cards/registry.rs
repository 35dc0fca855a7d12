//! Card catalog for definition lookup.
//!
//! The `CardCatalog` maps catalog ids to `CardDefinition`s and keeps
//! the display order of the deck.

use rustc_hash::FxHashMap;

use super::definition::{Card, CardCategory, CardDefinition};
use crate::errors::EngineError;

/// Catalog of card definitions.
///
/// ## Example
///
/// ```
/// use flip7_score::cards::{Card, CardCatalog};
///
/// let catalog = CardCatalog::standard();
///
/// let def = catalog.get("second_chance").unwrap();
/// assert_eq!(def.card, Card::SecondChance);
/// assert_eq!(catalog.deck_size(), 94);
/// ```
#[derive(Clone, Debug)]
pub struct CardCatalog {
    by_id: FxHashMap<&'static str, CardDefinition>,
}

impl CardCatalog {
    /// Catalog of the 22 Flip 7 cards.
    #[must_use]
    pub fn standard() -> Self {
        let by_id = Card::ALL
            .iter()
            .map(|&card| (card.id(), CardDefinition::new(card)))
            .collect();

        Self { by_id }
    }

    /// Get a card definition by catalog id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CardDefinition> {
        self.by_id.get(id)
    }

    /// Get the definition of a card.
    #[must_use]
    pub fn definition(&self, card: Card) -> &CardDefinition {
        // Every `Card` is registered by `standard()`.
        &self.by_id[card.id()]
    }

    /// Resolve a catalog id to a card.
    pub fn parse(&self, id: &str) -> Result<Card, EngineError> {
        self.get(id)
            .map(|def| def.card)
            .ok_or_else(|| EngineError::UnknownCard(id.to_string()))
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Iterate over all definitions in display order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        Card::ALL.into_iter().map(move |card| self.definition(card))
    }

    /// Find definitions by category, in display order.
    pub fn find_by_category(
        &self,
        category: CardCategory,
    ) -> impl Iterator<Item = &CardDefinition> {
        self.iter().filter(move |def| def.category == category)
    }

    /// Total number of cards in a full deck.
    #[must_use]
    pub fn deck_size(&self) -> u32 {
        self.by_id.values().map(|def| def.deck_count).sum()
    }
}

impl Default for CardCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
