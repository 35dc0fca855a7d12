//! Card definitions - static card data.
//!
//! `Card` identifies one of the 22 faces in the Flip 7 deck. Its
//! category and numeric value are fixed; `CardDefinition` adds the
//! display data (name, deck count, description) for the presentation layer.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

use crate::errors::EngineError;

/// Scoring category of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardCategory {
    /// Value 0-12, summed. Counted toward the Flip 7 bonus.
    Number,
    /// Flat addition (+2 .. +10).
    BonusAdd,
    /// Doubles the total once, no matter how many are held.
    BonusMultiply,
    /// No direct scoring effect.
    Action,
}

/// A card face from the fixed catalog.
///
/// Serializes as its catalog id (`"7"`, `"plus_4"`, `"x2"`, `"freeze"`, ...).
///
/// ## Example
///
/// ```
/// use flip7_score::cards::{Card, CardCategory};
///
/// let card: Card = "plus_4".parse().unwrap();
/// assert_eq!(card, Card::Plus4);
/// assert_eq!(card.category(), CardCategory::BonusAdd);
/// assert_eq!(card.value(), 4);
/// assert_eq!(card.label(), "+4");
///
/// assert!("plus_3".parse::<Card>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Card {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Eleven,
    Twelve,
    Plus2,
    Plus4,
    Plus6,
    Plus8,
    Plus10,
    Times2,
    Freeze,
    FlipThree,
    SecondChance,
}

impl Card {
    /// Every card in display order.
    pub const ALL: [Card; 22] = [
        Card::Zero,
        Card::One,
        Card::Two,
        Card::Three,
        Card::Four,
        Card::Five,
        Card::Six,
        Card::Seven,
        Card::Eight,
        Card::Nine,
        Card::Ten,
        Card::Eleven,
        Card::Twelve,
        Card::Plus2,
        Card::Plus4,
        Card::Plus6,
        Card::Plus8,
        Card::Plus10,
        Card::Times2,
        Card::Freeze,
        Card::FlipThree,
        Card::SecondChance,
    ];

    /// Number card with the given face value, if it exists.
    #[must_use]
    pub fn number(value: u32) -> Option<Card> {
        if value <= 12 {
            Some(Self::ALL[value as usize])
        } else {
            None
        }
    }

    /// Catalog identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Card::Zero => "0",
            Card::One => "1",
            Card::Two => "2",
            Card::Three => "3",
            Card::Four => "4",
            Card::Five => "5",
            Card::Six => "6",
            Card::Seven => "7",
            Card::Eight => "8",
            Card::Nine => "9",
            Card::Ten => "10",
            Card::Eleven => "11",
            Card::Twelve => "12",
            Card::Plus2 => "plus_2",
            Card::Plus4 => "plus_4",
            Card::Plus6 => "plus_6",
            Card::Plus8 => "plus_8",
            Card::Plus10 => "plus_10",
            Card::Times2 => "x2",
            Card::Freeze => "freeze",
            Card::FlipThree => "flip_three",
            Card::SecondChance => "second_chance",
        }
    }

    #[must_use]
    pub const fn category(self) -> CardCategory {
        match self {
            Card::Plus2 | Card::Plus4 | Card::Plus6 | Card::Plus8 | Card::Plus10 => {
                CardCategory::BonusAdd
            }
            Card::Times2 => CardCategory::BonusMultiply,
            Card::Freeze | Card::FlipThree | Card::SecondChance => CardCategory::Action,
            _ => CardCategory::Number,
        }
    }

    /// Numeric value: face value for number cards, bonus amount for
    /// bonus-add cards, 0 otherwise.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Card::Plus2 => 2,
            Card::Plus4 => 4,
            Card::Plus6 => 6,
            Card::Plus8 => 8,
            Card::Plus10 => 10,
            Card::Times2 | Card::Freeze | Card::FlipThree | Card::SecondChance => 0,
            // Number cards are declared first, in value order.
            number => number as u32,
        }
    }

    #[must_use]
    pub const fn is_number(self) -> bool {
        matches!(self.category(), CardCategory::Number)
    }

    /// Short label shown on card buttons.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Card::Times2 => "x2".to_string(),
            Card::Freeze => "Freeze".to_string(),
            Card::FlipThree => "Flip 3".to_string(),
            Card::SecondChance => "2nd Chance".to_string(),
            c if c.category() == CardCategory::BonusAdd => format!("+{}", c.value()),
            c => c.id().to_string(),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Card {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|card| card.id() == s)
            .ok_or_else(|| EngineError::UnknownCard(s.to_string()))
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        id.parse().map_err(serde::de::Error::custom)
    }
}

/// Static card definition with display data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    pub card: Card,

    /// Catalog identifier (same as `card.id()`).
    pub id: String,

    /// Full card name.
    pub name: String,

    pub category: CardCategory,

    pub value: u32,

    /// Copies of this card in a full deck.
    pub deck_count: u32,

    /// Rules text for action and bonus cards.
    pub description: Option<String>,
}

impl CardDefinition {
    /// Build the definition for a card.
    #[must_use]
    pub fn new(card: Card) -> Self {
        const NUMBER_NAMES: [&str; 13] = [
            "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
            "Ten", "Eleven", "Twelve",
        ];

        let (name, deck_count, description) = match card.category() {
            CardCategory::Number => {
                let value = card.value();
                let count = if value == 0 { 1 } else { value };
                (NUMBER_NAMES[value as usize].to_string(), count, None)
            }
            CardCategory::BonusAdd => (
                card.label(),
                1,
                Some(format!("+{} to the sum of your number cards", card.value())),
            ),
            CardCategory::BonusMultiply => (
                card.label(),
                1,
                Some("Doubles the sum of your number cards".to_string()),
            ),
            CardCategory::Action => {
                let (name, description) = match card {
                    Card::Freeze => ("Freeze", "Freezes an active player"),
                    Card::FlipThree => ("Flip Three", "An active player flips three cards"),
                    _ => ("Second Chance", "Keep this card for a second chance"),
                };
                (name.to_string(), 3, Some(description.to_string()))
            }
        };

        Self {
            card,
            id: card.id().to_string(),
            name,
            category: card.category(),
            value: card.value(),
            deck_count,
            description,
        }
    }
}
