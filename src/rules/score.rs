//! Round scoring.
//!
//! A hand scores as:
//!
//! ```text
//! total = number_sum + bonus_sum + (number_count >= 7 ? 15 : 0)
//! total *= 2   if any x2 card is held (once, never compounded)
//! ```
//!
//! The Flip 7 check counts number cards by occurrence, not by distinct
//! value. Action cards score nothing.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardCategory};
use crate::core::ScoringConfig;

/// How a hand's score was formed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub number_sum: u32,
    pub number_count: usize,
    pub bonus_sum: u32,
    pub flip7_bonus: u32,
    /// A bonus-multiply card was held.
    pub multiplied: bool,
    pub total: u32,
}

impl ScoreBreakdown {
    /// Score a hand under the given rules.
    #[must_use]
    pub fn compute(cards: &[Card], config: &ScoringConfig) -> Self {
        let mut breakdown = Self::default();

        for &card in cards {
            match card.category() {
                CardCategory::Number => {
                    breakdown.number_sum += card.value();
                    breakdown.number_count += 1;
                }
                CardCategory::BonusAdd => breakdown.bonus_sum += card.value(),
                CardCategory::BonusMultiply => breakdown.multiplied = true,
                CardCategory::Action => {}
            }
        }

        if breakdown.number_count >= config.flip7_count {
            breakdown.flip7_bonus = config.flip7_bonus;
        }

        let total = breakdown
            .number_sum
            .saturating_add(breakdown.bonus_sum)
            .saturating_add(breakdown.flip7_bonus);
        breakdown.total = if breakdown.multiplied {
            total.saturating_mul(config.multiplier)
        } else {
            total
        };

        breakdown
    }

    /// Whether the Flip 7 bonus was applied.
    #[must_use]
    pub fn has_flip7(&self) -> bool {
        self.flip7_bonus > 0
    }
}

/// Score a hand under the default rules.
///
/// ```
/// use flip7_score::cards::Card;
/// use flip7_score::rules::compute_score;
///
/// assert_eq!(compute_score(&[Card::One, Card::Two, Card::Times2]), 6);
/// assert_eq!(compute_score(&[Card::Three, Card::Plus4]), 7);
/// ```
#[must_use]
pub fn compute_score(cards: &[Card]) -> u32 {
    score_with(cards, &ScoringConfig::default())
}

/// Score a hand under custom rules.
#[must_use]
pub fn score_with(cards: &[Card], config: &ScoringConfig) -> u32 {
    ScoreBreakdown::compute(cards, config).total
}

/// Number of number-category cards, duplicates included.
#[must_use]
pub fn number_count(cards: &[Card]) -> usize {
    cards.iter().filter(|card| card.is_number()).count()
}

/// Whether a hand earns the Flip 7 bonus under the default rules.
#[must_use]
pub fn has_flip7(cards: &[Card]) -> bool {
    has_flip7_with(cards, &ScoringConfig::default())
}

#[must_use]
pub fn has_flip7_with(cards: &[Card], config: &ScoringConfig) -> bool {
    number_count(cards) >= config.flip7_count
}
