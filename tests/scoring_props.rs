//! Property tests for scoring and the reducer.
//!
//! Hands and action sequences are generated over the full card catalog,
//! duplicates included, since the engine never forbids them.

use proptest::prelude::*;

use flip7_score::cards::{Card, CardCategory};
use flip7_score::core::{Action, GameCollection, GameId, PlayerId};
use flip7_score::rules::{compute_score, has_flip7, number_count, GameEngine, Reducer, ScoreBreakdown};
use flip7_score::ScoringConfig;

fn any_card() -> impl Strategy<Value = Card> {
    proptest::sample::select(Card::ALL.to_vec())
}

fn any_hand() -> impl Strategy<Value = Vec<Card>> {
    proptest::collection::vec(any_card(), 0..16)
}

/// Players "a" and "b" exist; "ghost" never joins.
fn any_player() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("a"), Just("b"), Just("ghost")]
}

/// Card actions on game "g", plus an occasional round end.
fn any_play_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => (any_player(), any_card()).prop_map(|(p, c)| Action::add_card("g", p, c)),
        2 => (any_player(), any_card()).prop_map(|(p, c)| Action::remove_card("g", p, c)),
        1 => Just(Action::new_round("g")),
    ]
}

fn started() -> GameCollection {
    GameEngine::default().reduce_all(
        &GameCollection::new(),
        &[
            Action::create_game("g"),
            Action::add_player("g", "a", "A"),
            Action::add_player("g", "b", "B"),
            Action::start_game("g"),
        ],
    )
}

proptest! {
    #[test]
    fn flip7_matches_bonus(hand in any_hand()) {
        let breakdown = ScoreBreakdown::compute(&hand, &ScoringConfig::default());

        prop_assert_eq!(has_flip7(&hand), number_count(&hand) >= 7);
        prop_assert_eq!(has_flip7(&hand), breakdown.has_flip7());
        prop_assert_eq!(breakdown.total, compute_score(&hand));
    }

    #[test]
    fn score_formula(hand in any_hand()) {
        let numbers: u32 = hand.iter().filter(|c| c.is_number()).map(|c| c.value()).sum();
        let bonuses: u32 = hand
            .iter()
            .filter(|c| c.category() == CardCategory::BonusAdd)
            .map(|c| c.value())
            .sum();
        let flip7 = if has_flip7(&hand) { 15 } else { 0 };
        let base = numbers + bonuses + flip7;

        let expected = if hand.contains(&Card::Times2) { base * 2 } else { base };
        prop_assert_eq!(compute_score(&hand), expected);
    }

    #[test]
    fn score_ignores_order(hand in any_hand()) {
        let mut reversed = hand.clone();
        reversed.reverse();

        prop_assert_eq!(compute_score(&hand), compute_score(&reversed));
    }

    #[test]
    fn action_cards_never_change_score(
        hand in any_hand(),
        action in prop_oneof![Just(Card::Freeze), Just(Card::FlipThree), Just(Card::SecondChance)],
    ) {
        let mut with_action = hand.clone();
        with_action.push(action);

        prop_assert_eq!(compute_score(&hand), compute_score(&with_action));
    }

    #[test]
    fn extra_multipliers_do_not_compound(hand in any_hand()) {
        let mut once = hand.clone();
        once.push(Card::Times2);
        let mut twice = once.clone();
        twice.push(Card::Times2);

        prop_assert_eq!(compute_score(&once), compute_score(&twice));
    }

    #[test]
    fn round_score_tracks_hand(actions in proptest::collection::vec(any_play_action(), 0..40)) {
        let engine = GameEngine::default();
        let state = engine.reduce_all(&started(), &actions);
        let game = state.get(&GameId::new("g")).unwrap();

        for player in game.players.iter() {
            prop_assert_eq!(player.round_score(), compute_score(player.cards()));
        }
        prop_assert!(game.player(&PlayerId::new("ghost")).is_none());
    }

    #[test]
    fn totals_never_decrease(actions in proptest::collection::vec(any_play_action(), 0..40)) {
        let engine = GameEngine::default();
        let mut state = started();
        let mut last = vec![0u32, 0];
        let mut rounds = 1;

        for action in &actions {
            state = engine.apply(&state, action);
            let game = state.get(&GameId::new("g")).unwrap();
            let totals: Vec<u32> = game.players.iter().map(|p| p.total_score()).collect();

            prop_assert!(totals.iter().zip(&last).all(|(now, before)| now >= before));
            if matches!(action, Action::NewRound { .. }) {
                rounds += 1;
            }
            prop_assert_eq!(game.round, rounds);
            last = totals;
        }
    }

    #[test]
    fn winner_is_first_at_max(actions in proptest::collection::vec(any_play_action(), 0..60)) {
        let engine = GameEngine::default();
        let state = engine.reduce_all(&started(), &actions);
        let game = state.get(&GameId::new("g")).unwrap();

        let max = game.players.iter().map(|p| p.total_score()).max().unwrap_or(0);
        let first_at_max = game.players.iter().find(|p| p.total_score() == max).map(|p| p.id.clone());

        // Totals only change at round resolution, so the last resolution
        // saw the current totals.
        if game.round > 1 && max >= 200 {
            prop_assert_eq!(game.winner.clone(), first_at_max);
        } else {
            prop_assert_eq!(game.winner.clone(), None);
        }
    }

    #[test]
    fn unknown_game_is_noop(action in any_play_action()) {
        let state = started();
        let retargeted = match action {
            Action::AddCard { player_id, card_id, .. } => Action::AddCard {
                game_id: "other".into(),
                player_id,
                card_id,
            },
            Action::RemoveCard { player_id, card_id, .. } => Action::RemoveCard {
                game_id: "other".into(),
                player_id,
                card_id,
            },
            _ => Action::new_round("other"),
        };

        prop_assert_eq!(GameEngine::default().apply(&state, &retargeted), state);
    }
}
