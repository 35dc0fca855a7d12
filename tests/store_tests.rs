//! Store tests from the presentation layer's point of view.
//!
//! A host generates ids, dispatches actions, and reads snapshots to drive
//! its UI (card buttons, Flip 7 celebration, final leaderboard).

use flip7_score::cards::{Card, CardCatalog};
use flip7_score::core::{Action, GameStatus, IdGenerator};
use flip7_score::{EngineConfig, GameEngine, GameStore};

/// Test that generated ids drive a whole session.
#[test]
fn test_session_with_generated_ids() {
    let mut ids = IdGenerator::new(2024);
    let mut store: GameStore = GameStore::default();

    let game_id = ids.game_id();
    let players: Vec<_> = (0..3).map(|_| ids.player_id()).collect();

    store.dispatch(Action::create_game(game_id.clone()));
    for (i, id) in players.iter().enumerate() {
        store.dispatch(Action::add_player(game_id.clone(), id.clone(), format!("Player {i}")));
    }

    assert!(store.can_start(&game_id));
    assert!(!store.can_start(&ids.game_id()));

    let game = store.dispatch_to_game(Action::start_game(game_id.clone())).unwrap();
    assert_eq!(game.status, GameStatus::Playing);
    assert!(!store.can_start(&game_id));
}

/// Test that a lone player cannot start under the default minimum.
#[test]
fn test_can_start_needs_two_players() {
    let mut store: GameStore = GameStore::default();
    store.dispatch_all([Action::create_game("g"), Action::add_player("g", "p", "P")]);
    assert!(!store.can_start(&"g".into()));

    store.dispatch(Action::add_player("g", "q", "Q"));
    assert!(store.can_start(&"g".into()));
}

/// Test that an unknown card id from the host is dropped quietly.
#[test]
fn test_unknown_card_from_host_is_ignored() {
    let mut store: GameStore = GameStore::default();
    store.dispatch_all([
        Action::create_game("g"),
        Action::add_player("g", "p", "P"),
        Action::start_game("g"),
        Action::add_card("g", "p", Card::Nine),
    ]);
    let before = store.snapshot();

    let action: Action = serde_json::from_str(
        r#"{"type": "ADD_CARD", "gameId": "g", "playerId": "p", "cardId": "x3"}"#,
    )
    .unwrap();
    store.dispatch(action);

    assert_eq!(store.state(), &before);
}

/// Test the Flip 7 indicator a host would use to fire a celebration.
#[test]
fn test_flip7_indicator_follows_hand() {
    let mut store: GameStore = GameStore::default();
    store.dispatch_all([
        Action::create_game("g"),
        Action::add_player("g", "p", "P"),
        Action::start_game("g"),
    ]);

    let numbers = [Card::Zero, Card::One, Card::Two, Card::Three, Card::Four, Card::Five];
    for card in numbers {
        store.dispatch(Action::add_card("g", "p", card));
    }
    let game = store.dispatch_to_game(Action::add_card("g", "p", Card::Freeze)).unwrap();
    assert!(!game.players[0].has_flip7());

    let game = store.dispatch_to_game(Action::add_card("g", "p", Card::Six)).unwrap();
    assert!(game.players[0].has_flip7());
    assert_eq!(game.players[0].round_score(), 36);

    let game = store.dispatch_to_game(Action::remove_card("g", "p", Card::Zero)).unwrap();
    assert!(!game.players[0].has_flip7());
    assert_eq!(game.players[0].round_score(), 21);
}

/// Test the card picker state: held number cards are disabled.
#[test]
fn test_card_picker() {
    let catalog = CardCatalog::standard();
    let mut store: GameStore = GameStore::default();
    store.dispatch_all([
        Action::create_game("g"),
        Action::add_player("g", "p", "P"),
        Action::start_game("g"),
        Action::add_card("g", "p", Card::Eight),
        Action::add_card("g", "p", Card::Plus2),
    ]);

    let player = &store.state().games[0].players[0];
    let disabled: Vec<_> = catalog
        .iter()
        .filter(|def| !player.can_take(def.card))
        .map(|def| def.id.as_str())
        .collect();

    assert_eq!(disabled, vec!["8"]);
    assert_eq!(player.card_count(Card::Plus2), 1);
}

/// Test the final leaderboard order.
#[test]
fn test_standings() {
    let engine = GameEngine::new(EngineConfig::default());
    let mut store = GameStore::with_engine(engine);
    store.dispatch_all([
        Action::create_game("g"),
        Action::add_player("g", "a", "Ann"),
        Action::add_player("g", "b", "Ben"),
        Action::add_player("g", "c", "Cid"),
        Action::start_game("g"),
        Action::add_card("g", "a", Card::Four),
        Action::add_card("g", "b", Card::Eleven),
        Action::add_card("g", "c", Card::Four),
        Action::new_round("g"),
    ]);

    let game = &store.state().games[0];
    let names: Vec<_> = game.standings().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Ben", "Ann", "Cid"]);
}

/// Test that earlier snapshots stay valid after further dispatches.
#[test]
fn test_snapshots_are_stable() {
    let mut store: GameStore = GameStore::default();
    store.dispatch_all([
        Action::create_game("g"),
        Action::add_player("g", "p", "P"),
        Action::start_game("g"),
    ]);

    let before = store.snapshot();
    store.dispatch(Action::add_card("g", "p", Card::Twelve));

    assert!(before.games[0].players[0].cards().is_empty());
    assert_eq!(store.state().games[0].players[0].cards(), &[Card::Twelve]);
}
