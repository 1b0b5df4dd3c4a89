//! Deck model integration tests.
//!
//! These tests drive the deck the way a presentation layer would:
//! - Build from a pool or a config
//! - Render the visible window
//! - Forward taps and window controls

use memorize::{Card, CardId, Deck, DeckConfig, DeckError, Face, Gesture};

fn visible_contents(deck: &Deck) -> Vec<String> {
    deck.visible_cards().iter().map(|c| c.content().to_string()).collect()
}

fn id_of(deck: &Deck, content: &str) -> CardId {
    deck.cards()
        .find(|c| c.content() == content)
        .map(Card::id)
        .expect("Card should exist")
}

// =============================================================================
// Scenario Tests
// =============================================================================

/// Walk through the vehicle deck: build, widen the window, flip a card.
#[test]
fn test_vehicle_scenario() {
    let mut deck = Deck::new(["🚂", "🚑", "🚔", "🛳"], 2).unwrap();

    assert_eq!(deck.len(), 4);
    assert!(deck.cards().all(Card::is_face_up));
    assert_eq!(visible_contents(&deck), ["🚂", "🚑"]);

    deck.increase_visible();
    assert_eq!(visible_contents(&deck), ["🚂", "🚑", "🚔"]);

    let ambulance = id_of(&deck, "🚑");
    deck.toggle_face(ambulance).unwrap();
    assert!(!deck.visible_cards()[1].is_face_up());
}

/// Invalid construction and unknown ids both surface as errors.
#[test]
fn test_error_scenario() {
    assert!(matches!(
        Deck::new(["a", "b"], 0),
        Err(DeckError::InvalidVisibleCount { requested: 0, deck_len: 2 })
    ));

    let mut deck = Deck::new(["a", "b"], 2).unwrap();
    let err = deck.toggle_face(CardId(9999)).unwrap_err();

    assert_eq!(err, DeckError::CardNotFound(CardId(9999)));
    assert!(err.is_recoverable());

    // Position 0 must not have been touched
    assert!(deck.visible_cards()[0].is_face_up());
    assert_eq!(deck.face_up_count(), 2);
}

/// Lookup flips the exact card, regardless of position.
#[test]
fn test_lookup_by_identity() {
    let mut deck = Deck::new(["A", "B", "C"], 3).unwrap();
    let b = id_of(&deck, "B");

    deck.toggle_face(b).unwrap();

    let faces: Vec<_> = deck.cards().map(|c| (c.content().to_string(), c.face())).collect();
    assert_eq!(
        faces,
        vec![
            ("A".to_string(), Face::Up),
            ("B".to_string(), Face::Down),
            ("C".to_string(), Face::Up),
        ]
    );
}

// =============================================================================
// Presentation Layer Tests
// =============================================================================

/// A UI loop that re-renders only when the snapshot changed.
#[test]
fn test_snapshot_driven_rendering() {
    let mut deck = Deck::from_config(&DeckConfig::default()).unwrap();
    let mut renders = 0;
    let mut last_seen = deck.clone();

    let gestures = [
        Gesture::ShowFewer,
        Gesture::ShowFewer,
        Gesture::ShowFewer,
        Gesture::ShowFewer, // saturated
        Gesture::Tap(CardId(0)),
        Gesture::Tap(CardId(500)), // stale
        Gesture::ShowMore,
    ];

    for gesture in gestures {
        deck.apply_lenient(gesture);
        if deck != last_seen {
            renders += 1;
            last_seen = deck.clone();
        }
    }

    assert_eq!(renders, 5);
    assert_eq!(deck.version(), 5);
    assert_eq!(deck.visible_count(), 2);
}

/// Taps on cards from before a rebuild are rejected.
#[test]
fn test_stale_tap_after_rebuild() {
    let mut deck = Deck::new(["🚂", "🚑"], 2).unwrap();
    let old_ids: Vec<_> = deck.cards().map(Card::id).collect();

    deck.rebuild(["🚀", "🛶", "🚁"], 3).unwrap();

    for id in old_ids {
        assert!(!deck.contains(id));
        assert_eq!(deck.apply(Gesture::Tap(id)), Err(DeckError::CardNotFound(id)));
    }
    assert!(deck.cards().all(Card::is_face_up));
}

/// Seeded configs shuffle content but keep ids in construction order.
#[test]
fn test_shuffled_config() {
    let config = DeckConfig::default().with_shuffle_seed(2021);
    let deck = Deck::from_config(&config).unwrap();

    let mut contents: Vec<_> = deck.cards().map(|c| c.content().to_string()).collect();
    let mut expected = DeckConfig::default().content_pool;
    assert_ne!(contents, expected);

    contents.sort();
    expected.sort();
    assert_eq!(contents, expected);

    for (pos, card) in deck.cards().enumerate() {
        assert_eq!(deck.position(card.id()), Some(pos));
    }
}

/// Rebuilding from a config keeps the id allocator running.
#[test]
fn test_rebuild_from_config() {
    let mut deck = Deck::new(["a"], 1).unwrap();
    let config = DeckConfig::new(["x", "y"]).with_initial_visible(2);

    deck.rebuild_from_config(&config).unwrap();

    let ids: Vec<_> = deck.cards().map(Card::id).collect();
    assert_eq!(ids, vec![CardId(1), CardId(2)]);

    let bad = DeckConfig::new(["x"]).with_initial_visible(5);
    assert!(matches!(
        deck.rebuild_from_config(&bad),
        Err(DeckError::InvalidVisibleCount { requested: 5, deck_len: 1 })
    ));
    assert_eq!(deck.len(), 2);
}

/// Config loaded from TOML builds the same deck as one built in code.
#[test]
fn test_config_from_toml() {
    let config = DeckConfig::from_toml(
        r#"
        content_pool = ["🚂", "🚑", "🚔"]
        initial_visible = 3
        "#,
    )
    .unwrap();

    let from_toml = Deck::from_config(&config).unwrap();
    let from_code = Deck::new(["🚂", "🚑", "🚔"], 3).unwrap();

    assert_eq!(from_toml, from_code);
}

/// Visible cards serialize for a UI bridge.
#[test]
fn test_visible_cards_serialize() {
    let mut deck = Deck::new(["🚂", "🚑"], 2).unwrap();
    deck.toggle_face(CardId(1)).unwrap();

    let shown: Vec<Card> = deck.visible_cards().into_iter().collect();
    let json = serde_json::to_string(&shown).unwrap();
    let restored: Vec<Card> = serde_json::from_str(&json).unwrap();

    assert_eq!(shown, restored);
    assert!(!restored[1].is_face_up());
}
