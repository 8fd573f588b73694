use cheat_engine::cards::{full_deck, Card, DECK_SIZE};
use cheat_engine::deck::Deck;
use cheat_engine::errors::GameError;

#[test]
fn fresh_deck_holds_the_full_set_in_canonical_order() {
    let mut deck = Deck::new_with_seed(42);
    assert_eq!(deck.remaining(), DECK_SIZE);
    assert_eq!(deck.cards(), full_deck().as_slice());

    // drawn from the tail: both Jokers come first
    assert!(deck.draw_one().unwrap().is_joker());
    assert!(deck.draw_one().unwrap().is_joker());
    assert!(!deck.draw_one().unwrap().is_joker());
}

#[test]
fn exhausted_deck_reports_empty() {
    let mut deck = Deck::new_with_seed(3);
    deck.shuffle();
    let mut drawn = Vec::new();
    while let Some(c) = deck.draw_one() {
        drawn.push(c);
    }
    assert_eq!(drawn.len(), DECK_SIZE);
    assert!(deck.draw_one().is_none());
    assert_eq!(deck.try_draw(), Err(GameError::EmptyDeck));

    drawn.sort();
    let mut expected = full_deck();
    expected.sort();
    assert_eq!(drawn, expected, "shuffle must be a permutation");
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = (0..10).map(|_| d1.draw_one().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.draw_one().unwrap()).collect();
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = (0..10).map(|_| d1.draw_one().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.draw_one().unwrap()).collect();
    assert_ne!(
        a, b,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn reshuffling_restores_drawn_cards() {
    let mut deck = Deck::new_with_seed(8);
    deck.shuffle();
    for _ in 0..20 {
        deck.draw_one();
    }
    deck.shuffle();
    assert_eq!(deck.remaining(), DECK_SIZE);
    deck.reset();
    assert_eq!(deck.cards(), full_deck().as_slice());
}
