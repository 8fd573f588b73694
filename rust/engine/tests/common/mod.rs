#![allow(dead_code)]

use cheat_engine::cards::{full_deck, Card, Rank, Suit};
use cheat_engine::engine::CheatEnv;

pub fn c(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Engine seeded from fixed hands; unshuffled so nothing depends on the RNG.
pub fn env_with_hands(names: &[&str], hands: Vec<Vec<Card>>) -> CheatEnv {
    let mut env = CheatEnv::new(Some(1)).with_shuffle(false);
    env.reset_with_hands(names, hands)
        .expect("fixture hands should be valid");
    env
}

/// Asserts deck + hands + pile is exactly the 54-card set.
pub fn assert_conserved(env: &CheatEnv) {
    let mut all = env.all_cards();
    all.sort();
    let mut expected = full_deck();
    expected.sort();
    assert_eq!(all, expected, "card partition broken");
}
