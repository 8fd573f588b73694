//! UI helper functions for terminal output formatting.

use cheat_engine::cards::{rank_histogram, Card, Rank};
use cheat_engine::player::PlayerAction;
use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Compact rank counts of a hand, e.g. `Joker×1 Ace×2 Nine×1`.
pub fn format_frequencies(hand: &[Card]) -> String {
    let counts = rank_histogram(hand);
    Rank::ALL
        .iter()
        .filter(|r| counts[r.index()] > 0)
        .map(|r| format!("{}×{}", r, counts[r.index()]))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn describe_action(action: &PlayerAction) -> String {
    match action {
        PlayerAction::Challenge => "challenges".to_string(),
        PlayerAction::Pass => "passes".to_string(),
        PlayerAction::Play { cards, claim } => {
            format!("plays {} card(s) claiming {}", cards.len(), claim)
        }
    }
}
