use crate::cards::{rank_histogram, Card, Rank, RANK_COUNT};
use crate::errors::{GameError, IllegalAction};
use serde::{Deserialize, Serialize};

/// The three action kinds, numbered as decision-makers index them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    /// Doubt the most recent play
    Challenge = 0,
    /// Decline to play this turn
    Pass = 1,
    /// Put cards on the pile under a claimed rank
    Play = 2,
}

impl ActionType {
    pub const ALL: [ActionType; 3] = [ActionType::Challenge, ActionType::Pass, ActionType::Play];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: usize) -> Option<ActionType> {
        ActionType::ALL.get(i).copied()
    }
}

/// Represents a player action during a round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Dispute the truthfulness of the last play
    Challenge,
    /// Pass the turn
    Pass,
    /// Play face-down cards while claiming they all have rank `claim`
    Play { cards: Vec<Card>, claim: Rank },
}

impl PlayerAction {
    pub fn play(cards: Vec<Card>, claim: Rank) -> Self {
        PlayerAction::Play { cards, claim }
    }

    pub fn action_type(&self) -> ActionType {
        match self {
            PlayerAction::Challenge => ActionType::Challenge,
            PlayerAction::Pass => ActionType::Pass,
            PlayerAction::Play { .. } => ActionType::Play,
        }
    }

    /// Number of cards placed on the pile (0 for Challenge and Pass).
    pub fn card_count(&self) -> usize {
        match self {
            PlayerAction::Play { cards, .. } => cards.len(),
            _ => 0,
        }
    }
}

/// A seat at the table: unique name plus a multiset hand.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    hand: Vec<Card>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    pub fn has_empty_hand(&self) -> bool {
        self.hand.is_empty()
    }

    pub fn receive_card(&mut self, c: Card) {
        self.hand.push(c);
    }

    pub fn receive_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
    }

    pub fn clear_cards(&mut self) {
        self.hand.clear();
    }

    pub fn rank_histogram(&self) -> [u8; RANK_COUNT] {
        rank_histogram(&self.hand)
    }

    /// True when every card in `cards` can be matched to a distinct card in hand.
    pub fn holds_all(&self, cards: &[Card]) -> bool {
        let mut remaining = self.hand.clone();
        cards.iter().all(|c| match remaining.iter().position(|h| h == c) {
            Some(i) => {
                remaining.swap_remove(i);
                true
            }
            None => false,
        })
    }

    /// Removes `cards` from the hand as one unit: either all are removed or
    /// nothing changes.
    pub fn take_cards(&mut self, seat: usize, cards: &[Card]) -> Result<(), GameError> {
        if !self.holds_all(cards) {
            return Err(IllegalAction::CardsNotOwned { seat }.into());
        }
        for c in cards {
            if let Some(i) = self.hand.iter().position(|h| h == c) {
                self.hand.remove(i);
            }
        }
        Ok(())
    }
}
