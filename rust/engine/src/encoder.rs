//! Fixed-length numeric view of the game from one seat's perspective.
//!
//! Layout (changing it is a breaking change for every decision-maker):
//!
//! | offset            | len   | feature                                         |
//! |-------------------|-------|-------------------------------------------------|
//! | 0                 | 14    | own hand rank histogram (Joker, Ace..King)      |
//! | 14                | N - 1 | hand size of every other seat, in seat order    |
//! | 13 + N            | 14    | one-hot announced rank, all zero while open     |
//! | 27 + N            | 1     | discard pile size                               |
//! | 28 + N            | 1     | 1.0 while the round awaits its opening play     |

use serde::{Deserialize, Serialize};

use crate::cards::RANK_COUNT;
use crate::game::RoundState;
use crate::player::Player;

pub const HAND_SLOTS: usize = RANK_COUNT;
pub const RANK_SLOTS: usize = RANK_COUNT;

/// Length of the encoded vector for a table of `players` seats.
pub fn feature_len(players: usize) -> usize {
    HAND_SLOTS + players.saturating_sub(1) + RANK_SLOTS + 2
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    players: usize,
    features: Vec<f32>,
}

impl Observation {
    pub fn as_slice(&self) -> &[f32] {
        &self.features
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn hand_histogram(&self) -> &[f32] {
        &self.features[..HAND_SLOTS]
    }

    pub fn opponent_hand_sizes(&self) -> &[f32] {
        &self.features[HAND_SLOTS..self.rank_offset()]
    }

    pub fn announced_rank(&self) -> &[f32] {
        let start = self.rank_offset();
        &self.features[start..start + RANK_SLOTS]
    }

    pub fn pile_size(&self) -> f32 {
        self.features[self.rank_offset() + RANK_SLOTS]
    }

    pub fn starter_flag(&self) -> f32 {
        self.features[self.rank_offset() + RANK_SLOTS + 1]
    }

    fn rank_offset(&self) -> usize {
        HAND_SLOTS + self.players.saturating_sub(1)
    }
}

/// Encodes the table as seen by `seat`.
pub fn encode(players: &[Player], seat: usize, round: &RoundState) -> Observation {
    let mut features = Vec::with_capacity(feature_len(players.len()));

    let hand = players
        .get(seat)
        .map(Player::rank_histogram)
        .unwrap_or([0; RANK_COUNT]);
    features.extend(hand.iter().map(|&n| f32::from(n)));

    features.extend(
        players
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != seat)
            .map(|(_, p)| p.hand_size() as f32),
    );

    let mut announced = [0.0f32; RANK_SLOTS];
    if let Some(rank) = round.announced() {
        announced[rank.index()] = 1.0;
    }
    features.extend_from_slice(&announced);

    features.push(round.pile().len() as f32);
    features.push(if round.starter().is_some() { 1.0 } else { 0.0 });

    Observation {
        players: players.len(),
        features,
    }
}
