use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// Where the current round stands.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// No claim yet: `starter` must open with an unconstrained play.
    AwaitingOpen { starter: usize },
    /// A claim of `claim` is on the table and the other seats may respond.
    AwaitingResponse {
        claim: Rank,
        last_seat: usize,
        last_count: usize,
        passes: usize,
    },
    /// `winner` emptied their hand truthfully.
    Finished { winner: usize },
}

/// Round-level state: the phase plus the discard pile (oldest card first).
#[derive(Debug, Clone)]
pub struct RoundState {
    phase: RoundPhase,
    pile: Vec<Card>,
}

impl RoundState {
    pub fn new(starter: usize) -> Self {
        Self {
            phase: RoundPhase::AwaitingOpen { starter },
            pile: Vec::new(),
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn pile(&self) -> &[Card] {
        &self.pile
    }

    /// The announced rank, or `None` while the round is open.
    pub fn announced(&self) -> Option<Rank> {
        match self.phase {
            RoundPhase::AwaitingResponse { claim, .. } => Some(claim),
            _ => None,
        }
    }

    pub fn starter(&self) -> Option<usize> {
        match self.phase {
            RoundPhase::AwaitingOpen { starter } => Some(starter),
            _ => None,
        }
    }

    /// Consecutive passes since the last play.
    pub fn passes(&self) -> usize {
        match self.phase {
            RoundPhase::AwaitingResponse { passes, .. } => passes,
            _ => 0,
        }
    }

    /// The cards of the most recent play, taken from the pile's tail.
    pub fn last_play(&self) -> Option<&[Card]> {
        match self.phase {
            RoundPhase::AwaitingResponse { last_count, .. } => {
                let start = self.pile.len().checked_sub(last_count)?;
                Some(&self.pile[start..])
            }
            _ => None,
        }
    }

    pub fn winner(&self) -> Option<usize> {
        match self.phase {
            RoundPhase::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    pub(crate) fn record_play(&mut self, seat: usize, cards: &[Card], claim: Rank) {
        self.pile.extend_from_slice(cards);
        self.phase = RoundPhase::AwaitingResponse {
            claim,
            last_seat: seat,
            last_count: cards.len(),
            passes: 0,
        };
    }

    /// Returns the pass count after this pass.
    pub(crate) fn record_pass(&mut self) -> usize {
        if let RoundPhase::AwaitingResponse { passes, .. } = &mut self.phase {
            *passes += 1;
            *passes
        } else {
            0
        }
    }

    /// Opens a new round. The pile is left as it is.
    pub(crate) fn open(&mut self, starter: usize) {
        self.phase = RoundPhase::AwaitingOpen { starter };
    }

    pub(crate) fn finish(&mut self, winner: usize) {
        self.phase = RoundPhase::Finished { winner };
    }

    /// Empties the pile, handing every card to the caller.
    pub(crate) fn take_pile(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.pile)
    }
}
