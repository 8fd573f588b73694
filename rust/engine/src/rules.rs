use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::errors::IllegalAction;
use crate::game::RoundPhase;
use crate::player::{ActionType, PlayerAction};

/// Upper bound on the number of cards a single play may contain.
pub const MAX_PLAY_CARDS: usize = 6;

/// What the seat on turn may do right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalActions {
    /// Allowed action kinds; empty once the game is over
    pub types: Vec<ActionType>,
    /// Whether the seat on turn must open the round
    pub is_starter: bool,
    /// The announced rank, `None` while the round is open
    pub current_rank: Option<Rank>,
    /// Zero-based play sizes: `q` means a play of `q + 1` cards
    pub quantities: Vec<usize>,
    /// Ranks that may be announced; only filled for the starter
    pub ranks: Vec<Rank>,
}

impl LegalActions {
    pub fn allows(&self, action: ActionType) -> bool {
        self.types.contains(&action)
    }

    /// Largest play size in cards (0 when nothing can be played).
    pub fn max_quantity(&self) -> usize {
        self.quantities.len()
    }

    fn none() -> Self {
        Self {
            types: Vec::new(),
            is_starter: false,
            current_rank: None,
            quantities: Vec::new(),
            ranks: Vec::new(),
        }
    }
}

/// Builds the legality descriptor for the seat on turn.
///
/// The starter may only play; everyone else may challenge, pass, or play.
///
/// # Examples
///
/// ```
/// use cheat_engine::game::RoundPhase;
/// use cheat_engine::player::ActionType;
/// use cheat_engine::rules::legal_actions;
///
/// let legal = legal_actions(RoundPhase::AwaitingOpen { starter: 0 }, 27);
/// assert_eq!(legal.types, vec![ActionType::Play]);
/// assert_eq!(legal.quantities, vec![0, 1, 2, 3, 4, 5]);
/// assert_eq!(legal.ranks.len(), 13);
/// ```
pub fn legal_actions(phase: RoundPhase, hand_size: usize) -> LegalActions {
    let (is_starter, current_rank) = match phase {
        RoundPhase::Finished { .. } => return LegalActions::none(),
        RoundPhase::AwaitingOpen { .. } => (true, None),
        RoundPhase::AwaitingResponse { claim, .. } => (false, Some(claim)),
    };

    let types = if is_starter {
        vec![ActionType::Play]
    } else {
        ActionType::ALL.to_vec()
    };
    let ranks = if is_starter {
        Rank::DECLARABLE.to_vec()
    } else {
        Vec::new()
    };

    LegalActions {
        types,
        is_starter,
        current_rank,
        quantities: (0..hand_size.min(MAX_PLAY_CARDS)).collect(),
        ranks,
    }
}

/// Checks an action against the descriptor. Card ownership is checked
/// separately by [`crate::player::Player::take_cards`].
pub fn validate_action(legal: &LegalActions, action: &PlayerAction) -> Result<(), IllegalAction> {
    if legal.types.is_empty() {
        return Err(IllegalAction::GameOver);
    }
    let kind = action.action_type();
    if !legal.allows(kind) {
        return Err(IllegalAction::NotAllowed {
            action: kind,
            is_starter: legal.is_starter,
        });
    }
    if let PlayerAction::Play { cards, claim } = action {
        if cards.is_empty() {
            return Err(IllegalAction::EmptyPlay);
        }
        if cards.len() > MAX_PLAY_CARDS {
            return Err(IllegalAction::TooManyCards {
                count: cards.len(),
                max: MAX_PLAY_CARDS,
            });
        }
        match legal.current_rank {
            Some(expected) if expected != *claim => {
                return Err(IllegalAction::ClaimMismatch {
                    expected,
                    claimed: *claim,
                });
            }
            None if !claim.is_declarable() => {
                return Err(IllegalAction::UndeclarableRank(*claim));
            }
            _ => {}
        }
    }
    Ok(())
}

/// A group of cards lies about `claim` when any card is neither that rank nor a Joker.
pub fn is_lie(cards: &[Card], claim: Rank) -> bool {
    cards.iter().any(|c| !c.matches_claim(claim))
}
