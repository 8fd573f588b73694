use thiserror::Error;

use crate::cards::Rank;
use crate::player::ActionType;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Illegal action: {0}")]
    IllegalAction(#[from] IllegalAction),
    #[error("Deck is empty")]
    EmptyDeck,
}

/// Why an action was rejected. State is never modified when one of these is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IllegalAction {
    #[error("Game is already over")]
    GameOver,
    #[error("{action:?} is not allowed (round starter: {is_starter})")]
    NotAllowed { action: ActionType, is_starter: bool },
    #[error("A play must contain at least one card")]
    EmptyPlay,
    #[error("A play may contain at most {max} cards, got {count}")]
    TooManyCards { count: usize, max: usize },
    #[error("Claim must be {expected}, got {claimed}")]
    ClaimMismatch { expected: Rank, claimed: Rank },
    #[error("{0} cannot be announced")]
    UndeclarableRank(Rank),
    #[error("Player {seat} does not hold the played cards")]
    CardsNotOwned { seat: usize },
}
