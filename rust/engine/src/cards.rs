use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Represents one of the four suits, plus the sentinel suit carried by Jokers.
/// Used as a component of [`Card`] to fully define a playing card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit (♠)
    Spades,
    /// Hearts suit (♥)
    Hearts,
    /// Diamonds suit (♦)
    Diamonds,
    /// Clubs suit (♣)
    Clubs,
    /// Sentinel suit for the two Jokers
    Joker,
}

/// Represents the rank (face value) of a card, Joker first.
/// The discriminant doubles as the slot index in rank histograms.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Wildcard, always counts as the announced rank
    Joker = 0,
    /// Ace (1)
    Ace,
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
}

/// Number of distinct ranks including the Joker.
pub const RANK_COUNT: usize = 14;

/// Total number of cards in a game.
pub const DECK_SIZE: usize = 54;

impl Rank {
    /// Every rank in enumeration order (Joker, Ace, 2..10, Jack, Queen, King).
    pub const ALL: [Rank; RANK_COUNT] = [
        Rank::Joker,
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// The 13 ranks a player may announce.
    pub const DECLARABLE: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: usize) -> Option<Rank> {
        Rank::ALL.get(i).copied()
    }

    pub fn is_declarable(self) -> bool {
        self != Rank::Joker
    }

    pub fn name(self) -> &'static str {
        match self {
            Rank::Joker => "Joker",
            Rank::Ace => "Ace",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rank {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Rank::ALL
            .iter()
            .copied()
            .find(|r| r.name().eq_ignore_ascii_case(s))
            .or(match s.to_ascii_uppercase().as_str() {
                "A" => Some(Rank::Ace),
                "J" => Some(Rank::Jack),
                "Q" => Some(Rank::Queen),
                "K" => Some(Rank::King),
                _ => None,
            })
            .ok_or_else(|| format!("unknown rank: {}", s))
    }
}

/// Represents a single playing card with a suit and rank.
/// Cards are plain values: the two Jokers compare equal, and hands are
/// treated as multisets.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card (Joker, Ace through King)
    pub rank: Rank,
    /// The suit of the card ([`Suit::Joker`] for Jokers)
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn joker() -> Self {
        Self {
            rank: Rank::Joker,
            suit: Suit::Joker,
        }
    }

    pub fn is_joker(&self) -> bool {
        self.rank == Rank::Joker
    }

    /// A card backs up a claim when it has the claimed rank or is a Joker.
    pub fn matches_claim(&self, claim: Rank) -> bool {
        self.rank == claim || self.is_joker()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_joker() {
            write!(f, "Joker")
        } else {
            write!(f, "{} of {:?}", self.rank, self.suit)
        }
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs]
}

/// The canonical 54-card order: ranks Ace..King, each in suit order,
/// followed by the two Jokers.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(DECK_SIZE);
    for &r in &Rank::DECLARABLE {
        for &s in &all_suits() {
            v.push(Card { rank: r, suit: s });
        }
    }
    v.push(Card::joker());
    v.push(Card::joker());
    v
}

/// Counts cards per rank slot (Joker at 0, then Ace..King).
pub fn rank_histogram(cards: &[Card]) -> [u8; RANK_COUNT] {
    let mut counts = [0u8; RANK_COUNT];
    for c in cards {
        counts[c.rank.index()] += 1;
    }
    counts
}
