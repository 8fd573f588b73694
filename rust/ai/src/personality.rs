//! Rule-based opponents that differ only in their probabilities.
//!
//! All personalities share one algorithm:
//!
//! **Responding** (a rank is announced): split the hand into matching cards,
//! Jokers and everything else ("fakes"). Without fakes the whole hand is a
//! truthful play, so it is played. Otherwise one roll picks between a direct
//! challenge, an honest answer and a lie. Honest means playing every matching
//! card, else one Joker, else passing or challenging. A lie plays one or two
//! fakes.
//!
//! **Opening** (round is open): announce the modal rank. A hand of one
//! distinct rank is played whole. Otherwise a coin decides between playing
//! every card of the modal rank and playing up to the largest rank count of
//! cards from other ranks.

use cheat_engine::cards::{rank_histogram, Card, Rank};
use cheat_engine::engine::CheatEnv;
use cheat_engine::player::PlayerAction;
use rand::{Rng, RngCore};

use crate::CheatAgent;

/// Probability parameters of a rule-based opponent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Personality {
    pub name: &'static str,
    /// Responding: chance of challenging outright
    pub challenge: f64,
    /// Responding: chance of answering honestly (the rest lies)
    pub truth: f64,
    /// Responding honestly without matching cards: play a Joker if held
    pub joker_fallback: bool,
    /// Responding honestly with nothing to play: chance to challenge instead of pass
    pub stuck_challenge: f64,
    /// Opening: chance of a truthful play
    pub open_truth: f64,
}

impl Personality {
    pub const EIGHTY_TWENTY: Personality = Personality {
        name: "80-20",
        challenge: 0.0,
        truth: 0.8,
        joker_fallback: true,
        stuck_challenge: 0.5,
        open_truth: 0.75,
    };

    pub const ONE_THIRD: Personality = Personality {
        name: "one-third",
        challenge: 1.0 / 3.0,
        truth: 1.0 / 3.0,
        joker_fallback: true,
        stuck_challenge: 0.5,
        open_truth: 0.5,
    };

    pub const HONEST: Personality = Personality {
        name: "100-0",
        challenge: 0.0,
        truth: 1.0,
        joker_fallback: false,
        stuck_challenge: 1.0,
        open_truth: 1.0,
    };

    pub const SIXTY_FORTY: Personality = Personality {
        name: "60-40",
        challenge: 0.0,
        truth: 0.6,
        joker_fallback: true,
        stuck_challenge: 0.5,
        open_truth: 0.6,
    };

    pub const ALL: [Personality; 4] = [
        Personality::EIGHTY_TWENTY,
        Personality::ONE_THIRD,
        Personality::HONEST,
        Personality::SIXTY_FORTY,
    ];

    pub fn by_name(name: &str) -> Option<Personality> {
        Personality::ALL.into_iter().find(|p| p.name == name)
    }

    /// Chooses an action from the hand and the announced rank alone
    /// (`None` means this seat opens the round).
    pub fn decide(
        &self,
        hand: &[Card],
        announced: Option<Rank>,
        rng: &mut dyn RngCore,
    ) -> PlayerAction {
        match announced {
            Some(claim) => self.respond(hand, claim, rng),
            None => self.open(hand, rng),
        }
    }

    fn respond(&self, hand: &[Card], claim: Rank, rng: &mut dyn RngCore) -> PlayerAction {
        let matching: Vec<Card> = hand.iter().filter(|c| c.rank == claim).copied().collect();
        let jokers: Vec<Card> = hand.iter().filter(|c| c.is_joker()).copied().collect();
        let fakes: Vec<Card> = hand
            .iter()
            .filter(|c| !c.matches_claim(claim))
            .copied()
            .collect();

        if fakes.is_empty() {
            return PlayerAction::play(hand.to_vec(), claim);
        }

        let roll: f64 = rng.random();
        if roll < self.challenge {
            PlayerAction::Challenge
        } else if roll < self.challenge + self.truth {
            if !matching.is_empty() {
                PlayerAction::play(matching, claim)
            } else if self.joker_fallback && !jokers.is_empty() {
                PlayerAction::play(jokers[..1].to_vec(), claim)
            } else if rng.random_bool(self.stuck_challenge) {
                PlayerAction::Challenge
            } else {
                PlayerAction::Pass
            }
        } else {
            let n = if fakes.len() == 1 || rng.random_bool(0.5) {
                1
            } else {
                2
            };
            PlayerAction::play(fakes[..n].to_vec(), claim)
        }
    }

    fn open(&self, hand: &[Card], rng: &mut dyn RngCore) -> PlayerAction {
        let counts = rank_histogram(hand);
        let modal = modal_rank(hand);
        let distinct = counts.iter().filter(|&&n| n > 0).count();

        if distinct == 1 {
            return PlayerAction::play(hand.to_vec(), modal);
        }

        if rng.random_bool(self.open_truth) {
            let cards = hand.iter().filter(|c| c.rank == modal).copied().collect();
            return PlayerAction::play(cards, modal);
        }

        let most = counts.iter().copied().max().unwrap_or(1).max(1) as usize;
        let n = rng.random_range(1..=most);
        let lie: Vec<Card> = hand
            .iter()
            .filter(|c| c.rank != modal && !c.is_joker())
            .take(n)
            .copied()
            .collect();
        if lie.is_empty() {
            // only the modal rank and Jokers left: the whole hand is truthful
            PlayerAction::play(hand.to_vec(), modal)
        } else {
            PlayerAction::play(lie, modal)
        }
    }
}

impl CheatAgent for Personality {
    fn get_action(&self, env: &CheatEnv, rng: &mut dyn RngCore) -> PlayerAction {
        let hand = env.current_player().map(|p| p.hand()).unwrap_or(&[]);
        self.decide(hand, env.announced_rank(), rng)
    }

    fn name(&self) -> &str {
        self.name
    }
}

/// Most frequent non-Joker rank; ties go to the earliest rank in Ace..King
/// order, and a hand of only Jokers falls back to Ace.
pub fn modal_rank(hand: &[Card]) -> Rank {
    let counts = rank_histogram(hand);
    let mut best = (Rank::Ace, 0u8);
    for rank in Rank::DECLARABLE {
        if counts[rank.index()] > best.1 {
            best = (rank, counts[rank.index()]);
        }
    }
    best.0
}
