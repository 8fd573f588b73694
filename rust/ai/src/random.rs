use cheat_engine::cards::{Card, Rank};
use cheat_engine::engine::CheatEnv;
use cheat_engine::player::{ActionType, PlayerAction};
use cheat_engine::rules::LegalActions;
use rand::seq::IndexedRandom;
use rand::RngCore;

use crate::CheatAgent;

/// Picks uniformly among the legal action kinds, then a random size, random
/// cards from the hand and (when opening) a random rank.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAgent;

impl RandomAgent {
    pub fn choose(
        &self,
        legal: &LegalActions,
        hand: &[Card],
        rng: &mut dyn RngCore,
    ) -> PlayerAction {
        let Some(&kind) = legal.types.choose(rng) else {
            // game over; the engine rejects anything
            return PlayerAction::Pass;
        };
        match kind {
            ActionType::Challenge => PlayerAction::Challenge,
            ActionType::Pass => PlayerAction::Pass,
            ActionType::Play => {
                let size = legal.quantities.choose(rng).map_or(1, |q| q + 1);
                let cards: Vec<Card> = hand.choose_multiple(rng, size).copied().collect();
                let claim = legal
                    .current_rank
                    .or_else(|| legal.ranks.choose(rng).copied())
                    .unwrap_or(Rank::Ace);
                PlayerAction::play(cards, claim)
            }
        }
    }
}

impl CheatAgent for RandomAgent {
    fn get_action(&self, env: &CheatEnv, rng: &mut dyn RngCore) -> PlayerAction {
        let hand = env.current_player().map(|p| p.hand()).unwrap_or(&[]);
        self.choose(&env.legal_actions(), hand, rng)
    }

    fn name(&self) -> &str {
        "random"
    }
}
