//! # cheat-ai: Decision-Makers for Cheat
//!
//! Provides rule-based opponents and a turn-loop runner for the Cheat engine.
//! Every agent decides from the public state the engine exposes plus its own
//! hand; none of them touch hands or the pile directly.
//!
//! ## Core Components
//!
//! - [`CheatAgent`] - Trait defining the interface for decision-making
//! - [`personality`] - One parameterized strategy covering the named bots
//! - [`random`] - Uniformly random legal actions
//! - [`runner`] - Plays a whole game with a caller-side turn ceiling
//! - [`create_ai`] - Factory for agents by name
//!
//! ## Quick Start
//!
//! ```rust
//! use cheat_ai::create_ai;
//! use cheat_ai::runner::play_game;
//! use cheat_engine::engine::CheatEnv;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let agents = vec![
//!     create_ai("80-20").expect("known agent"),
//!     create_ai("100-0").expect("known agent"),
//! ];
//! let mut env = CheatEnv::new(Some(42));
//! let mut rng = StdRng::seed_from_u64(42);
//! let outcome = play_game(&mut env, &agents, 250, &mut rng).expect("game runs");
//! assert!(outcome.turns <= 250);
//! ```
//!
//! ## Agent Names
//!
//! - `"80-20"` - mostly honest, rarely lies
//! - `"one-third"` - challenges, plays honestly or lies with equal odds
//! - `"100-0"` - never lies, challenges whenever it cannot follow
//! - `"60-40"` - balanced
//! - `"random"` - uniformly random legal actions

use cheat_engine::engine::CheatEnv;
use cheat_engine::player::PlayerAction;
use rand::RngCore;

pub mod personality;
pub mod random;
pub mod runner;

pub use personality::Personality;
pub use random::RandomAgent;

/// Every name accepted by [`create_ai`].
pub const AGENT_NAMES: [&str; 5] = ["80-20", "one-third", "100-0", "60-40", "random"];

/// Trait defining the interface for Cheat decision-makers.
///
/// # Example Implementation
///
/// ```rust
/// use cheat_ai::CheatAgent;
/// use cheat_engine::engine::CheatEnv;
/// use cheat_engine::player::PlayerAction;
/// use rand::RngCore;
///
/// struct Doubter;
///
/// impl CheatAgent for Doubter {
///     fn get_action(&self, env: &CheatEnv, _rng: &mut dyn RngCore) -> PlayerAction {
///         let hand = env.current_player().map(|p| p.hand()).unwrap_or(&[]);
///         match env.announced_rank() {
///             Some(_) => PlayerAction::Challenge,
///             None => PlayerAction::play(hand[..1].to_vec(), cheat_engine::cards::Rank::Ace),
///         }
///     }
///
///     fn name(&self) -> &str {
///         "doubter"
///     }
/// }
/// ```
pub trait CheatAgent: Send + Sync {
    /// Decide the action for the seat currently on turn.
    fn get_action(&self, env: &CheatEnv, rng: &mut dyn RngCore) -> PlayerAction;

    /// Return the name/identifier of this agent.
    fn name(&self) -> &str;
}

/// Factory function to create agents by name; `None` for unknown names.
///
/// ```rust
/// use cheat_ai::create_ai;
///
/// let ai = create_ai("one-third").unwrap();
/// assert_eq!(ai.name(), "one-third");
/// assert!(create_ai("grandmaster").is_none());
/// ```
pub fn create_ai(name: &str) -> Option<Box<dyn CheatAgent>> {
    match name {
        "random" => Some(Box::new(RandomAgent)),
        _ => Personality::by_name(name).map(|p| Box::new(p) as Box<dyn CheatAgent>),
    }
}
