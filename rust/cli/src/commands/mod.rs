//! Command handler modules for the Cheat CLI.
//!
//! Each command lives in its own module and exposes
//! `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`, with output
//! streams passed in as `&mut dyn Write`.

pub mod cfg;
pub mod deal;
pub mod play;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;

use crate::config::{self, Config};
use crate::error::CliError;
use cheat_ai::{CheatAgent, create_ai};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Mixed into the game seed so agent decisions do not replay the deck's stream.
const AGENT_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

/// Resolved configuration with command-line overrides applied.
pub(crate) fn resolve_config(
    seats: Vec<String>,
    seed: Option<u64>,
    max_turns: Option<u32>,
) -> Result<Config, CliError> {
    let resolved = config::load_with_sources()?;
    Ok(resolved.config.with_overrides(seats, seed, max_turns)?)
}

pub(crate) fn build_agents(names: &[String]) -> Result<Vec<Box<dyn CheatAgent>>, CliError> {
    names
        .iter()
        .map(|n| {
            create_ai(n).ok_or_else(|| CliError::InvalidInput(format!("unknown agent: {}", n)))
        })
        .collect()
}

pub(crate) fn agent_rng(game_seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(game_seed ^ AGENT_STREAM)
}
