//! Deal command handler: deals one game and prints every hand.

use crate::error::CliError;
use crate::ui;
use cheat_engine::engine::CheatEnv;
use std::io::Write;

/// Deals a fresh game for `players` seats (`P0`, `P1`, ...) and prints each
/// hand in dealt order followed by its rank counts.
pub fn handle_deal_command(
    seed: Option<u64>,
    players: usize,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if players < 2 {
        return Err(CliError::InvalidInput(format!(
            "players must be >= 2, got {}",
            players
        )));
    }
    let base_seed = seed.unwrap_or_else(rand::random);
    let names: Vec<String> = (0..players).map(|i| format!("P{}", i)).collect();
    let mut env = CheatEnv::new(Some(base_seed));
    env.reset(&names)?;

    writeln!(out, "Seed: {}", base_seed)?;
    for p in env.players() {
        writeln!(
            out,
            "{} ({}): {}",
            p.name(),
            p.hand_size(),
            ui::format_cards(p.hand())
        )?;
        writeln!(out, "    {}", ui::format_frequencies(p.hand()))?;
    }
    Ok(())
}
