//! Simulation command handler.
//!
//! Runs N games between the configured seats, optionally appending one JSONL
//! [`GameRecord`] per game, and prints how often each seat won.
//!
//! ```no_run
//! use cheat_cli::run;
//!
//! let code = run(
//!     ["cheat", "sim", "--games", "100", "--seed", "42", "--output", "data/games.jsonl"],
//!     &mut std::io::stdout(),
//!     &mut std::io::stderr(),
//! );
//! assert_eq!(code, 0);
//! ```

use crate::commands::{agent_rng, build_agents, resolve_config};
use crate::error::CliError;
use crate::io_utils::ensure_parent_dir;
use crate::ui;
use cheat_ai::runner::{play_game, seat_names};
use cheat_engine::engine::CheatEnv;
use cheat_engine::logger::{GameLogger, GameRecord};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Plays `games` games; game `i` uses seed `seed + i` for both the deal and
/// the agents. Truncated games count for nobody.
pub fn handle_sim_command(
    games: u32,
    output: Option<String>,
    seed: Option<u64>,
    max_turns: Option<u32>,
    seats: Vec<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    let cfg = resolve_config(seats, seed, max_turns)?;
    let agents = build_agents(&cfg.seats)?;
    let names = seat_names(&agents);
    let base_seed = cfg.seed.unwrap_or_else(rand::random);

    let mut logger = match output.as_deref() {
        Some(p) => {
            let path = Path::new(p);
            ensure_parent_dir(path).map_err(|e| CliError::Io(std::io::Error::other(e)))?;
            Some(GameLogger::create(path)?)
        }
        None => None,
    };

    let mut wins = vec![0u32; names.len()];
    let mut truncated = 0u32;
    let mut total_turns = 0u64;

    for i in 0..games {
        let game_seed = base_seed.wrapping_add(i as u64);
        let mut env = CheatEnv::new(Some(game_seed)).with_agent_seat(cfg.agent_seat);
        let mut rng = agent_rng(game_seed);
        let outcome = play_game(&mut env, &agents, cfg.max_turns, &mut rng)?;

        match outcome.winner {
            Some(seat) => wins[seat] += 1,
            None => truncated += 1,
        }
        total_turns += outcome.turns as u64;

        if let Some(logger) = logger.as_mut() {
            let record = GameRecord {
                game_id: logger.next_id(),
                seed: Some(game_seed),
                players: outcome.players.clone(),
                winner: outcome.winner_name().map(String::from),
                turns: outcome.turns,
                truncated: outcome.truncated,
                actions: outcome.actions,
                ts: None,
                meta: None,
            };
            logger.write(&record)?;
        }
    }

    info!(games, truncated, base_seed, "simulation finished");
    if truncated > 0 {
        ui::display_warning(
            err,
            &format!(
                "{} of {} games hit the {}-turn limit without a winner",
                truncated, games, cfg.max_turns
            ),
        )?;
    }

    writeln!(out, "Simulated {} games (base seed {})", games, base_seed)?;
    for (name, count) in names.iter().zip(&wins) {
        writeln!(
            out,
            "  {}: {} wins ({:.1}%)",
            name,
            count,
            100.0 * *count as f64 / games as f64
        )?;
    }
    writeln!(out, "  truncated: {}", truncated)?;
    writeln!(
        out,
        "  average turns: {:.1}",
        total_turns as f64 / games as f64
    )?;
    if let Some(p) = output {
        writeln!(out, "Records written to {}", p)?;
    }
    Ok(())
}
