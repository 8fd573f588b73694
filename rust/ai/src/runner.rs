//! Turn loop that drives a [`CheatEnv`] with one agent per seat.

use cheat_engine::engine::CheatEnv;
use cheat_engine::errors::GameError;
use cheat_engine::logger::ActionRecord;
use rand::RngCore;
use tracing::{debug, warn};

use crate::CheatAgent;

/// Default turn ceiling for a single game.
pub const DEFAULT_MAX_TURNS: u32 = 250;

/// How a game driven by [`play_game`] ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    /// Winning seat; `None` when the ceiling stopped the game first
    pub winner: Option<usize>,
    /// Seat names the env was reset with
    pub players: Vec<String>,
    pub turns: u32,
    pub truncated: bool,
    pub actions: Vec<ActionRecord>,
}

impl GameOutcome {
    pub fn winner_name(&self) -> Option<&str> {
        self.winner
            .and_then(|seat| self.players.get(seat))
            .map(String::as_str)
    }
}

/// Seat names for a table of agents. Names repeated at the table get their
/// seat index appended (`random#0`, `random#1`) so every seat is unique.
pub fn seat_names(agents: &[Box<dyn CheatAgent>]) -> Vec<String> {
    agents
        .iter()
        .enumerate()
        .map(|(seat, agent)| {
            let name = agent.name();
            if agents.iter().filter(|a| a.name() == name).count() > 1 {
                format!("{}#{}", name, seat)
            } else {
                name.to_string()
            }
        })
        .collect()
}

/// Resets `env` for `agents` and plays until someone wins or `max_turns`
/// steps have been applied. An agent choosing an illegal action aborts the
/// game with the engine's error.
pub fn play_game(
    env: &mut CheatEnv,
    agents: &[Box<dyn CheatAgent>],
    max_turns: u32,
    rng: &mut dyn RngCore,
) -> Result<GameOutcome, GameError> {
    let players = seat_names(agents);
    env.reset(&players)?;

    let mut actions = Vec::new();
    let mut turns = 0u32;
    while !env.is_over() && turns < max_turns {
        let seat = env.current_seat();
        let action = agents[seat].get_action(env, rng);
        let record = ActionRecord::new(turns, seat, &action);
        env.step(action)?;
        actions.push(record);
        turns += 1;
    }

    let truncated = !env.is_over();
    if truncated {
        warn!(max_turns, "game stopped at the turn ceiling without a winner");
    } else {
        debug!(turns, winner = ?env.winner_seat(), "game finished");
    }

    Ok(GameOutcome {
        winner: env.winner_seat(),
        players,
        turns,
        truncated,
        actions,
    })
}
