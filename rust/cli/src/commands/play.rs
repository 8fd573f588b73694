//! Play command handler: one game between bots, narrated turn by turn.

use crate::commands::{agent_rng, build_agents, resolve_config};
use crate::error::CliError;
use crate::ui;
use cheat_ai::runner::seat_names;
use cheat_engine::engine::{CheatEnv, GameEvent};
use std::io::Write;

/// Plays a single game with the configured seats (or `--seat` overrides),
/// printing for every turn the seat on turn, all hand sizes, the acting
/// seat's rank counts, the announced rank, the pile size and the chosen
/// action, followed by what the action caused.
pub fn handle_play_command(
    seats: Vec<String>,
    seed: Option<u64>,
    max_turns: Option<u32>,
    out: &mut dyn Write,
    _err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = resolve_config(seats, seed, max_turns)?;
    let agents = build_agents(&cfg.seats)?;
    let names = seat_names(&agents);
    let game_seed = cfg.seed.unwrap_or_else(rand::random);

    let mut env = CheatEnv::new(Some(game_seed)).with_agent_seat(cfg.agent_seat);
    let mut rng = agent_rng(game_seed);
    env.reset(&names)?;

    writeln!(out, "Seed: {}", game_seed)?;
    for (seat, name) in names.iter().enumerate() {
        let marker = if seat == cfg.agent_seat { " (agent)" } else { "" };
        writeln!(out, "Seat {}: {}{}", seat, name, marker)?;
    }

    let mut turn = 0u32;
    while !env.is_over() && turn < cfg.max_turns {
        let seat = env.current_seat();
        let sizes: Vec<String> = env
            .players()
            .iter()
            .map(|p| format!("{}={}", p.name(), p.hand_size()))
            .collect();
        let hand = env.players()[seat].hand();
        let announced = env
            .announced_rank()
            .map_or_else(|| "none (opening)".to_string(), |r| r.to_string());

        writeln!(out, "\nTurn {}: {}", turn + 1, names[seat])?;
        writeln!(out, "  hand sizes: {}", sizes.join(" "))?;
        writeln!(out, "  holding: {}", ui::format_frequencies(hand))?;
        writeln!(out, "  announced: {}", announced)?;
        writeln!(out, "  pile: {}", env.pile().len())?;

        let action = agents[seat].get_action(&env, &mut rng);
        writeln!(out, "  action: {}", ui::describe_action(&action))?;
        let result = env.step(action)?;
        for event in &result.info.events {
            if let Some(line) = narrate(event, &names) {
                writeln!(out, "  {}", line)?;
            }
        }
        turn += 1;
    }

    writeln!(out)?;
    match env.winner() {
        Some(p) => writeln!(out, "Winner: {} after {} turns", p.name(), turn)?,
        None => writeln!(
            out,
            "Turn limit of {} reached without a winner",
            cfg.max_turns
        )?,
    }
    Ok(())
}

fn narrate(event: &GameEvent, names: &[String]) -> Option<String> {
    let name = |seat: &usize| seat_name(names, *seat);
    match event {
        GameEvent::Played { .. } | GameEvent::Passed { .. } => None,
        GameEvent::RoundClosed { starter, pile_size } => Some(format!(
            "everyone passed; {} opens the next round ({} card(s) stay on the pile)",
            name(starter),
            pile_size
        )),
        GameEvent::ChallengeResolved {
            challenged,
            caught,
            receiver,
            cards,
            ..
        } => {
            let verdict = if *caught { "was lying" } else { "told the truth" };
            Some(format!(
                "{} {}; {} takes {} card(s)",
                name(challenged),
                verdict,
                name(receiver),
                cards
            ))
        }
        GameEvent::WinningPlayVoided { seat, cards } => Some(format!(
            "{} emptied their hand with a lie and takes back {} card(s)",
            name(seat),
            cards
        )),
        GameEvent::Won { seat } => Some(format!("{} empties their hand truthfully", name(seat))),
    }
}

fn seat_name(names: &[String], seat: usize) -> &str {
    names.get(seat).map_or("?", String::as_str)
}
