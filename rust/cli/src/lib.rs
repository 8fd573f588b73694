//! # Cheat CLI Library
//!
//! Command-line front end for the Cheat engine and its bots.
//!
//! ## Main Entry Point
//!
//! [`run`] parses arguments, dispatches to a subcommand and returns the exit
//! code, writing to the given output and error streams.
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = cheat_cli::run(["cheat", "deal", "--seed", "42"], &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("P0 (18):"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play one game with per-turn output
//! - `sim`: Simulate many games, optionally writing JSONL game records
//! - `deal`: Deal a single game for inspection
//! - `cfg`: Display the resolved configuration

use clap::Parser;
use std::io::Write;
use tracing::debug;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod io_utils;
pub mod logging;
pub mod ui;

use cli::{CheatCli, Commands};
use commands::{handle_cfg_command, handle_deal_command, handle_play_command, handle_sim_command};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "deal", "cfg"];

/// Parses `args` and runs the selected command.
///
/// Returns `0` on success and `2` on any error; help and version output go
/// to `out` with exit code `0`.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match CheatCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_usage(e, out, err),
    };

    debug!(command = cli.cmd.name(), "dispatching");
    let result = match cli.cmd {
        Commands::Play {
            seats,
            seed,
            max_turns,
        } => handle_play_command(seats, seed, max_turns, out, err),
        Commands::Sim {
            games,
            output,
            seed,
            max_turns,
            seats,
        } => handle_sim_command(games, output, seed, max_turns, seats, out, err),
        Commands::Deal { seed, players } => handle_deal_command(seed, players, out),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn report_usage(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }

    let _ = writeln!(err, "{}", e);
    let _ = writeln!(err, "Cheat CLI\nUsage: cheat <command> [options]\n\nCommands:");
    for c in COMMANDS {
        let _ = writeln!(err, "  {}", c);
    }
    let _ = writeln!(err, "\nFor full help, run: cheat --help");
    exit_code::ERROR
}
