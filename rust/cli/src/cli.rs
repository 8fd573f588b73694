//! Command-line argument definitions for the `cheat` binary.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "cheat",
    version,
    about = "Cheat card game: watch bots play, simulate tournaments, inspect deals"
)]
pub struct CheatCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play one game turn by turn with verbose output
    Play {
        /// Agent for the next seat (repeat per seat; overrides configured seats)
        #[arg(long = "seat", value_name = "NAME")]
        seats: Vec<String>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        max_turns: Option<u32>,
    },
    /// Simulate many games and tally wins per seat
    Sim {
        #[arg(long)]
        games: u32,
        /// Append one JSONL game record per game to this file
        #[arg(long)]
        output: Option<String>,
        /// Base seed; game i uses seed + i
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        max_turns: Option<u32>,
        #[arg(long = "seat", value_name = "NAME")]
        seats: Vec<String>,
    },
    /// Deal one game and print every hand
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 3)]
        players: usize,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Play { .. } => "play",
            Commands::Sim { .. } => "sim",
            Commands::Deal { .. } => "deal",
            Commands::Cfg => "cfg",
        }
    }
}
