use serde::{Deserialize, Serialize};

use crate::cards::Rank;
use crate::player::{ActionType, PlayerAction};

/// Records a single action taken during a game.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Zero-based turn number
    pub turn: u32,
    /// Seat that acted
    pub seat: usize,
    /// Kind of action taken
    pub action: ActionType,
    /// Cards put on the pile (0 unless the action was a play)
    #[serde(default)]
    pub count: usize,
    /// Announced rank of a play
    #[serde(default)]
    pub claim: Option<Rank>,
}

impl ActionRecord {
    pub fn new(turn: u32, seat: usize, action: &PlayerAction) -> Self {
        let claim = match action {
            PlayerAction::Play { claim, .. } => Some(*claim),
            _ => None,
        };
        Self {
            turn,
            seat,
            action: action.action_type(),
            count: action.card_count(),
            claim,
        }
    }
}

/// Complete record of one game, serialized as a JSONL line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Unique identifier for this game (format: YYYYMMDD-NNNNNN)
    pub game_id: String,
    /// Seed the deck was shuffled with
    pub seed: Option<u64>,
    /// Seat names in turn order
    pub players: Vec<String>,
    /// Chronological list of all actions
    pub actions: Vec<ActionRecord>,
    /// Name of the winner, if the game finished
    pub winner: Option<String>,
    /// Number of steps applied
    pub turns: u32,
    /// Whether the caller's turn ceiling stopped the game
    #[serde(default)]
    pub truncated: bool,
    /// Timestamp when the game was recorded (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

pub fn format_game_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, read_to_string, File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

pub struct GameLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl GameLogger {
    /// Opens `path` for appending, creating parent directories as needed.
    /// Numbering continues after the records already in the file, so ids stay
    /// unique across runs writing to the same file.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let seq = match read_to_string(path) {
            Ok(existing) => existing.lines().filter(|l| !l.trim().is_empty()).count() as u32,
            Err(e) if e.kind() == ErrorKind::NotFound => 0,
            Err(e) => return Err(e),
        };
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_game_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &GameRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
