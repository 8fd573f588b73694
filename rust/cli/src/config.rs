//! Layered configuration: defaults, then the TOML file named by `CHEAT_CONFIG`,
//! then `CHEAT_*` environment variables. Command-line flags are applied on top
//! by each command.

use cheat_ai::AGENT_NAMES;
use cheat_ai::runner::DEFAULT_MAX_TURNS;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub max_turns: u32,
    /// Seat rewarded by the engine; marked in verbose output
    pub agent_seat: usize,
    /// Agent name per seat, in turn order
    pub seats: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub max_turns: ValueSource,
    pub agent_seat: ValueSource,
    pub seats: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            max_turns: ValueSource::Default,
            agent_seat: ValueSource::Default,
            seats: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            max_turns: DEFAULT_MAX_TURNS,
            agent_seat: 0,
            seats: vec!["random".into(), "100-0".into(), "80-20".into()],
        }
    }
}

impl Config {
    /// Replaces values given on the command line and re-validates.
    pub fn with_overrides(
        mut self,
        seats: Vec<String>,
        seed: Option<u64>,
        max_turns: Option<u32>,
    ) -> Result<Config, ConfigError> {
        if !seats.is_empty() {
            self.seats = seats;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(t) = max_turns {
            self.max_turns = t;
        }
        validate(&self)?;
        Ok(self)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("CHEAT_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.max_turns {
            cfg.max_turns = v;
            sources.max_turns = ValueSource::File;
        }
        if let Some(v) = f.agent_seat {
            cfg.agent_seat = v;
            sources.agent_seat = ValueSource::File;
        }
        if let Some(v) = f.seats {
            cfg.seats = v;
            sources.seats = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("CHEAT_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(turns) = std::env::var("CHEAT_MAX_TURNS")
        && !turns.is_empty()
    {
        cfg.max_turns = turns
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid max_turns: {}", turns)))?;
        sources.max_turns = ValueSource::Env;
    }
    if let Ok(seat) = std::env::var("CHEAT_AGENT_SEAT")
        && !seat.is_empty()
    {
        cfg.agent_seat = seat
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid agent_seat: {}", seat)))?;
        sources.agent_seat = ValueSource::Env;
    }
    if let Ok(seats) = std::env::var("CHEAT_SEATS")
        && !seats.is_empty()
    {
        cfg.seats = parse_seats(&seats);
        sources.seats = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    max_turns: Option<u32>,
    #[serde(default)]
    agent_seat: Option<usize>,
    #[serde(default)]
    seats: Option<Vec<String>>,
}

fn parse_seats(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.max_turns == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: max_turns must be >=1".into(),
        ));
    }
    if cfg.seats.len() < 2 {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: at least 2 seats required, got {}",
            cfg.seats.len()
        )));
    }
    if let Some(unknown) = cfg.seats.iter().find(|s| !AGENT_NAMES.contains(&s.as_str())) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown agent '{}' (expected one of {})",
            unknown,
            AGENT_NAMES.join(", ")
        )));
    }
    if cfg.agent_seat >= cfg.seats.len() {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: agent_seat {} out of range for {} seats",
            cfg.agent_seat,
            cfg.seats.len()
        )));
    }
    Ok(())
}

/// Environment variables read by [`load_with_sources`].
pub const ENV_KEYS: [&str; 5] = [
    "CHEAT_CONFIG",
    "CHEAT_SEED",
    "CHEAT_MAX_TURNS",
    "CHEAT_AGENT_SEAT",
    "CHEAT_SEATS",
];

/// Removes every `CHEAT_*` variable so tests see only defaults.
#[cfg(test)]
pub(crate) fn clear_env() {
    for key in ENV_KEYS {
        unsafe {
            std::env::remove_var(key);
        }
    }
}
