//! Configuration command handler.
//!
//! Prints the resolved configuration as JSON, each value with its source:
//!
//! ```json
//! {
//!   "max_turns": { "value": 250, "source": "default" },
//!   "seed": { "value": 42, "source": "env" },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write, _err: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()
        .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?;

    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "max_turns": {
            "value": config.max_turns,
            "source": sources.max_turns,
        },
        "agent_seat": {
            "value": config.agent_seat,
            "source": sources.agent_seat,
        },
        "seats": {
            "value": config.seats,
            "source": sources.seats,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
