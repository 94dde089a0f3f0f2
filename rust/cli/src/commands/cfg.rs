//! Configuration command handler.
//!
//! Displays the resolved configuration with the source of every value
//! (default, config file or environment).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "rounds": {
//!     "value": 1,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// `resolved` is the configuration [`crate::run`] already loaded for every
/// subcommand.
///
/// # Errors
///
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(
    resolved: &config::ConfigResolved,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "rounds": {
            "value": config.rounds,
            "source": sources.rounds,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "ascii": {
            "value": config.ascii,
            "source": sources.ascii,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
