//! Configuration command handler.
//!
//! Prints the resolved configuration with the layer each value came from
//! (default, file or environment).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "starting_credits": {
//!     "value": 100,
//!     "source": "default"
//!   },
//!   "bet": {
//!     "value": 1,
//!     "source": "env"
//!   },
//!   ...
//! }
//! ```

use crate::config::ConfigResolved;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Io` if writing to the output stream fails.
pub fn handle_cfg_command(resolved: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "starting_credits": {
            "value": config.starting_credits,
            "source": sources.starting_credits,
        },
        "bet": {
            "value": config.bet,
            "source": sources.bet,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "policy": {
            "value": config.policy,
            "source": sources.policy,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
