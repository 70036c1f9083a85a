//! `cfg`: the resolved configuration with the source of each value.
//!
//! ```json
//! {
//!   "base_url": { "value": "http://localhost:3000/", "source": "default" },
//!   "algorithm": { "value": "arc4", "source": "env" },
//!   ...
//! }
//! ```

use crate::config::ConfigResolved;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(resolved: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "base_url": {
            "value": config.base_url,
            "source": sources.base_url,
        },
        "state_dir": {
            "value": config.state_dir,
            "source": sources.state_dir,
        },
        "algorithm": {
            "value": config.algorithm,
            "source": sources.algorithm,
        },
        "seed_length": {
            "value": config.seed_length,
            "source": sources.seed_length,
        },
        "share_command": {
            "value": config.share_command,
            "source": sources.share_command,
        },
        "log_level": {
            "value": config.log_level,
            "source": sources.log_level,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
