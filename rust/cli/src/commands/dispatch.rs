//! `dispatch`: send a serialized `{type, payload}` intent to the reducer.

use std::io::Write;

use super::open_engine;
use crate::config::Config;
use crate::error::CliError;
use crate::formatters::format_state;

pub fn handle_dispatch_command(
    intent: &str,
    config: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut engine = open_engine(config)?;
    let state = engine.dispatch_json(intent)?;
    write!(out, "{}", format_state(state))?;
    Ok(())
}
