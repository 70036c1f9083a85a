//! `link` and `invite`: share the current game.

use std::io::Write;

use super::open_game;
use crate::config::Config;
use crate::error::CliError;

pub fn handle_link_command(config: &Config, out: &mut dyn Write) -> Result<(), CliError> {
    let engine = open_game(config)?;
    writeln!(out, "{}", engine.share_url())?;
    Ok(())
}

pub fn handle_invite_command(config: &Config, out: &mut dyn Write) -> Result<(), CliError> {
    let engine = open_game(config)?;
    writeln!(out, "{}", engine.invitation())?;
    Ok(())
}
