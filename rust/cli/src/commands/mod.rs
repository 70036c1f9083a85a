//! Command handler modules for the cardroom CLI.
//!
//! Each handler has the shape
//! `pub fn handle_COMMAND_command(...) -> Result<(), CliError>` and writes to
//! the `&mut dyn Write` streams it is given. Handlers that touch the game open
//! an [`Engine`] over the configured state directory; each invocation is one
//! dispatch against the persisted state.

mod cfg;
mod dispatch;
mod game;
mod link;
mod shuffle;

pub use cfg::handle_cfg_command;
pub use dispatch::handle_dispatch_command;
pub use game::{
    handle_join_command, handle_new_command, handle_next_command, handle_player_command,
    handle_prev_command, handle_show_command,
};
pub use link::{handle_invite_command, handle_link_command};
pub use shuffle::handle_shuffle_command;

use cardroom_engine::engine::Engine;
use cardroom_engine::persistence::FileStore;

use crate::config::Config;
use crate::error::CliError;
use crate::share::CommandShare;

pub(crate) fn open_engine(config: &Config) -> Result<Engine<FileStore>, CliError> {
    let base = config.base()?;
    let engine = Engine::open(FileStore::new(&config.state_dir), config.rules(), base);
    Ok(match CommandShare::from_command(&config.share_command) {
        Some(share) => engine.with_share_target(Box::new(share)),
        None => engine,
    })
}

/// Engine whose state holds a game, for commands that act on one.
pub(crate) fn open_game(config: &Config) -> Result<Engine<FileStore>, CliError> {
    let engine = open_engine(config)?;
    if !engine.state().has_game() {
        return Err(CliError::NoGame);
    }
    Ok(engine)
}
