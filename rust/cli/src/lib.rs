//! # Cardroom CLI Library
//!
//! Command-line front end for the cardroom shuffle engine. One device runs
//! `cardroom new`, shares the printed link, and everyone else runs
//! `cardroom join <LINK>`; from then on each device derives the same
//! per-round shuffle locally and shows its own card.
//!
//! ## Main Entry Point
//!
//! [`run`] parses arguments, resolves configuration, installs logging and
//! executes the subcommand against the game state saved in `state_dir`.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["cardroom", "new", "🍎🍋🍌🍇", "--player", "2"];
//! let code = cardroom_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `new`: Start a game and print its invitation
//! - `join`: Join the game behind a share link
//! - `show`: Show the round and your card
//! - `next` / `prev`: Move between rounds
//! - `player`: Choose your position in the circle
//! - `link` / `invite`: Share the current game
//! - `dispatch`: Send a raw `{type, payload}` intent
//! - `shuffle`: Print a round's permutation without touching state
//! - `cfg`: Display the resolved configuration

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod share;
pub mod ui;

use clap::Parser;
use std::io::Write;

use cli::{CardroomCli, Commands};
use commands::{
    handle_cfg_command, handle_dispatch_command, handle_invite_command, handle_join_command,
    handle_link_command, handle_new_command, handle_next_command, handle_player_command,
    handle_prev_command, handle_show_command, handle_shuffle_command,
};
use config::ConfigResolved;

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: [`exit_code::SUCCESS`] or [`exit_code::ERROR`]
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["cardroom", "shuffle", "🍎🍋🍌", "--seed", "SEED"];
/// let mut out = Vec::new();
/// let code = cardroom_cli::run(args, &mut out, &mut io::stderr());
/// assert_eq!(code, 0);
/// assert_eq!(String::from_utf8(out).unwrap(), "🍋🍌🍎\n");
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match CardroomCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = write!(err, "{}", e);
                    let _ = writeln!(err, "For full help, run: cardroom --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            let _ = ui::write_error(err, &format!("Invalid configuration: {}", e));
            return exit_code::ERROR;
        }
    };

    logging::init_logging(&resolved.config.log_level);
    tracing::debug!(command = cli.cmd.name(), "running command");

    match execute(cli.cmd, &resolved, out, err) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn execute(
    cmd: Commands,
    resolved: &ConfigResolved,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let config = &resolved.config;
    match cmd {
        Commands::New {
            cards,
            seed,
            round,
            player,
        } => handle_new_command(&cards, seed, round, player, config, out),
        Commands::Join { link } => handle_join_command(&link, config, out, err),
        Commands::Show => handle_show_command(config, out),
        Commands::Next => handle_next_command(config, out),
        Commands::Prev => handle_prev_command(config, out),
        Commands::Player { number } => handle_player_command(number, config, out),
        Commands::Link => handle_link_command(config, out),
        Commands::Invite => handle_invite_command(config, out),
        Commands::Dispatch { intent } => handle_dispatch_command(&intent, config, out),
        Commands::Shuffle {
            cards,
            seed,
            round,
            algorithm,
        } => handle_shuffle_command(
            &cards,
            &seed,
            round,
            algorithm.unwrap_or(config.algorithm),
            out,
        ),
        Commands::Cfg => handle_cfg_command(resolved, out),
    }
}
