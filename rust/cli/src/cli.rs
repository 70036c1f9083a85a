//! Command-line argument definitions.

use cardroom_engine::rng::ShuffleAlgorithm;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "cardroom",
    version,
    about = "Everyone gets a card, no server needed: rounds are shuffled from a shared link"
)]
pub struct CardroomCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start a new game with the given cards, e.g. "🍎🍋🍌🍇"
    New {
        cards: String,
        /// Room seed; a fresh one is generated when omitted
        #[arg(long)]
        seed: Option<String>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        round: Option<u32>,
        /// Your position in the circle (1-based)
        #[arg(long, default_value_t = 1)]
        player: u32,
    },
    /// Join the game described by a share link
    Join { link: String },
    /// Show the current game and your card
    Show,
    /// Go to the next round
    Next,
    /// Go back to the previous round
    Prev,
    /// Choose your position in the circle (0 clears it)
    Player { number: u32 },
    /// Print the share link for the current game
    Link,
    /// Print the invitation text for the current game
    Invite,
    /// Send a raw intent, e.g. '{"type":"nextRound"}'
    Dispatch { intent: String },
    /// Print the shuffle of CARDS for a seed and round without touching the game
    Shuffle {
        cards: String,
        #[arg(long)]
        seed: String,
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        round: u32,
        /// arc4 (web-compatible) or chacha20; defaults to the configured algorithm
        #[arg(long)]
        algorithm: Option<ShuffleAlgorithm>,
    },
    /// Print the resolved configuration and where each value came from
    Cfg,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::New { .. } => "new",
            Commands::Join { .. } => "join",
            Commands::Show => "show",
            Commands::Next => "next",
            Commands::Prev => "prev",
            Commands::Player { .. } => "player",
            Commands::Link => "link",
            Commands::Invite => "invite",
            Commands::Dispatch { .. } => "dispatch",
            Commands::Shuffle { .. } => "shuffle",
            Commands::Cfg => "cfg",
        }
    }
}
