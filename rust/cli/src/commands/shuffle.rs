//! `shuffle`: print a round's permutation without reading or writing state.
//!
//! Useful for checking that two devices agree, or that this build matches the
//! web app for a given room.

use std::io::Write;

use cardroom_engine::cards::{join_cards, parse_card_input};
use cardroom_engine::rng::ShuffleAlgorithm;
use cardroom_engine::shuffle::shuffle_with;

use crate::error::CliError;

pub fn handle_shuffle_command(
    cards: &str,
    seed: &str,
    round: u32,
    algorithm: ShuffleAlgorithm,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cards = parse_card_input(cards)?;
    let shuffled = shuffle_with(&cards, seed, round, algorithm);
    writeln!(out, "{}", join_cards(&shuffled))?;
    Ok(())
}
