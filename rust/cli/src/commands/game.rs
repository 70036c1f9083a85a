//! Commands that move the persisted game: `new`, `join`, `show`, `next`,
//! `prev` and `player`.

use std::io::Write;

use cardroom_engine::action::Action;
use cardroom_engine::cards::parse_card_input;
use cardroom_engine::game::GameSetup;
use cardroom_engine::link::ShareLink;

use super::{open_engine, open_game};
use crate::config::Config;
use crate::error::CliError;
use crate::formatters::format_state;
use crate::ui;

pub fn handle_new_command(
    cards: &str,
    seed: Option<String>,
    round: Option<u32>,
    player: u32,
    config: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cards = parse_card_input(cards)?;
    let mut setup = GameSetup::new().with_cards(cards).with_player(player);
    if let Some(seed) = seed {
        setup = setup.with_seed(seed);
    }
    if let Some(round) = round {
        setup = setup.with_round(round);
    }

    let mut engine = open_engine(config)?;
    let state = engine.dispatch(Action::BeginGame(setup));
    write!(out, "{}", format_state(state))?;
    writeln!(out)?;
    writeln!(out, "{}", engine.invitation())?;
    Ok(())
}

pub fn handle_join_command(
    link: &str,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    // validate first so a bad link is reported instead of silently ignored
    ShareLink::parse(link)?;
    let mut engine = open_engine(config)?;
    if !engine.accept_link(link) {
        ui::display_warning(err, "already playing this game; keeping your seat and round")?;
    }
    write!(out, "{}", format_state(engine.state()))?;
    Ok(())
}

pub fn handle_show_command(config: &Config, out: &mut dyn Write) -> Result<(), CliError> {
    let engine = open_engine(config)?;
    write!(out, "{}", format_state(engine.state()))?;
    Ok(())
}

pub fn handle_next_command(config: &Config, out: &mut dyn Write) -> Result<(), CliError> {
    let mut engine = open_game(config)?;
    let state = engine.dispatch(Action::NextRound);
    write!(out, "{}", format_state(state))?;
    ui::write_round_reminder(out)?;
    Ok(())
}

pub fn handle_prev_command(config: &Config, out: &mut dyn Write) -> Result<(), CliError> {
    let mut engine = open_game(config)?;
    let state = engine.dispatch(Action::PrevRound);
    write!(out, "{}", format_state(state))?;
    Ok(())
}

pub fn handle_player_command(
    number: u32,
    config: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut engine = open_game(config)?;
    let state = engine.dispatch(Action::SetPlayer(Some(number)));
    write!(out, "{}", format_state(state))?;
    Ok(())
}
