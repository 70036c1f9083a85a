//! Plain-text rendering of game state for the terminal.

use cardroom_engine::cards::join_cards;
use cardroom_engine::game::GameState;

pub const SEAT_HINT: &str = "Pick your seat with: cardroom player <N>";

/// Multi-line summary: room, round, seat and the player's card.
///
/// ```
/// use cardroom_engine::game::GameState;
/// use cardroom_cli::formatters::format_state;
///
/// assert_eq!(format_state(&GameState::default()), "No game in progress.\n");
/// ```
pub fn format_state(state: &GameState) -> String {
    if !state.has_game() {
        return "No game in progress.\n".to_string();
    }
    let mut text = format!(
        "Room:  {}\nCards: {}\nRound: {}\n",
        state.seed(),
        join_cards(state.ordered_cards()),
        state.round()
    );
    match state.player() {
        None => {
            text.push_str(SEAT_HINT);
            text.push('\n');
        }
        Some(player) => {
            text.push_str(&format!("Player: {}\n", player));
            text.push_str(&format!("Card:  {}\n", format_card(state)));
        }
    }
    text
}

/// The player's card, or a note when their seat is past the end of the deck.
pub fn format_card(state: &GameState) -> String {
    match state.card() {
        Some(card) => card.to_string(),
        None => format!("(no card: only {} in play)", state.ordered_cards().len()),
    }
}
