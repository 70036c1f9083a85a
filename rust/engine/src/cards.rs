use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_segmentation::UnicodeSegmentation;

use crate::errors::GameError;

/// A single user-perceived symbol from the card list.
///
/// Holds exactly one extended grapheme cluster, so multi-codepoint emoji
/// such as flags, skin-tone modifiers and ZWJ sequences stay intact.
/// Serialized as a plain string.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Card(String);

impl Card {
    pub fn new(symbol: impl Into<String>) -> Self {
        Card(symbol.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Card {
    fn from(s: &str) -> Self {
        Card::new(s)
    }
}

/// Splits text into cards on grapheme cluster boundaries.
///
/// ```
/// use cardroom_engine::cards::split_cards;
///
/// let cards = split_cards("🍎🇫🇷👍🏽");
/// assert_eq!(cards.len(), 3);
/// assert_eq!(cards[1].as_str(), "🇫🇷");
/// ```
pub fn split_cards(text: &str) -> Vec<Card> {
    text.graphemes(true).map(Card::new).collect()
}

/// Parses user input for a new game: whitespace is dropped, the rest is
/// split into cards. Empty input is rejected.
pub fn parse_card_input(text: &str) -> Result<Vec<Card>, GameError> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(GameError::NoCards);
    }
    Ok(split_cards(&compact))
}

/// Concatenates cards with no separator.
pub fn join_cards(cards: &[Card]) -> String {
    cards.iter().map(Card::as_str).collect()
}
