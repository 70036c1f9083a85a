use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::rng::ShuffleAlgorithm;
use crate::shuffle::shuffle_with;

/// Seed used before any game has begun.
pub const DEFAULT_SEED: &str = "SEED";

/// Snapshot of one device's view of a game.
///
/// States are never edited in place by callers; every transition produces a
/// new value (see [`crate::engine::Rules::transition`]). `shuffled_cards` and
/// `card` are derived and always agree with `(ordered_cards, seed, round)`
/// and `player` once a transition has completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameState {
    pub(crate) seed: String,
    pub(crate) round: u32,
    pub(crate) ordered_cards: Vec<Card>,
    pub(crate) player: Option<u32>,
    pub(crate) shuffled_cards: Vec<Card>,
    pub(crate) card: Option<Card>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED.to_string(),
            round: 1,
            ordered_cards: Vec::new(),
            player: None,
            shuffled_cards: Vec::new(),
            card: None,
        }
    }
}

impl GameState {
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Current round, always >= 1.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn ordered_cards(&self) -> &[Card] {
        &self.ordered_cards
    }

    /// 1-based position of this device, if chosen.
    pub fn player(&self) -> Option<u32> {
        self.player
    }

    pub fn shuffled_cards(&self) -> &[Card] {
        &self.shuffled_cards
    }

    /// Card shown to this player; `None` when the player is unset or
    /// beyond the end of the shuffled list.
    pub fn card(&self) -> Option<&Card> {
        self.card.as_ref()
    }

    pub fn has_game(&self) -> bool {
        !self.ordered_cards.is_empty()
    }

    /// Fresh default state merged with the supplied setup.
    pub(crate) fn begin(setup: GameSetup, fresh_seed: impl FnOnce() -> String) -> Self {
        Self {
            seed: setup.seed.unwrap_or_else(fresh_seed),
            round: setup.round.unwrap_or(1),
            ordered_cards: setup.ordered_cards.unwrap_or_default(),
            player: setup.player,
            ..GameState::default()
        }
        .normalized()
    }

    pub(crate) fn with_round(&self, round: u32) -> Self {
        Self {
            round: round.max(1),
            ..self.clone()
        }
    }

    pub(crate) fn with_player(&self, player: Option<u32>) -> Self {
        Self {
            player: normalize_player(player),
            ..self.clone()
        }
    }

    pub(crate) fn reshuffled(self, algorithm: ShuffleAlgorithm) -> Self {
        let shuffled_cards = shuffle_with(&self.ordered_cards, &self.seed, self.round, algorithm);
        Self {
            shuffled_cards,
            ..self
        }
    }

    pub(crate) fn with_card_updated(self) -> Self {
        let card = self
            .player
            .and_then(|p| p.checked_sub(1))
            .and_then(|idx| self.shuffled_cards.get(idx as usize))
            .cloned();
        Self { card, ..self }
    }

    /// Clamps values a hand-edited or foreign record could carry.
    pub(crate) fn normalized(self) -> Self {
        Self {
            round: self.round.max(1),
            player: normalize_player(self.player),
            ..self
        }
    }
}

fn normalize_player(player: Option<u32>) -> Option<u32> {
    player.filter(|&p| p >= 1)
}

/// Optional fields for beginning a game. Anything left unset takes the
/// default-state value, except the seed which is freshly generated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameSetup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordered_cards: Option<Vec<Card>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player: Option<u32>,
}

impl GameSetup {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    #[must_use]
    pub fn with_cards(mut self, cards: Vec<Card>) -> Self {
        self.ordered_cards = Some(cards);
        self
    }

    #[must_use]
    pub fn with_round(mut self, round: u32) -> Self {
        self.round = Some(round);
        self
    }

    #[must_use]
    pub fn with_player(mut self, player: u32) -> Self {
        self.player = Some(player);
        self
    }
}
