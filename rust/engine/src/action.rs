use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::GameError;
use crate::game::GameSetup;

/// Intents accepted by the game reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the game with a fresh one built from the setup.
    BeginGame(GameSetup),
    /// Recompute the shuffled order from `(cards, seed, round)`.
    Shuffle,
    /// Recompute this player's card from the shuffled order.
    UpdateCard,
    NextRound,
    PrevRound,
    SetPlayer(Option<u32>),
}

impl Action {
    pub fn kind(&self) -> &'static str {
        match self {
            Action::BeginGame(_) => "beginGame",
            Action::Shuffle => "shuffle",
            Action::UpdateCard => "updateCard",
            Action::NextRound => "nextRound",
            Action::PrevRound => "prevRound",
            Action::SetPlayer(_) => "setPlayer",
        }
    }

    /// Parses a serialized `{ "type": ..., "payload": ... }` intent.
    ///
    /// ```
    /// use cardroom_engine::action::Action;
    ///
    /// let a = Action::from_json(r#"{"type":"setPlayer","payload":{"player":3}}"#).unwrap();
    /// assert_eq!(a, Action::SetPlayer(Some(3)));
    /// assert!(Action::from_json(r#"{"type":"rollDice"}"#).is_err());
    /// ```
    pub fn from_json(raw: &str) -> Result<Action, GameError> {
        let intent: Intent =
            serde_json::from_str(raw).map_err(|e| GameError::InvalidIntent(e.to_string()))?;
        Action::try_from(intent)
    }
}

/// Wire form of an action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub payload: Value,
}

#[derive(Debug, Serialize, Deserialize)]
struct PlayerPayload {
    #[serde(default)]
    player: Option<u32>,
}

impl TryFrom<Intent> for Action {
    type Error = GameError;

    fn try_from(intent: Intent) -> Result<Self, Self::Error> {
        let invalid = |e: serde_json::Error| GameError::InvalidIntent(e.to_string());
        match intent.kind.as_str() {
            "beginGame" => {
                let setup = if intent.payload.is_null() {
                    GameSetup::default()
                } else {
                    serde_json::from_value(intent.payload).map_err(invalid)?
                };
                Ok(Action::BeginGame(setup))
            }
            "shuffle" => Ok(Action::Shuffle),
            "updateCard" => Ok(Action::UpdateCard),
            "nextRound" => Ok(Action::NextRound),
            "prevRound" => Ok(Action::PrevRound),
            "setPlayer" => {
                let p: PlayerPayload = serde_json::from_value(intent.payload).map_err(invalid)?;
                Ok(Action::SetPlayer(p.player))
            }
            other => Err(GameError::UnknownAction(other.to_string())),
        }
    }
}

impl From<Action> for Intent {
    fn from(action: Action) -> Self {
        let kind = action.kind().to_string();
        let payload = match action {
            Action::BeginGame(setup) => serde_json::to_value(setup).unwrap_or(Value::Null),
            Action::SetPlayer(player) => serde_json::json!({ "player": player }),
            _ => Value::Null,
        };
        Intent { kind, payload }
    }
}
