use std::fmt;

use tracing::{debug, info, warn};
use url::Url;

use crate::action::Action;
use crate::cards::join_cards;
use crate::errors::GameError;
use crate::game::GameState;
use crate::link::ShareLink;
use crate::persistence::{load_state, save_state, KeyValueStore, STATE_KEY};
use crate::rng::{generate_seed, ShuffleAlgorithm};
use crate::share::ShareTarget;

/// Length of generated room seeds.
pub const DEFAULT_SEED_LENGTH: usize = 4;

/// Reducer parameters: which generator shuffles rounds and how long fresh
/// seeds are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub algorithm: ShuffleAlgorithm,
    pub seed_length: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            algorithm: ShuffleAlgorithm::Arc4,
            seed_length: DEFAULT_SEED_LENGTH,
        }
    }
}

impl Rules {
    /// Applies `action` and then the derived recomputes it invalidated:
    /// `shuffle` when seed, round or cards changed, then `updateCard` when the
    /// shuffled list or player changed. Both run before the new state is
    /// returned, so callers never see a stale card.
    ///
    /// ```
    /// use cardroom_engine::action::Action;
    /// use cardroom_engine::cards::split_cards;
    /// use cardroom_engine::engine::Rules;
    /// use cardroom_engine::game::{GameSetup, GameState};
    ///
    /// let rules = Rules::default();
    /// let setup = GameSetup::new().with_seed("SEED").with_cards(split_cards("🍎🍋🍌")).with_player(1);
    /// let s = rules.transition(&GameState::default(), Action::BeginGame(setup));
    /// assert_eq!(s.card().map(|c| c.as_str()), Some("🍋"));
    ///
    /// let s = rules.transition(&s, Action::NextRound);
    /// assert_eq!(s.round(), 2);
    /// assert_eq!(s.card().map(|c| c.as_str()), Some("🍌"));
    /// ```
    pub fn transition(&self, state: &GameState, action: Action) -> GameState {
        let forces_shuffle = matches!(action, Action::BeginGame(_) | Action::Shuffle);
        let forces_card = matches!(action, Action::UpdateCard);
        let next = self.reduce(state, action);
        self.react(state, next, forces_shuffle, forces_card)
    }

    fn reduce(&self, state: &GameState, action: Action) -> GameState {
        match action {
            Action::BeginGame(setup) => {
                GameState::begin(setup, || generate_seed(self.seed_length))
            }
            Action::Shuffle | Action::UpdateCard => state.clone(),
            Action::NextRound => state.with_round(state.round.saturating_add(1)),
            Action::PrevRound => state.with_round(state.round.saturating_sub(1)),
            Action::SetPlayer(player) => state.with_player(player),
        }
    }

    fn react(
        &self,
        prev: &GameState,
        mut next: GameState,
        forces_shuffle: bool,
        forces_card: bool,
    ) -> GameState {
        let shuffled = forces_shuffle
            || next.seed != prev.seed
            || next.round != prev.round
            || next.ordered_cards != prev.ordered_cards;
        if shuffled {
            next = next.reshuffled(self.algorithm);
        }
        if shuffled
            || forces_card
            || next.shuffled_cards != prev.shuffled_cards
            || next.player != prev.player
        {
            next = next.with_card_updated();
        }
        next
    }

    /// Re-derives everything from the canonical fields of a state that did
    /// not come out of [`Rules::transition`], e.g. one read from storage.
    pub fn refresh(&self, state: GameState) -> GameState {
        state
            .normalized()
            .reshuffled(self.algorithm)
            .with_card_updated()
    }
}

/// [`Rules::transition`] with default rules.
pub fn transition(state: &GameState, action: Action) -> GameState {
    Rules::default().transition(state, action)
}

/// Owns the game state for one device and is the only way to change it.
///
/// Each dispatch runs the reducer, persists the result (failures are logged
/// and otherwise ignored) and, for a new game, offers the invitation to the
/// share target when there is one.
pub struct Engine<S: KeyValueStore> {
    state: GameState,
    rules: Rules,
    store: S,
    base_url: Url,
    share: Option<Box<dyn ShareTarget>>,
}

impl<S: KeyValueStore> fmt::Debug for Engine<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("state", &self.state)
            .field("rules", &self.rules)
            .field("base_url", &self.base_url.as_str())
            .field("share", &self.share.is_some())
            .finish_non_exhaustive()
    }
}

impl<S: KeyValueStore> Engine<S> {
    /// Restores the last saved state from `store`, or the default state.
    pub fn open(store: S, rules: Rules, base_url: Url) -> Self {
        let state = load_state(&store, STATE_KEY, &rules);
        Self {
            state,
            rules,
            store,
            base_url,
            share: None,
        }
    }

    #[must_use]
    pub fn with_share_target(mut self, target: Box<dyn ShareTarget>) -> Self {
        self.share = Some(target);
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn dispatch(&mut self, action: Action) -> &GameState {
        let kind = action.kind();
        let begins = matches!(action, Action::BeginGame(_));
        self.state = self.rules.transition(&self.state, action);
        debug!(
            action = kind,
            round = self.state.round,
            player = ?self.state.player,
            "transition"
        );

        if let Err(e) = save_state(&mut self.store, STATE_KEY, &self.state) {
            warn!(error = %e, "failed to persist game state");
        }

        if begins {
            info!(
                seed = %self.state.seed,
                cards = %join_cards(&self.state.ordered_cards),
                round = self.state.round,
                "new game"
            );
            self.share_invitation();
        }
        &self.state
    }

    /// Dispatches a serialized intent. Unknown or malformed intents are
    /// logged and leave the state untouched.
    pub fn dispatch_json(&mut self, raw: &str) -> Result<&GameState, GameError> {
        match Action::from_json(raw) {
            Ok(action) => Ok(self.dispatch(action)),
            Err(e) => {
                warn!(error = %e, "ignoring intent");
                Err(e)
            }
        }
    }

    /// Starts the game described by a share link (full URL or `?s=..&c=..`
    /// query) unless it describes the game already in progress. Returns
    /// whether a new game began.
    pub fn accept_link(&mut self, input: &str) -> bool {
        let link = match ShareLink::parse(input) {
            Ok(link) => link,
            Err(e) => {
                debug!(error = %e, "not a game link");
                return false;
            }
        };
        if !link.should_replace(&self.state) {
            debug!(seed = %link.seed, round = link.round, "link matches current game");
            return false;
        }
        self.dispatch(Action::BeginGame(link.into_setup()));
        true
    }

    pub fn share_link(&self) -> ShareLink {
        ShareLink::from_state(&self.state)
    }

    pub fn share_url(&self) -> Url {
        self.share_link().to_url(&self.base_url)
    }

    pub fn invitation(&self) -> String {
        self.share_link().invitation(&self.base_url)
    }

    fn share_invitation(&mut self) {
        let text = self.invitation();
        if let Some(target) = self.share.as_mut() {
            if let Err(e) = target.share(&text) {
                warn!(error = %e, "share target failed");
            }
        }
    }
}
