//! # cardroom-engine: Shared-Link Card Shuffle Core
//!
//! Deterministic game state for a party game in which every player's device
//! derives the same per-round shuffle of a user-supplied list of symbols from
//! a shared link, with no server involved.
//!
//! ## Core Modules
//!
//! - [`cards`] - Grapheme-cluster cards and input parsing
//! - [`rng`] - seedrandom-compatible ARC4 and ChaCha20 string-keyed generators
//! - [`shuffle`] - Fisher-Yates round shuffles keyed by `"<seed>-<round>"`
//! - [`game`] - Game state and begin-game setup
//! - [`action`] - Reducer intents and their `{type, payload}` wire form
//! - [`engine`] - The reducer (`Rules::transition`) and the `Engine` state owner
//! - [`link`] - Share-link encoding, decoding and the merge policy
//! - [`persistence`] - Snapshot storage behind a key-value trait
//! - [`share`] - Optional native share target
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use cardroom_engine::action::Action;
//! use cardroom_engine::cards::parse_card_input;
//! use cardroom_engine::engine::Engine;
//! use cardroom_engine::game::GameSetup;
//! use cardroom_engine::persistence::MemoryStore;
//! use url::Url;
//!
//! let base = Url::parse("https://cards.example/").unwrap();
//! let mut host = Engine::open(MemoryStore::new(), Default::default(), base.clone());
//! let cards = parse_card_input("🍎 🍋 🍌").unwrap();
//! host.dispatch(Action::BeginGame(GameSetup::new().with_cards(cards).with_player(1)));
//!
//! // another device opens the shared link and picks seat 2
//! let mut guest = Engine::open(MemoryStore::new(), Default::default(), base);
//! assert!(guest.accept_link(host.share_url().as_str()));
//! guest.dispatch(Action::SetPlayer(Some(2)));
//! assert_eq!(guest.state().shuffled_cards(), host.state().shuffled_cards());
//! ```

pub mod action;
pub mod cards;
pub mod engine;
pub mod errors;
pub mod game;
pub mod link;
pub mod persistence;
pub mod rng;
pub mod share;
pub mod shuffle;
