//! A concurrent Seven and a Half card game engine.
//!
//! A single dealer deals cards one at a time, round-robin, to a fixed set of
//! player threads. After each card a player busts (over 7.5), is forced to
//! stand (exactly 7.5), or chooses to stand or continue. The game ends when
//! no player is still taking cards.
//!
//! The dealer and the players meet through a [`Rendezvous`]. Two
//! implementations produce the same game for the same seed:
//! [`SharedTable`] (locked shared state and a condition variable) and
//! [`ChannelTable`] (no shared state, one channel pair per player).
//!
//! # Example
//!
//! ```no_run
//! use seven_half::{Game, GameOptions, Realization};
//!
//! let options = GameOptions::default().with_players(4).with_seed(42);
//! let report = Game::new(options)?.play(Realization::SharedState)?;
//! for player in &report.players {
//!     println!("{} {} {:?}", player.player_id, player.score, player.status);
//! }
//! # Ok::<(), seven_half::GameError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod rendezvous;
pub mod result;
pub mod strategy;
mod sync;

// Re-export main types
pub use card::{Card, DECK_VALUES, Points, WINNING_SCORE};
pub use deck::{CardSource, Deck, ScriptedDeck};
pub use error::{ConfigError, GameError, SyncError};
pub use game::{Dealer, DealerPhase, Game};
pub use options::{GameOptions, MAX_PLAYERS, MIN_PLAYERS, Realization};
pub use player::{Player, PlayerStatus};
pub use rendezvous::{ChannelTable, Rendezvous, SharedTable};
pub use result::{Delivery, GameReport, PlayerResult, Standings};
pub use strategy::{Choice, RandomStrategy, ScriptedStrategy, Strategy};
