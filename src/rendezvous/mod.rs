//! Dealer/player rendezvous.
//!
//! A [`Rendezvous`] owns the player actors of one game and carries exactly
//! one card at a time from the dealer to a player and that player's new
//! status back. Two interchangeable implementations exist:
//!
//! - [`SharedTable`]: players live in one locked state block and wake on a
//!   condition variable when a card is pending for their seat.
//! - [`ChannelTable`]: each player owns its state outright and talks to the
//!   dealer over a private pair of one-slot channels.
//!
//! Both start one thread per player when opened and join them in
//! [`Rendezvous::finish`].

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::SyncError;
use crate::player::{Player, PlayerStatus};
use crate::strategy::Strategy;

mod channel;
mod shared;

pub use channel::ChannelTable;
pub use shared::SharedTable;

/// A blocking deal/decide handshake between the dealer and its players.
pub trait Rendezvous: Sized {
    /// Starts one actor per strategy. Seat `i` plays as player `i`.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Spawn`] if a player thread cannot be started.
    fn open(strategies: Vec<Box<dyn Strategy>>) -> Result<Self, SyncError>;

    /// Returns the number of seats at the table.
    fn seats(&self) -> usize;

    /// Hands `card` to the player in `seat` and blocks until that player
    /// reports its resulting status.
    ///
    /// The caller must only deal to active players.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying primitive broke or the player's
    /// actor is gone.
    fn deal(&mut self, seat: usize, card: Card) -> Result<PlayerStatus, SyncError>;

    /// Tells every player the game is over, waits for all of them to exit,
    /// and returns their final states ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if a player's actor failed or panicked.
    fn finish(self) -> Result<Vec<Player>, SyncError>;
}

/// Converts a seat index into a player ID.
pub(crate) const fn player_id(seat: usize) -> u8 {
    seat as u8
}
