use alloc::vec;
use alloc::vec::Vec;
use core::time::Duration;

use crate::deck::CardSource;
use crate::error::SyncError;
use crate::player::{Player, PlayerStatus};
use crate::rendezvous::{Rendezvous, player_id};
use crate::result::Delivery;

use super::DealerPhase;

/// The turn coordinator.
///
/// The dealer is the only actor that picks who plays next and the only one
/// that declares the game finished. It keeps its own view of every
/// player's status, updated from the decision each player sends back.
#[derive(Debug)]
pub struct Dealer<D> {
    deck: D,
    statuses: Vec<PlayerStatus>,
    turn_index: usize,
    phase: DealerPhase,
    deliveries: Vec<Delivery>,
    turn_delay: Duration,
}

impl<D: CardSource> Dealer<D> {
    /// Creates a dealer for `players` active players.
    #[must_use]
    pub fn new(deck: D, players: usize) -> Self {
        Self {
            deck,
            statuses: vec![PlayerStatus::Active; players],
            turn_index: 0,
            phase: DealerPhase::SelectPlayer,
            deliveries: Vec::new(),
            turn_delay: Duration::ZERO,
        }
    }

    /// Sets a pause taken after each resolved card.
    #[must_use]
    pub const fn with_turn_delay(mut self, delay: Duration) -> Self {
        self.turn_delay = delay;
        self
    }

    /// Returns the first active seat at or after the turn index, wrapping
    /// around, or `None` if every player is terminal.
    #[must_use]
    pub fn next_player(&self) -> Option<usize> {
        let seats = self.statuses.len();
        (0..seats)
            .map(|offset| (self.turn_index + offset) % seats)
            .find(|&seat| self.statuses[seat] == PlayerStatus::Active)
    }

    /// Plays one card: selects a player, deals, waits for the decision and
    /// advances the turn index.
    ///
    /// Returns `None` without dealing once no player is active.
    ///
    /// # Errors
    ///
    /// Returns an error if the rendezvous failed.
    pub fn play_turn<R: Rendezvous>(
        &mut self,
        table: &mut R,
    ) -> Result<Option<Delivery>, SyncError> {
        if self.phase == DealerPhase::Finished {
            return Ok(None);
        }

        self.phase = DealerPhase::SelectPlayer;
        let Some(seat) = self.next_player() else {
            self.phase = DealerPhase::Finished;
            return Ok(None);
        };

        self.phase = DealerPhase::DealCard;
        let card = self.deck.draw();
        let delivery = Delivery {
            turn: self.deliveries.len(),
            player_id: player_id(seat),
            card,
        };
        self.deliveries.push(delivery);
        log::trace!("dealing {card} to player {}", delivery.player_id);

        self.phase = DealerPhase::AwaitDecision;
        self.statuses[seat] = table.deal(seat, card)?;

        self.phase = DealerPhase::Advance;
        self.turn_index = (seat + 1) % self.statuses.len();
        if !self.turn_delay.is_zero() {
            std::thread::sleep(self.turn_delay);
        }

        Ok(Some(delivery))
    }

    /// Deals until no player is active, then releases the players and
    /// returns their final states.
    ///
    /// # Errors
    ///
    /// Returns an error if the rendezvous failed at any point. The game is
    /// abandoned and `table` is dropped, which releases any waiting players.
    pub fn run<R: Rendezvous>(&mut self, mut table: R) -> Result<Vec<Player>, SyncError> {
        debug_assert_eq!(table.seats(), self.statuses.len());
        while self.play_turn(&mut table)?.is_some() {}
        log::info!("all players done after {} cards", self.deliveries.len());
        table.finish()
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> DealerPhase {
        self.phase
    }

    /// Returns the seat where the next scan starts.
    #[must_use]
    pub const fn turn_index(&self) -> usize {
        self.turn_index
    }

    /// Returns whether the game is over.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == DealerPhase::Finished
    }

    /// Returns the dealer's view of every player's status.
    #[must_use]
    pub fn statuses(&self) -> &[PlayerStatus] {
        &self.statuses
    }

    /// Returns every card dealt so far, in order.
    #[must_use]
    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }

    /// Consumes the dealer, returning the delivery log.
    #[must_use]
    pub fn into_deliveries(self) -> Vec<Delivery> {
        self.deliveries
    }
}
