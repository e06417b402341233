use alloc::boxed::Box;
use alloc::format;
use alloc::vec::Vec;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender, bounded};

use crate::card::Card;
use crate::error::SyncError;
use crate::player::{Player, PlayerStatus};
use crate::strategy::Strategy;

use super::{Rendezvous, player_id};

/// Dealer to player.
#[derive(Debug, Clone, Copy)]
enum DealerMessage {
    Card(Card),
    Finished,
}

/// Player to dealer: the status after the last card.
#[derive(Debug, Clone, Copy)]
struct Decision(PlayerStatus);

struct Seat {
    deals: Sender<DealerMessage>,
    decisions: Receiver<Decision>,
    actor: JoinHandle<Result<Player, SyncError>>,
}

/// Message-passing rendezvous. Nothing is shared between actors; each
/// player's score and status live only on its own thread until it is
/// joined.
pub struct ChannelTable {
    seats: Vec<Seat>,
}

impl ChannelTable {
    fn play(
        mut player: Player,
        mut strategy: Box<dyn Strategy>,
        deals: &Receiver<DealerMessage>,
        decisions: &Sender<Decision>,
    ) -> Result<Player, SyncError> {
        let id = player.id();
        loop {
            match deals.recv().map_err(|_| SyncError::Disconnected { player: id })? {
                DealerMessage::Card(card) => {
                    let status = player.receive_card(card, strategy.as_mut());
                    log::debug!("player {id} received {card} (total {})", player.score());
                    match status {
                        PlayerStatus::Busted => log::info!("player {id} busted"),
                        PlayerStatus::Standing => log::info!("player {id} stands"),
                        PlayerStatus::Active => {}
                    }
                    decisions
                        .send(Decision(status))
                        .map_err(|_| SyncError::Disconnected { player: id })?;
                }
                DealerMessage::Finished => {
                    log::trace!("player {id} leaves the table");
                    return Ok(player);
                }
            }
        }
    }
}

impl Rendezvous for ChannelTable {
    fn open(strategies: Vec<Box<dyn Strategy>>) -> Result<Self, SyncError> {
        let mut seats = Vec::with_capacity(strategies.len());

        for (seat, strategy) in strategies.into_iter().enumerate() {
            let id = player_id(seat);
            let (deals, deal_inbox) = bounded(1);
            let (decision_outbox, decisions) = bounded(1);
            let actor = thread::Builder::new()
                .name(format!("player-{id}"))
                .spawn(move || Self::play(Player::new(id), strategy, &deal_inbox, &decision_outbox))
                .map_err(|_| SyncError::Spawn { player: id })?;
            seats.push(Seat {
                deals,
                decisions,
                actor,
            });
        }

        Ok(Self { seats })
    }

    fn seats(&self) -> usize {
        self.seats.len()
    }

    fn deal(&mut self, seat: usize, card: Card) -> Result<PlayerStatus, SyncError> {
        let id = player_id(seat);
        let seat = &self.seats[seat];
        seat.deals
            .send(DealerMessage::Card(card))
            .map_err(|_| SyncError::Disconnected { player: id })?;
        let Decision(status) = seat
            .decisions
            .recv()
            .map_err(|_| SyncError::Disconnected { player: id })?;
        Ok(status)
    }

    fn finish(self) -> Result<Vec<Player>, SyncError> {
        for seat in &self.seats {
            // A closed inbox means the actor already died; joining reports why.
            let _ = seat.deals.send(DealerMessage::Finished);
        }

        self.seats
            .into_iter()
            .enumerate()
            .map(|(seat, Seat { actor, .. })| {
                actor
                    .join()
                    .map_err(|_| SyncError::ActorPanicked { player: player_id(seat) })?
            })
            .collect()
    }
}
