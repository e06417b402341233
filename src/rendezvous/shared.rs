use alloc::boxed::Box;
use alloc::format;
use alloc::sync::Arc;
use alloc::vec::Vec;
use std::thread::{self, JoinHandle};

use crate::card::Card;
use crate::error::SyncError;
use crate::player::{Player, PlayerStatus};
use crate::strategy::Strategy;
use crate::sync::{Mutex, Signal};

use super::{Rendezvous, player_id};

/// The state block every actor shares.
struct TableState {
    players: Vec<Player>,
    /// Seat the pending card is addressed to.
    target: usize,
    /// Dealt but not yet taken by the target. At most one at a time.
    pending: Option<Card>,
    game_over: bool,
}

struct Shared {
    state: Mutex<TableState>,
    signal: Signal,
}

/// Wakes everyone when a player thread exits, including by panic, so the
/// dealer observes the poisoned lock instead of waiting forever.
struct WakeOnExit<'a>(&'a Shared);

impl Drop for WakeOnExit<'_> {
    fn drop(&mut self) {
        self.0.signal.notify_all();
    }
}

/// Lock-and-condition-variable rendezvous.
pub struct SharedTable {
    shared: Arc<Shared>,
    actors: Vec<JoinHandle<Result<(), SyncError>>>,
}

impl SharedTable {
    /// Waits for one card and decides on it. Returns `false` once the game is over.
    fn take_card(
        shared: &Shared,
        seat: usize,
        strategy: &mut dyn Strategy,
    ) -> Result<bool, SyncError> {
        let state = shared.state.lock()?;
        let mut state = shared.signal.wait_while(state, |s| {
            !s.game_over && !(s.target == seat && s.pending.is_some())
        })?;

        if state.game_over {
            return Ok(false);
        }
        let Some(card) = state.pending.take() else {
            return Ok(true);
        };

        let player = &mut state.players[seat];
        let status = player.receive_card(card, strategy);
        log::debug!(
            "player {} received {card} (total {})",
            player.id(),
            player.score()
        );
        drop(state);

        match status {
            PlayerStatus::Busted => log::info!("player {} busted", player_id(seat)),
            PlayerStatus::Standing => log::info!("player {} stands", player_id(seat)),
            PlayerStatus::Active => {}
        }
        shared.signal.notify_all();
        Ok(true)
    }

    fn play(
        shared: &Shared,
        seat: usize,
        mut strategy: Box<dyn Strategy>,
    ) -> Result<(), SyncError> {
        let _wake = WakeOnExit(shared);
        while Self::take_card(shared, seat, strategy.as_mut())? {}
        log::trace!("player {} leaves the table", player_id(seat));
        Ok(())
    }
}

impl Rendezvous for SharedTable {
    fn open(strategies: Vec<Box<dyn Strategy>>) -> Result<Self, SyncError> {
        let players = (0..strategies.len()).map(|seat| Player::new(player_id(seat))).collect();
        let mut table = Self {
            shared: Arc::new(Shared {
                state: Mutex::new(TableState {
                    players,
                    target: 0,
                    pending: None,
                    game_over: false,
                }),
                signal: Signal::new(),
            }),
            actors: Vec::with_capacity(strategies.len()),
        };

        for (seat, strategy) in strategies.into_iter().enumerate() {
            let id = player_id(seat);
            let shared = Arc::clone(&table.shared);
            let actor = thread::Builder::new()
                .name(format!("player-{id}"))
                .spawn(move || Self::play(&shared, seat, strategy))
                .map_err(|_| SyncError::Spawn { player: id })?;
            table.actors.push(actor);
        }

        Ok(table)
    }

    fn seats(&self) -> usize {
        self.actors.len()
    }

    fn deal(&mut self, seat: usize, card: Card) -> Result<PlayerStatus, SyncError> {
        let mut state = self.shared.state.lock()?;
        assert!(state.pending.is_none(), "a card is already in flight");
        debug_assert_eq!(state.players[seat].status(), PlayerStatus::Active);
        state.target = seat;
        state.pending = Some(card);
        self.shared.signal.notify_all();

        let state = self
            .shared
            .signal
            .wait_while(state, |s| s.pending.is_some() && !s.game_over)?;
        Ok(state.players[seat].status())
    }

    fn finish(mut self) -> Result<Vec<Player>, SyncError> {
        self.shared.state.lock()?.game_over = true;
        self.shared.signal.notify_all();

        for (seat, actor) in core::mem::take(&mut self.actors).into_iter().enumerate() {
            actor
                .join()
                .map_err(|_| SyncError::ActorPanicked { player: player_id(seat) })??;
        }

        let players = core::mem::take(&mut self.shared.state.lock()?.players);
        Ok(players)
    }
}

impl Drop for SharedTable {
    /// Releases any player still waiting for a card if the game is abandoned.
    fn drop(&mut self) {
        self.shared.state.lock_for_teardown().game_over = true;
        self.shared.signal.notify_all();
    }
}
