//! Game engine and turn coordination.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::deck::{CardSource, Deck};
use crate::error::{ConfigError, GameError};
use crate::options::{GameOptions, Realization};
use crate::rendezvous::{ChannelTable, Rendezvous, SharedTable};
use crate::result::GameReport;
use crate::strategy::{RandomStrategy, Strategy, player_seed};

mod dealer;
pub mod state;

pub use dealer::Dealer;
pub use state::DealerPhase;

/// A single game of Seven and a Half.
///
/// By default the deck and every player's coin are seeded from
/// [`GameOptions::seed`], so a game is fully reproducible. Either can be
/// replaced for scripted play.
///
/// # Example
///
/// ```no_run
/// use seven_half::{Game, GameOptions, Realization};
///
/// let game = Game::new(GameOptions::default().with_players(3).with_seed(42))?;
/// let report = game.play(Realization::MessagePassing)?;
/// println!("{:?}", report.standings);
/// # Ok::<(), seven_half::GameError>(())
/// ```
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    deck: Box<dyn CardSource>,
    strategies: Vec<Box<dyn Strategy>>,
}

impl Game {
    /// Creates a game with a seeded deck and seeded coin-flip players.
    ///
    /// # Errors
    ///
    /// Returns an error if the player count is out of range.
    pub fn new(options: GameOptions) -> Result<Self, ConfigError> {
        options.validate()?;

        let strategies = (0..options.players)
            .map(|id| -> Box<dyn Strategy> {
                Box::new(RandomStrategy::seeded(player_seed(options.seed, id)))
            })
            .collect();

        Ok(Self {
            deck: Box::new(Deck::seeded(options.seed)),
            strategies,
            options,
        })
    }

    /// Replaces the deck.
    #[must_use]
    pub fn with_deck(mut self, deck: impl CardSource + 'static) -> Self {
        self.deck = Box::new(deck);
        self
    }

    /// Replaces the players' strategies. Strategy `i` plays for player `i`.
    ///
    /// # Errors
    ///
    /// Returns an error unless there is exactly one strategy per player.
    pub fn with_strategies(
        mut self,
        strategies: Vec<Box<dyn Strategy>>,
    ) -> Result<Self, ConfigError> {
        let expected = usize::from(self.options.players);
        if strategies.len() != expected {
            return Err(ConfigError::StrategyCount {
                expected,
                actual: strategies.len(),
            });
        }
        self.strategies = strategies;
        Ok(self)
    }

    /// Returns the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.strategies.len()
    }

    /// Plays the game to completion using the given rendezvous strategy.
    ///
    /// # Errors
    ///
    /// Returns an error if a player thread could not be started or a
    /// synchronization primitive failed mid-game.
    pub fn play(self, realization: Realization) -> Result<GameReport, GameError> {
        log::info!(
            "game starting: {} players, {realization:?}",
            self.strategies.len()
        );

        let mut dealer =
            Dealer::new(self.deck, self.strategies.len()).with_turn_delay(self.options.turn_delay);
        let players = match realization {
            Realization::SharedState => dealer.run(SharedTable::open(self.strategies)?)?,
            Realization::MessagePassing => dealer.run(ChannelTable::open(self.strategies)?)?,
        };

        let report = GameReport::new(&players, dealer.into_deliveries());
        log::info!("game over: {:?}", report.standings);
        Ok(report)
    }
}
