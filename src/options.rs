//! Game configuration options.

use core::time::Duration;

use crate::error::ConfigError;

/// Fewest players a game can be started with.
pub const MIN_PLAYERS: u8 = 2;

/// Most players a game can be started with.
pub const MAX_PLAYERS: u8 = 10;

/// How the dealer and the players rendezvous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Realization {
    /// All actors share one locked game state and wait on a condition variable.
    #[default]
    SharedState,
    /// Actors share nothing and exchange typed messages over channel pairs.
    MessagePassing,
}

/// Configuration options for a Seven and a Half game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use seven_half::GameOptions;
///
/// let options = GameOptions::default()
///     .with_players(4)
///     .with_seed(7);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of players.
    pub players: u8,
    /// Seed for the deck and for every player's coin.
    pub seed: u64,
    /// Pause taken by the dealer after each resolved card.
    pub turn_delay: Duration,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            players: MIN_PLAYERS,
            seed: 0,
            turn_delay: Duration::ZERO,
        }
    }
}

impl GameOptions {
    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use seven_half::GameOptions;
    ///
    /// let options = GameOptions::default().with_players(6);
    /// assert_eq!(options.players, 6);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: u8) -> Self {
        self.players = players;
        self
    }

    /// Sets the random seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the dealer's pause between cards.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use seven_half::GameOptions;
    ///
    /// let options = GameOptions::default().with_turn_delay(Duration::from_millis(100));
    /// assert_eq!(options.turn_delay, Duration::from_millis(100));
    /// ```
    #[must_use]
    pub const fn with_turn_delay(mut self, delay: Duration) -> Self {
        self.turn_delay = delay;
        self
    }

    /// Checks that the player count lies within [`MIN_PLAYERS`]..=[`MAX_PLAYERS`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PlayerCount`] for an out-of-range count.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.players < MIN_PLAYERS || self.players > MAX_PLAYERS {
            return Err(ConfigError::PlayerCount {
                count: self.players,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }
        Ok(())
    }
}
