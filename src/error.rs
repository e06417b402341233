//! Error types for game operations.

use thiserror::Error;

/// Errors in how a game was configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Player count outside the allowed range.
    #[error("player count {count} is outside {min}..={max}")]
    PlayerCount {
        /// Requested count.
        count: u8,
        /// Smallest allowed count.
        min: u8,
        /// Largest allowed count.
        max: u8,
    },
    /// Number of strategies does not match the number of players.
    #[error("expected {expected} strategies, got {actual}")]
    StrategyCount {
        /// Number of players.
        expected: usize,
        /// Number of strategies supplied.
        actual: usize,
    },
    /// A scripted deck was given no cards.
    #[error("scripted deck has no cards")]
    EmptyScript,
}

/// A synchronization primitive broke while the game was running.
///
/// None of these can be recovered from; the game is abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyncError {
    /// The shared game state lock was poisoned by a panicking actor.
    #[error("game state lock poisoned")]
    Poisoned,
    /// The other end of a player's channel went away.
    #[error("channel to player {player} disconnected")]
    Disconnected {
        /// The player whose channel closed.
        player: u8,
    },
    /// A player thread panicked.
    #[error("player {player} panicked")]
    ActorPanicked {
        /// The player whose thread panicked.
        player: u8,
    },
    /// A player thread could not be started.
    #[error("failed to spawn player {player}")]
    Spawn {
        /// The player that could not be started.
        player: u8,
    },
}

/// Errors that can end a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The game was misconfigured.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The game was aborted because synchronization failed.
    #[error(transparent)]
    Sync(#[from] SyncError),
}
