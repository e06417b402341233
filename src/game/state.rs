//! Dealer state types.

/// Where the dealer is in its turn loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerPhase {
    /// Looking for the next active player, starting at the turn index.
    SelectPlayer,
    /// Drawing a card for the selected player.
    DealCard,
    /// Waiting for the selected player to decide.
    AwaitDecision,
    /// Moving the turn index past the player who just played.
    Advance,
    /// No player is active; the game is over.
    Finished,
}
