//! Player state and the per-card decision.

use alloc::vec::Vec;

use crate::card::{Card, Points, WINNING_SCORE};
use crate::strategy::{Choice, Strategy};

/// Player status.
///
/// `Active` is the only non-terminal status. Once a player stands or busts
/// the status never changes again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerStatus {
    /// Still taking cards.
    Active,
    /// Stopped voluntarily, or forced to stop at exactly the winning score.
    Standing,
    /// Went over the winning score.
    Busted,
}

impl PlayerStatus {
    /// Returns whether the status is terminal.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// A player's private running state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: u8,
    score: Points,
    status: PlayerStatus,
    cards: Vec<Card>,
}

impl Player {
    /// Creates an active player with a score of zero.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self {
            id,
            score: Points::ZERO,
            status: PlayerStatus::Active,
            cards: Vec::new(),
        }
    }

    /// Adds a card to the score and settles the player's status.
    ///
    /// Over [`WINNING_SCORE`] the player busts. At exactly the winning score
    /// the player must stand. Below it the strategy chooses.
    ///
    /// # Panics
    ///
    /// Panics if the player is no longer active. The dealer never deals to a
    /// terminal player, so this is a bug in the caller.
    pub fn receive_card(&mut self, card: Card, strategy: &mut dyn Strategy) -> PlayerStatus {
        assert_eq!(
            self.status,
            PlayerStatus::Active,
            "player {} was dealt a card after leaving play",
            self.id
        );

        self.cards.push(card);
        self.score += card.value();

        self.status = if self.score > WINNING_SCORE {
            PlayerStatus::Busted
        } else if self.score == WINNING_SCORE {
            PlayerStatus::Standing
        } else {
            match strategy.choose(self.score) {
                Choice::Stand => PlayerStatus::Standing,
                Choice::Continue => PlayerStatus::Active,
            }
        };

        self.status
    }

    /// Returns the player's ID.
    #[must_use]
    pub const fn id(&self) -> u8 {
        self.id
    }

    /// Returns the running score.
    #[must_use]
    pub const fn score(&self) -> Points {
        self.score
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> PlayerStatus {
        self.status
    }

    /// Returns the cards received, in the order they were dealt.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
