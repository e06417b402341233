//! Final standings.

use alloc::vec::Vec;

use crate::card::{Card, Points};
use crate::player::{Player, PlayerStatus};

/// One card handed out by the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    /// Zero-based position of this card in the whole game.
    pub turn: usize,
    /// The player who received it.
    pub player_id: u8,
    /// The card.
    pub card: Card,
}

/// Final state of a single player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// The player ID.
    pub player_id: u8,
    /// Final score.
    pub score: Points,
    /// Final status, either standing or busted.
    pub status: PlayerStatus,
    /// Cards received, in dealt order.
    pub cards: Vec<Card>,
}

/// Who won.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Standings {
    /// A single standing player has the highest score.
    Winner {
        /// The winning player.
        player_id: u8,
        /// The winning score.
        score: Points,
    },
    /// Several standing players share the highest score.
    Tie {
        /// Tied players, ascending by ID.
        player_ids: Vec<u8>,
        /// The shared score.
        score: Points,
    },
    /// Every player busted.
    NoWinner,
}

impl Standings {
    /// Ranks the standing players by score.
    #[must_use]
    pub fn from_results(players: &[PlayerResult]) -> Self {
        let standing = players
            .iter()
            .filter(|player| player.status == PlayerStatus::Standing);
        let Some(best) = standing.clone().map(|player| player.score).max() else {
            return Self::NoWinner;
        };

        let mut player_ids: Vec<u8> = standing
            .filter(|player| player.score == best)
            .map(|player| player.player_id)
            .collect();
        player_ids.sort_unstable();

        if player_ids.len() == 1 {
            Self::Winner {
                player_id: player_ids[0],
                score: best,
            }
        } else {
            Self::Tie {
                player_ids,
                score: best,
            }
        }
    }

    /// Returns the winning player and score.
    ///
    /// For a tie this is the lowest tied ID.
    #[must_use]
    pub fn winner(&self) -> Option<(u8, Points)> {
        match self {
            Self::Winner { player_id, score } => Some((*player_id, *score)),
            Self::Tie { player_ids, score } => player_ids.first().map(|&id| (id, *score)),
            Self::NoWinner => None,
        }
    }
}

/// Everything known about a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    /// Results for each player, ascending by ID.
    pub players: Vec<PlayerResult>,
    /// Every card dealt, in order.
    pub deliveries: Vec<Delivery>,
    /// The winner, if any.
    pub standings: Standings,
}

impl GameReport {
    /// Builds the report from the players' final states.
    ///
    /// # Panics
    ///
    /// Panics if a player is still active; the dealer only finishes once
    /// nobody is.
    #[must_use]
    pub fn new(players: &[Player], deliveries: Vec<Delivery>) -> Self {
        let mut players: Vec<PlayerResult> = players
            .iter()
            .map(|player| {
                assert!(
                    player.status().is_terminal(),
                    "player {} still active after the game finished",
                    player.id()
                );
                PlayerResult {
                    player_id: player.id(),
                    score: player.score(),
                    status: player.status(),
                    cards: player.cards().to_vec(),
                }
            })
            .collect();
        players.sort_unstable_by_key(|player| player.player_id);

        let standings = Standings::from_results(&players);
        Self {
            players,
            deliveries,
            standings,
        }
    }

    /// Returns the result for a player.
    #[must_use]
    pub fn player(&self, player_id: u8) -> Option<&PlayerResult> {
        self.players
            .iter()
            .find(|player| player.player_id == player_id)
    }

    /// Returns the cards the dealer handed to a player, in dealt order.
    #[must_use]
    pub fn dealt_to(&self, player_id: u8) -> Vec<Card> {
        self.deliveries
            .iter()
            .filter(|delivery| delivery.player_id == player_id)
            .map(|delivery| delivery.card)
            .collect()
    }

    /// Returns the players who busted.
    pub fn busted(&self) -> impl Iterator<Item = &PlayerResult> {
        self.players
            .iter()
            .filter(|player| player.status == PlayerStatus::Busted)
    }

    /// Returns the players who stood.
    pub fn standing(&self) -> impl Iterator<Item = &PlayerResult> {
        self.players
            .iter()
            .filter(|player| player.status == PlayerStatus::Standing)
    }
}
