//! Player decision making.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Points;

/// The voluntary choice a player makes after a card that did not bust them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    /// Keep the current score and take no more cards.
    Stand,
    /// Ask for another card.
    Continue,
}

/// Decides whether a player stands or continues.
///
/// Only consulted while the score is strictly below the winning score;
/// busting and the forced stand at exactly the winning score are applied by
/// [`Player::receive_card`](crate::Player::receive_card) without asking.
pub trait Strategy: Send {
    /// Chooses for a player holding `score`.
    fn choose(&mut self, score: Points) -> Choice;
}

/// A fair coin flip between standing and continuing.
#[derive(Debug, Clone)]
pub struct RandomStrategy<R = ChaCha8Rng> {
    rng: R,
}

impl RandomStrategy<ChaCha8Rng> {
    /// Creates a strategy flipping a `ChaCha8` coin seeded with `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomStrategy<R> {
    /// Creates a strategy drawing from the given random source.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send> Strategy for RandomStrategy<R> {
    fn choose(&mut self, _score: Points) -> Choice {
        if self.rng.random_bool(0.5) {
            Choice::Stand
        } else {
            Choice::Continue
        }
    }
}

/// Replays a fixed list of choices, then keeps continuing once exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedStrategy {
    choices: Vec<Choice>,
    next: usize,
}

impl ScriptedStrategy {
    /// Creates a strategy that answers with `choices` in order.
    #[must_use]
    pub fn new(choices: impl Into<Vec<Choice>>) -> Self {
        Self {
            choices: choices.into(),
            next: 0,
        }
    }

    /// A strategy that never stands voluntarily.
    #[must_use]
    pub const fn always_continue() -> Self {
        Self {
            choices: Vec::new(),
            next: 0,
        }
    }

    /// Returns how many times the strategy was consulted.
    #[must_use]
    pub const fn consulted(&self) -> usize {
        self.next
    }
}

impl Strategy for ScriptedStrategy {
    fn choose(&mut self, _score: Points) -> Choice {
        let choice = self
            .choices
            .get(self.next)
            .copied()
            .unwrap_or(Choice::Continue);
        self.next += 1;
        choice
    }
}

/// Derives the seed of player `id`'s coin from the game seed.
///
/// Each player gets its own stream so decisions do not depend on thread
/// scheduling.
#[must_use]
pub fn player_seed(game_seed: u64, id: u8) -> u64 {
    game_seed.wrapping_add((u64::from(id) + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

