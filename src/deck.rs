//! Card sources for the dealer.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_VALUES};
use crate::error::ConfigError;

/// Anything the dealer can draw cards from.
///
/// The dealer owns its source for the whole game, so implementations only
/// need to be [`Send`].
pub trait CardSource: Send {
    /// Draws the next card. Never fails.
    fn draw(&mut self) -> Card;
}

/// The Seven and a Half deck: independent uniform draws, with replacement,
/// from [`DECK_VALUES`].
///
/// The multiset is never modified; there is no removal or reshuffling.
#[derive(Debug, Clone)]
pub struct Deck<R = ChaCha8Rng> {
    rng: R,
}

impl Deck<ChaCha8Rng> {
    /// Creates a deck drawing from a `ChaCha8` stream seeded with `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Deck<R> {
    /// Creates a deck drawing from the given random source.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send> CardSource for Deck<R> {
    fn draw(&mut self) -> Card {
        DECK_VALUES[self.rng.random_range(0..DECK_VALUES.len())]
    }
}

/// A deck that replays a fixed sequence of cards, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ScriptedDeck {
    cards: Vec<Card>,
    next: usize,
}

impl ScriptedDeck {
    /// Creates a deck that deals `cards` in order, cycling forever.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyScript`] if `cards` is empty.
    pub fn new(cards: impl Into<Vec<Card>>) -> Result<Self, ConfigError> {
        let cards = cards.into();
        if cards.is_empty() {
            return Err(ConfigError::EmptyScript);
        }
        Ok(Self { cards, next: 0 })
    }
}

impl CardSource for ScriptedDeck {
    fn draw(&mut self) -> Card {
        let card = self.cards[self.next % self.cards.len()];
        self.next += 1;
        card
    }
}

impl<C: CardSource + ?Sized> CardSource for alloc::boxed::Box<C> {
    fn draw(&mut self) -> Card {
        (**self).draw()
    }
}
