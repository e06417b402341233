//! Card values and score arithmetic.
//!
//! Seven and a Half only deals whole points and half points, so every value
//! is stored as a count of half points. Comparisons against the winning
//! threshold are therefore exact.

use core::fmt;
use core::ops::{Add, AddAssign};

/// A score or card value, stored in half points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Points(u16);

impl Points {
    /// Zero points.
    pub const ZERO: Self = Self(0);

    /// Creates a value from a count of half points.
    #[must_use]
    pub const fn from_halves(halves: u16) -> Self {
        Self(halves)
    }

    /// Creates a value from whole points.
    #[must_use]
    pub const fn whole(points: u16) -> Self {
        Self(points * 2)
    }

    /// Returns the value as a count of half points.
    #[must_use]
    pub const fn halves(self) -> u16 {
        self.0
    }

    /// Returns the value as a floating point number (e.g. `7.5`).
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 2.0
    }
}

impl Add for Points {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Points {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl fmt::Display for Points {
    /// Formats with one decimal place, like the scoreboard.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 2;
        let half = if self.0 % 2 == 1 { 5 } else { 0 };
        write!(f, "{whole}.{half}")
    }
}

/// A dealt card. Only its point value matters in this game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    value: Points,
}

impl Card {
    /// The half-point card.
    pub const HALF: Self = Self::new(Points::from_halves(1));

    /// Creates a card worth the given points.
    #[must_use]
    pub const fn new(value: Points) -> Self {
        Self { value }
    }

    /// Creates a card worth a whole number of points.
    #[must_use]
    pub const fn whole(points: u16) -> Self {
        Self::new(Points::whole(points))
    }

    /// Returns the point value of the card.
    #[must_use]
    pub const fn value(self) -> Points {
        self.value
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

/// Scores strictly above this bust the player; a score equal to it forces a stand.
pub const WINNING_SCORE: Points = Points::from_halves(15);

/// The fixed multiset the deck samples from.
///
/// The three half-point cards are intentional: a half point is three times
/// as likely as any single whole value.
pub const DECK_VALUES: [Card; 10] = [
    Card::whole(1),
    Card::whole(2),
    Card::whole(3),
    Card::whole(4),
    Card::whole(5),
    Card::whole(6),
    Card::whole(7),
    Card::HALF,
    Card::HALF,
    Card::HALF,
];
