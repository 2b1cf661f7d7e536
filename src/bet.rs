//! A wager on a single outcome.

use core::fmt;

use crate::outcome::Outcome;

/// An amount wagered on an [`Outcome`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bet {
    /// The amount wagered.
    pub amount: u64,
    /// The outcome the amount is wagered on.
    pub outcome: Outcome,
}

impl Bet {
    /// Creates a new bet.
    #[must_use]
    pub const fn new(amount: u64, outcome: Outcome) -> Self {
        Self { amount, outcome }
    }

    /// Returns the amount paid back when the bet wins: the stake plus winnings.
    ///
    /// # Example
    ///
    /// ```
    /// use roulette_sim::{Bet, Outcome};
    ///
    /// let bet = Bet::new(10, Outcome::new("1-2", 17));
    /// assert_eq!(bet.win_amount(), 180);
    /// ```
    #[must_use]
    pub const fn win_amount(&self) -> u64 {
        self.amount + self.outcome.win_amount(self.amount)
    }

    /// Returns the amount lost when the bet loses.
    #[must_use]
    pub const fn lose_amount(&self) -> u64 {
        self.amount
    }
}

impl fmt::Display for Bet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.amount, self.outcome)
    }
}
