//! Named bet outcomes and their payout odds.

use alloc::string::String;
use core::fmt;

/// Odds for a bet on a single number.
pub const STRAIGHT_ODDS: u64 = 35;
/// Odds for a bet on two adjacent numbers.
pub const SPLIT_ODDS: u64 = 17;
/// Odds for a bet on a row of three numbers.
pub const STREET_ODDS: u64 = 11;
/// Odds for a bet on a square of four numbers.
pub const CORNER_ODDS: u64 = 8;
/// Odds for the `00-0-1-2-3` bet.
pub const FIVE_BET_ODDS: u64 = 6;
/// Odds for a bet on two adjacent rows.
pub const LINE_ODDS: u64 = 5;
/// Odds for a dozen bet.
pub const DOZEN_ODDS: u64 = 2;
/// Odds for a column bet.
pub const COLUMN_ODDS: u64 = 2;
/// Odds for red, black, odd, even, low and high.
pub const EVEN_MONEY_ODDS: u64 = 1;

/// A single outcome on which a bet can be placed.
///
/// Odds are stored as the numerator of `odds:1`. Two outcomes are equal when
/// both the name and the odds match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Outcome {
    name: String,
    odds: u64,
}

impl Outcome {
    /// Creates a new outcome.
    ///
    /// # Example
    ///
    /// ```
    /// use roulette_sim::Outcome;
    ///
    /// let red = Outcome::new("Red", 1);
    /// assert_eq!(red.to_string(), "Red (1:1)");
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, odds: u64) -> Self {
        Self {
            name: name.into(),
            odds,
        }
    }

    /// Returns the outcome name, e.g. `"Red"` or `"1-2-4-5"`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the odds numerator.
    #[must_use]
    pub const fn odds(&self) -> u64 {
        self.odds
    }

    /// Returns the winnings for a bet of `amount` on this outcome.
    ///
    /// The amount bet is not included.
    #[must_use]
    pub const fn win_amount(&self, amount: u64) -> u64 {
        self.odds * amount
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}:1)", self.name, self.odds)
    }
}
