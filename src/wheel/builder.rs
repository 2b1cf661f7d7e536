//! Population of wheel bins with every winning outcome.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::outcome::{
    COLUMN_ODDS, CORNER_ODDS, DOZEN_ODDS, EVEN_MONEY_ODDS, FIVE_BET_ODDS, LINE_ODDS, Outcome,
    SPLIT_ODDS, STRAIGHT_ODDS, STREET_ODDS,
};

use super::{DOUBLE_ZERO, OutcomeSink};

/// Numbers coloured red on an American wheel. Every other number in 1..=36 is black.
pub const RED_NUMBERS: [usize; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

/// Rows on the betting layout.
const ROWS: usize = 12;
/// Columns on the betting layout.
const COLUMNS: usize = 3;

/// Name of the bet covering `00`, `0`, `1`, `2` and `3`.
pub const FIVE_BET_NAME: &str = "00-0-1-2-3";

/// Returns the first number of a zero-based layout row.
const fn row_start(row: usize) -> usize {
    row * COLUMNS + 1
}

fn join_numbers(numbers: &[usize]) -> String {
    numbers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("-")
}

fn add_to_all<S: OutcomeSink + ?Sized>(sink: &mut S, positions: &[usize], odds: u64) {
    let outcome = Outcome::new(join_numbers(positions), odds);
    for &position in positions {
        sink.add_outcome(position, outcome.clone());
    }
}

/// Builds the winning outcomes of every bin on the wheel.
///
/// Each sub-build only adds outcomes, so they can run alone or in any order
/// and produce the same bins. [`BinBuilder::build_bins`] runs all of them.
///
/// The layout is the usual 12 rows of 3 columns: row `r` holds
/// `3r + 1`, `3r + 2` and `3r + 3`. Splits, corners and lines never wrap from
/// the third column of one row to the first column of the next.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinBuilder;

impl BinBuilder {
    /// Creates a new builder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Adds every outcome to the bins it pays off on.
    pub fn build_bins<S: OutcomeSink + ?Sized>(&self, wheel: &mut S) {
        self.straight_bets(wheel);
        self.horizontal_split_bets(wheel);
        self.vertical_split_bets(wheel);
        self.street_bets(wheel);
        self.corner_bets(wheel);
        self.line_bets(wheel);
        self.dozen_bets(wheel);
        self.column_bets(wheel);
        self.five_bet(wheel);
        self.even_money_bets(wheel);
        tracing::debug!("wheel bins populated");
    }

    /// Adds the single-number outcomes, including `0` and `00`.
    pub fn straight_bets<S: OutcomeSink + ?Sized>(&self, wheel: &mut S) {
        for number in 0..DOUBLE_ZERO {
            wheel.add_outcome(number, Outcome::new(number.to_string(), STRAIGHT_ODDS));
        }
        wheel.add_outcome(DOUBLE_ZERO, Outcome::new("00", STRAIGHT_ODDS));
        tracing::trace!(outcomes = DOUBLE_ZERO + 1, "straight bets added");
    }

    /// Adds the splits between the first and second, and second and third columns.
    pub fn horizontal_split_bets<S: OutcomeSink + ?Sized>(&self, wheel: &mut S) {
        for row in 0..ROWS {
            let first = row_start(row);
            for column in 0..COLUMNS - 1 {
                let n = first + column;
                add_to_all(wheel, &[n, n + 1], SPLIT_ODDS);
            }
        }
        tracing::trace!(outcomes = ROWS * (COLUMNS - 1), "horizontal split bets added");
    }

    /// Adds the splits between a number and the one directly below it.
    pub fn vertical_split_bets<S: OutcomeSink + ?Sized>(&self, wheel: &mut S) {
        for n in 1..=(ROWS - 1) * COLUMNS {
            add_to_all(wheel, &[n, n + COLUMNS], SPLIT_ODDS);
        }
        tracing::trace!(outcomes = (ROWS - 1) * COLUMNS, "vertical split bets added");
    }

    /// Adds one street per row.
    pub fn street_bets<S: OutcomeSink + ?Sized>(&self, wheel: &mut S) {
        for row in 0..ROWS {
            let n = row_start(row);
            add_to_all(wheel, &[n, n + 1, n + 2], STREET_ODDS);
        }
        tracing::trace!(outcomes = ROWS, "street bets added");
    }

    /// Adds the four-number squares.
    pub fn corner_bets<S: OutcomeSink + ?Sized>(&self, wheel: &mut S) {
        for row in 0..ROWS - 1 {
            let first = row_start(row);
            for column in 0..COLUMNS - 1 {
                let n = first + column;
                add_to_all(wheel, &[n, n + 1, n + 3, n + 4], CORNER_ODDS);
            }
        }
        tracing::trace!(outcomes = (ROWS - 1) * (COLUMNS - 1), "corner bets added");
    }

    /// Adds the six-number lines spanning two adjacent rows.
    pub fn line_bets<S: OutcomeSink + ?Sized>(&self, wheel: &mut S) {
        for row in 0..ROWS - 1 {
            let n = row_start(row);
            let numbers: Vec<usize> = (n..n + 2 * COLUMNS).collect();
            add_to_all(wheel, &numbers, LINE_ODDS);
        }
        tracing::trace!(outcomes = ROWS - 1, "line bets added");
    }

    /// Adds the three dozens.
    pub fn dozen_bets<S: OutcomeSink + ?Sized>(&self, wheel: &mut S) {
        for dozen in 0..3 {
            let first = dozen * 12 + 1;
            let numbers: Vec<usize> = (first..first + 12).collect();
            add_to_all(wheel, &numbers, DOZEN_ODDS);
        }
        tracing::trace!(outcomes = 3, "dozen bets added");
    }

    /// Adds the three columns.
    pub fn column_bets<S: OutcomeSink + ?Sized>(&self, wheel: &mut S) {
        for column in 0..COLUMNS {
            let numbers: Vec<usize> = (0..ROWS).map(|row| row_start(row) + column).collect();
            add_to_all(wheel, &numbers, COLUMN_ODDS);
        }
        tracing::trace!(outcomes = COLUMNS, "column bets added");
    }

    /// Adds the `00-0-1-2-3` outcome.
    pub fn five_bet<S: OutcomeSink + ?Sized>(&self, wheel: &mut S) {
        let outcome = Outcome::new(FIVE_BET_NAME, FIVE_BET_ODDS);
        for position in [DOUBLE_ZERO, 0, 1, 2, 3] {
            wheel.add_outcome(position, outcome.clone());
        }
        tracing::trace!(outcomes = 1, "five bet added");
    }

    /// Adds red/black, odd/even and low/high to 1..=36.
    pub fn even_money_bets<S: OutcomeSink + ?Sized>(&self, wheel: &mut S) {
        let red = Outcome::new("Red", EVEN_MONEY_ODDS);
        let black = Outcome::new("Black", EVEN_MONEY_ODDS);
        let odd = Outcome::new("Odd", EVEN_MONEY_ODDS);
        let even = Outcome::new("Even", EVEN_MONEY_ODDS);
        let low = Outcome::new("Low", EVEN_MONEY_ODDS);
        let high = Outcome::new("High", EVEN_MONEY_ODDS);

        for n in 1..=ROWS * COLUMNS {
            let colour = if RED_NUMBERS.contains(&n) { &red } else { &black };
            let parity = if n % 2 == 0 { &even } else { &odd };
            let half = if n <= 18 { &low } else { &high };

            wheel.add_outcome(n, colour.clone());
            wheel.add_outcome(n, parity.clone());
            wheel.add_outcome(n, half.clone());
        }
        tracing::trace!(outcomes = 6, "even-money bets added");
    }
}
