//! The betting table for a single spin.

use alloc::vec::Vec;

use crate::bet::Bet;
use crate::error::TableError;

/// Bets placed for the next spin, checked against a table limit and minimum.
#[derive(Debug, Clone)]
pub struct Table {
    /// Maximum total of all bets on the table.
    limit: u64,
    /// Smallest accepted single bet.
    minimum: u64,
    /// Bets placed for the current spin.
    bets: Vec<Bet>,
}

impl Table {
    /// Creates an empty table with the given limit and minimum.
    #[must_use]
    pub const fn new(limit: u64, minimum: u64) -> Self {
        Self {
            limit,
            minimum,
            bets: Vec::new(),
        }
    }

    /// Places a bet.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero, below the table minimum, or
    /// would take the table total above the limit. The table is unchanged on error.
    pub fn place_bet(&mut self, bet: Bet) -> Result<(), TableError> {
        if bet.amount == 0 {
            return Err(TableError::ZeroBet);
        }
        if bet.amount < self.minimum {
            return Err(TableError::BelowMinimum {
                amount: bet.amount,
                minimum: self.minimum,
            });
        }

        let total = self.total().saturating_add(bet.amount);
        if total > self.limit {
            return Err(TableError::OverLimit {
                total,
                limit: self.limit,
            });
        }

        self.bets.push(bet);
        Ok(())
    }

    /// Returns the bets placed for the current spin.
    #[must_use]
    pub fn bets(&self) -> &[Bet] {
        &self.bets
    }

    /// Returns the sum of all bet amounts on the table.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.bets.iter().map(|bet| bet.amount).sum()
    }

    /// Returns the table limit.
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.limit
    }

    /// Returns the table minimum.
    #[must_use]
    pub const fn minimum(&self) -> u64 {
        self.minimum
    }

    /// Returns whether no bets have been placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bets.is_empty()
    }

    /// Removes and returns all bets (called after a spin is settled).
    pub fn clear(&mut self) -> Vec<Bet> {
        core::mem::take(&mut self.bets)
    }
}
