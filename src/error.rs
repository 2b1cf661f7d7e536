//! Error types for table and game operations.

use thiserror::Error;

/// Errors that can occur when placing a bet on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet amount is below the table minimum.
    #[error("bet of {amount} is below the table minimum of {minimum}")]
    BelowMinimum {
        /// The rejected bet amount.
        amount: u64,
        /// The table minimum.
        minimum: u64,
    },
    /// Placing the bet would take the table total above its limit.
    #[error("table total of {total} would exceed the limit of {limit}")]
    OverLimit {
        /// The total the table would have held with this bet.
        total: u64,
        /// The table limit.
        limit: u64,
    },
}

/// Errors that can occur while running a spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The table rejected one of the player's bets.
    #[error("table rejected bet: {0}")]
    Table(#[from] TableError),
}
