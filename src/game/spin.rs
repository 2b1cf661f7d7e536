//! Spin result types.

/// Result of settling one spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinResult {
    /// The winning wheel position (`37` is `00`).
    pub position: usize,
    /// Number of the player's bets that won.
    pub wins: usize,
    /// Number of the player's bets that lost.
    pub losses: usize,
    /// Total paid back to the player, stakes included.
    pub payout: u64,
    /// Total the player had on the table.
    pub wagered: u64,
}

impl SpinResult {
    /// Net result (positive = profit, negative = loss).
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "table totals fit in i64")]
    pub const fn net(&self) -> i64 {
        self.payout as i64 - self.wagered as i64
    }
}
