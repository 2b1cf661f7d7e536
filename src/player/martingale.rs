use crate::bet::Bet;
use crate::error::TableError;
use crate::outcome::Outcome;
use crate::table::Table;

use super::{Bankroll, Player, black};

/// Doubles the bet on black after every loss and drops back to the table
/// minimum after a win.
#[derive(Debug, Clone)]
pub struct PlayerMartingale {
    bankroll: Bankroll,
    outcome: Outcome,
    base: u64,
    limit: u64,
    /// Losses since the last win.
    loss_count: u32,
    /// `2^loss_count`.
    bet_multiple: u64,
}

impl PlayerMartingale {
    /// Creates a player whose base bet is the minimum of `table`.
    #[must_use]
    pub fn new(table: &Table) -> Self {
        Self {
            bankroll: Bankroll::default(),
            outcome: black(),
            base: table.minimum().max(1),
            limit: table.limit(),
            loss_count: 0,
            bet_multiple: 1,
        }
    }

    /// Returns the amount of the next bet.
    #[must_use]
    pub const fn next_bet(&self) -> u64 {
        self.base.saturating_mul(self.bet_multiple)
    }

    /// Returns the number of consecutive losses.
    #[must_use]
    pub const fn loss_count(&self) -> u32 {
        self.loss_count
    }

    const fn reset(&mut self) {
        self.loss_count = 0;
        self.bet_multiple = 1;
    }
}

impl Player for PlayerMartingale {
    fn bankroll(&self) -> &Bankroll {
        &self.bankroll
    }

    fn bankroll_mut(&mut self) -> &mut Bankroll {
        &mut self.bankroll
    }

    fn place_bets(&mut self, table: &mut Table) -> Result<(), TableError> {
        let bet = Bet::new(self.next_bet(), self.outcome.clone());
        self.bankroll.wager(table, bet)?;
        self.bankroll.end_round();
        Ok(())
    }

    fn win(&mut self, bet: &Bet) {
        self.bankroll.credit(bet.win_amount());
        self.reset();
    }

    fn lose(&mut self, _bet: &Bet) {
        self.loss_count += 1;
        self.bet_multiple = self.bet_multiple.saturating_mul(2);
    }

    fn playing(&self) -> bool {
        let next = self.next_bet();
        self.bankroll.playing() && self.bankroll.can_cover(next) && next <= self.limit
    }

    fn set_stake(&mut self, stake: u64) {
        self.bankroll.stake = stake;
        self.reset();
    }
}
