use crate::bet::Bet;
use crate::error::TableError;
use crate::outcome::Outcome;
use crate::table::Table;

use super::{Bankroll, Player, black};

/// Bets on black following the Fibonacci sequence: each loss moves one step
/// forward (1, 1, 2, 3, 5, ...), a win goes back to the start.
///
/// Amounts are in units of the table minimum.
#[derive(Debug, Clone)]
pub struct PlayerFibonacci {
    bankroll: Bankroll,
    outcome: Outcome,
    base: u64,
    limit: u64,
    /// Most recent step of the sequence.
    recent: u64,
    /// Step before `recent`.
    previous: u64,
    /// Units to bet next round.
    bet_units: u64,
}

impl PlayerFibonacci {
    /// Creates a player whose unit is the minimum of `table`.
    #[must_use]
    pub fn new(table: &Table) -> Self {
        Self {
            bankroll: Bankroll::default(),
            outcome: black(),
            base: table.minimum().max(1),
            limit: table.limit(),
            recent: 1,
            previous: 0,
            bet_units: 1,
        }
    }

    /// Returns the amount of the next bet.
    #[must_use]
    pub const fn next_bet(&self) -> u64 {
        self.base.saturating_mul(self.bet_units)
    }

    /// Returns `(recent, previous)`.
    #[must_use]
    pub const fn sequence(&self) -> (u64, u64) {
        (self.recent, self.previous)
    }

    const fn reset(&mut self) {
        self.recent = 1;
        self.previous = 0;
        self.bet_units = 1;
    }
}

impl Player for PlayerFibonacci {
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
        let next = self.recent.saturating_add(self.previous);
        self.previous = self.recent;
        self.recent = next;
        self.bet_units = next;
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
