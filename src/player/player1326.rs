use crate::bet::Bet;
use crate::error::TableError;
use crate::outcome::Outcome;
use crate::table::Table;

use super::{Bankroll, Player, black};

/// Position in the 1-3-2-6 betting cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Player1326State {
    /// No wins yet; bet 1 unit.
    #[default]
    NoWin,
    /// One win; bet 3 units.
    OneWin,
    /// Two wins; bet 2 units.
    TwoWins,
    /// Three wins; bet 6 units.
    ThreeWins,
}

impl Player1326State {
    /// Returns the number of units bet in this state.
    #[must_use]
    pub const fn bet_multiple(self) -> u64 {
        match self {
            Self::NoWin => 1,
            Self::OneWin => 3,
            Self::TwoWins => 2,
            Self::ThreeWins => 6,
        }
    }

    /// Returns the state after a win. A fourth win completes the cycle.
    #[must_use]
    pub const fn next_won(self) -> Self {
        match self {
            Self::NoWin => Self::OneWin,
            Self::OneWin => Self::TwoWins,
            Self::TwoWins => Self::ThreeWins,
            Self::ThreeWins => Self::NoWin,
        }
    }

    /// Returns the state after a loss.
    #[must_use]
    pub const fn next_lost(self) -> Self {
        Self::NoWin
    }
}

/// Bets on black following the 1-3-2-6 system.
#[derive(Debug, Clone)]
pub struct Player1326 {
    bankroll: Bankroll,
    outcome: Outcome,
    base: u64,
    limit: u64,
    state: Player1326State,
}

impl Player1326 {
    /// Creates a player whose unit is the minimum of `table`.
    #[must_use]
    pub fn new(table: &Table) -> Self {
        Self {
            bankroll: Bankroll::default(),
            outcome: black(),
            base: table.minimum().max(1),
            limit: table.limit(),
            state: Player1326State::NoWin,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> Player1326State {
        self.state
    }

    /// Returns the amount of the next bet.
    #[must_use]
    pub const fn next_bet(&self) -> u64 {
        self.base.saturating_mul(self.state.bet_multiple())
    }
}

impl Player for Player1326 {
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
        self.state = self.state.next_won();
    }

    fn lose(&mut self, _bet: &Bet) {
        self.state = self.state.next_lost();
    }

    fn playing(&self) -> bool {
        let next = self.next_bet();
        self.bankroll.playing() && self.bankroll.can_cover(next) && next <= self.limit
    }

    fn set_stake(&mut self, stake: u64) {
        self.bankroll.stake = stake;
        self.state = Player1326State::NoWin;
    }
}
