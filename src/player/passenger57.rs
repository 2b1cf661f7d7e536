use crate::bet::Bet;
use crate::error::TableError;
use crate::outcome::Outcome;
use crate::table::Table;

use super::{Bankroll, Player, black};

/// Bets the table minimum on black, every round.
#[derive(Debug, Clone)]
pub struct Passenger57 {
    bankroll: Bankroll,
    outcome: Outcome,
    amount: u64,
}

impl Passenger57 {
    /// Creates a player betting the minimum of `table`.
    #[must_use]
    pub fn new(table: &Table) -> Self {
        Self {
            bankroll: Bankroll::default(),
            outcome: black(),
            amount: table.minimum().max(1),
        }
    }
}

impl Player for Passenger57 {
    fn bankroll(&self) -> &Bankroll {
        &self.bankroll
    }

    fn bankroll_mut(&mut self) -> &mut Bankroll {
        &mut self.bankroll
    }

    fn place_bets(&mut self, table: &mut Table) -> Result<(), TableError> {
        self.bankroll
            .wager(table, Bet::new(self.amount, self.outcome.clone()))?;
        self.bankroll.end_round();
        Ok(())
    }

    fn playing(&self) -> bool {
        self.bankroll.playing() && self.bankroll.can_cover(self.amount)
    }
}
