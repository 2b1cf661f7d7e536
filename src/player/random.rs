use alloc::vec::Vec;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::bet::Bet;
use crate::error::TableError;
use crate::outcome::Outcome;
use crate::table::Table;
use crate::wheel::Wheel;

use super::{Bankroll, Player};

/// Bets the table minimum on an outcome picked at random from the wheel.
///
/// The RNG is supplied by the caller, so a seeded generator gives a
/// reproducible sequence of bets.
#[derive(Debug, Clone)]
pub struct PlayerRandom<R> {
    bankroll: Bankroll,
    amount: u64,
    outcomes: Vec<Outcome>,
    rng: R,
}

impl<R: Rng> PlayerRandom<R> {
    /// Creates a player choosing among every outcome on `wheel`.
    #[must_use]
    pub fn new(table: &Table, wheel: &Wheel, rng: R) -> Self {
        Self {
            bankroll: Bankroll::default(),
            amount: table.minimum().max(1),
            outcomes: wheel.all_outcomes(),
            rng,
        }
    }

    /// Returns the outcomes this player chooses from.
    #[must_use]
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }
}

impl<R: Rng> Player for PlayerRandom<R> {
    fn bankroll(&self) -> &Bankroll {
        &self.bankroll
    }

    fn bankroll_mut(&mut self) -> &mut Bankroll {
        &mut self.bankroll
    }

    fn place_bets(&mut self, table: &mut Table) -> Result<(), TableError> {
        if let Some(outcome) = self.outcomes.choose(&mut self.rng) {
            let bet = Bet::new(self.amount, outcome.clone());
            self.bankroll.wager(table, bet)?;
        }
        self.bankroll.end_round();
        Ok(())
    }

    fn playing(&self) -> bool {
        self.bankroll.playing() && self.bankroll.can_cover(self.amount)
    }
}
