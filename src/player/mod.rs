//! Players and their betting strategies.
//!
//! Every strategy implements [`Player`] and owns a [`Bankroll`] that tracks
//! its stake and the rounds it has left. Strategies share no state.

use crate::bet::Bet;
use crate::error::TableError;
use crate::outcome::{EVEN_MONEY_ODDS, Outcome};
use crate::table::Table;

mod fibonacci;
mod martingale;
mod passenger57;
mod player1326;
mod random;

pub use fibonacci::PlayerFibonacci;
pub use martingale::PlayerMartingale;
pub use passenger57::Passenger57;
pub use player1326::{Player1326, Player1326State};
pub use random::PlayerRandom;

/// The outcome the fixed-outcome strategies bet on.
pub(crate) fn black() -> Outcome {
    Outcome::new("Black", EVEN_MONEY_ODDS)
}

/// A player's stake and remaining rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bankroll {
    /// Money not currently on the table.
    pub stake: u64,
    /// Rounds the player will still play.
    pub rounds_to_go: u32,
}

impl Bankroll {
    /// Creates a bankroll.
    #[must_use]
    pub const fn new(stake: u64, rounds_to_go: u32) -> Self {
        Self {
            stake,
            rounds_to_go,
        }
    }

    /// Returns whether the player has both money and rounds left.
    #[must_use]
    pub const fn playing(&self) -> bool {
        self.rounds_to_go > 0 && self.stake > 0
    }

    /// Returns whether the stake covers a bet of `amount`.
    #[must_use]
    pub const fn can_cover(&self, amount: u64) -> bool {
        self.stake >= amount
    }

    /// Places `bet` on the table and takes its amount out of the stake.
    ///
    /// # Errors
    ///
    /// Returns the table's error if it rejects the bet; the stake is unchanged.
    pub fn wager(&mut self, table: &mut Table, bet: Bet) -> Result<(), TableError> {
        let amount = bet.amount;
        table.place_bet(bet)?;
        self.stake = self.stake.saturating_sub(amount);
        Ok(())
    }

    /// Adds `amount` to the stake.
    pub const fn credit(&mut self, amount: u64) {
        self.stake = self.stake.saturating_add(amount);
    }

    /// Counts one round as played.
    pub const fn end_round(&mut self) {
        self.rounds_to_go = self.rounds_to_go.saturating_sub(1);
    }
}

/// A roulette player.
///
/// Implementors decide what to bet in [`Player::place_bets`] and how to react
/// to results in [`Player::win`] and [`Player::lose`]. Stake bookkeeping lives
/// in the player's [`Bankroll`].
pub trait Player {
    /// Returns the player's bankroll.
    fn bankroll(&self) -> &Bankroll;

    /// Returns the player's bankroll mutably.
    fn bankroll_mut(&mut self) -> &mut Bankroll;

    /// Places this round's bets on the table.
    ///
    /// # Errors
    ///
    /// Returns an error if the table rejects a bet.
    fn place_bets(&mut self, table: &mut Table) -> Result<(), TableError>;

    /// Called for each of the player's bets that won. Credits the winnings.
    fn win(&mut self, bet: &Bet) {
        self.bankroll_mut().credit(bet.win_amount());
    }

    /// Called for each of the player's bets that lost.
    fn lose(&mut self, _bet: &Bet) {}

    /// Returns whether the player will play another round.
    fn playing(&self) -> bool {
        self.bankroll().playing()
    }

    /// Returns the current stake.
    fn stake(&self) -> u64 {
        self.bankroll().stake
    }

    /// Sets the stake at the start of a session.
    fn set_stake(&mut self, stake: u64) {
        self.bankroll_mut().stake = stake;
    }

    /// Sets the number of rounds to play in a session.
    fn set_rounds(&mut self, rounds: u32) {
        self.bankroll_mut().rounds_to_go = rounds;
    }
}
