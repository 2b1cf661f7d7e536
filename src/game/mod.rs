//! Running spins of the wheel against a player's bets.

use crate::error::GameError;
use crate::player::Player;
use crate::table::Table;
use crate::wheel::Wheel;

mod spin;

pub use spin::SpinResult;

/// A roulette game: a shared wheel and the table for the current spin.
#[derive(Debug)]
pub struct Game<'a> {
    wheel: &'a Wheel,
    table: Table,
}

impl<'a> Game<'a> {
    /// Creates a game using `wheel` and an empty `table`.
    #[must_use]
    pub const fn new(wheel: &'a Wheel, table: Table) -> Self {
        Self { wheel, table }
    }

    /// Returns the table.
    #[must_use]
    pub const fn table(&self) -> &Table {
        &self.table
    }

    /// Returns the wheel.
    #[must_use]
    pub const fn wheel(&self) -> &'a Wheel {
        self.wheel
    }

    /// Plays one spin for `player`.
    ///
    /// Returns `Ok(None)` without spinning if the player has stopped playing.
    /// Otherwise the player places bets, the wheel is spun, every bet is
    /// settled through [`Player::win`] or [`Player::lose`], and the table is
    /// cleared.
    ///
    /// # Errors
    ///
    /// Returns an error if the table rejects one of the player's bets. The
    /// bets already accepted this round are returned to the player's stake,
    /// the table is cleared, and the wheel is not spun.
    pub fn cycle<P: Player + ?Sized>(
        &mut self,
        player: &mut P,
    ) -> Result<Option<SpinResult>, GameError> {
        if !player.playing() {
            return Ok(None);
        }

        if let Err(err) = player.place_bets(&mut self.table) {
            tracing::debug!(%err, "bet rejected");
            for bet in self.table.clear() {
                player.bankroll_mut().credit(bet.amount);
            }
            return Err(err.into());
        }

        let position = self.wheel.spin();
        let bin = &self.wheel.bins()[position];

        let mut result = SpinResult {
            position,
            wins: 0,
            losses: 0,
            payout: 0,
            wagered: self.table.total(),
        };

        for bet in self.table.clear() {
            if bin.contains(&bet.outcome) {
                result.wins += 1;
                result.payout += bet.win_amount();
                player.win(&bet);
            } else {
                result.losses += 1;
                player.lose(&bet);
            }
        }

        tracing::debug!(
            position,
            wins = result.wins,
            losses = result.losses,
            stake = player.stake(),
            "spin settled"
        );

        Ok(Some(result))
    }
}
