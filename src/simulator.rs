//! Repeated sessions and their summary.

use alloc::vec::Vec;

use crate::error::GameError;
use crate::game::Game;
use crate::options::SimulatorOptions;
use crate::player::Player;
use crate::statistics::IntegerStatistics;
use crate::table::Table;
use crate::wheel::Wheel;

/// Maximum stake and duration of every gathered session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Highest stake reached in each session.
    pub maxima: IntegerStatistics,
    /// Number of spins played in each session.
    pub durations: IntegerStatistics,
}

/// Runs sessions of a player strategy on a shared wheel.
#[derive(Debug)]
pub struct Simulator<'a> {
    wheel: &'a Wheel,
    options: SimulatorOptions,
}

impl<'a> Simulator<'a> {
    /// Creates a simulator.
    #[must_use]
    pub const fn new(wheel: &'a Wheel, options: SimulatorOptions) -> Self {
        Self { wheel, options }
    }

    /// Returns the options.
    #[must_use]
    pub const fn options(&self) -> &SimulatorOptions {
        &self.options
    }

    /// Plays one session and returns the stake after each spin.
    ///
    /// The player's stake and rounds are reset from the options first. The
    /// session ends when the player stops playing.
    ///
    /// # Errors
    ///
    /// Returns an error if the table rejects one of the player's bets.
    pub fn session<P: Player + ?Sized>(&self, player: &mut P) -> Result<Vec<u64>, GameError> {
        player.set_stake(self.options.stake);
        player.set_rounds(self.options.rounds);

        let mut game = Game::new(self.wheel, self.options.table());
        let mut stakes = Vec::new();

        while game.cycle(player)?.is_some() {
            stakes.push(player.stake());
        }

        tracing::debug!(
            spins = stakes.len(),
            final_stake = player.stake(),
            "session finished"
        );
        Ok(stakes)
    }

    /// Plays the configured number of sessions, each with a fresh player from
    /// `new_player`, and collects their maxima and durations.
    ///
    /// A session in which the player never bets records the initial stake as
    /// its maximum and a duration of zero.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a session.
    pub fn gather<P, F>(&self, mut new_player: F) -> Result<SessionSummary, GameError>
    where
        P: Player,
        F: FnMut(&Table) -> P,
    {
        let mut summary = SessionSummary::default();
        let table = self.options.table();

        for _ in 0..self.options.samples {
            let mut player = new_player(&table);
            let stakes = self.session(&mut player)?;

            let maximum = stakes
                .iter()
                .copied()
                .max()
                .unwrap_or(self.options.stake);
            summary.maxima.push(maximum);
            summary.durations.push(stakes.len() as u64);
        }

        Ok(summary)
    }
}
