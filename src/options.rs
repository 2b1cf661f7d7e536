//! Simulation configuration options.

use crate::table::Table;

/// Configuration options for a [`Simulator`](crate::Simulator).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use roulette_sim::SimulatorOptions;
///
/// let options = SimulatorOptions::default()
///     .with_stake(200)
///     .with_rounds(100)
///     .with_samples(10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatorOptions {
    /// Stake each session starts with.
    pub stake: u64,
    /// Maximum number of spins in a session.
    pub rounds: u32,
    /// Number of sessions to gather.
    pub samples: usize,
    /// Maximum total of all bets on the table.
    pub table_limit: u64,
    /// Smallest accepted single bet.
    pub table_minimum: u64,
}

impl Default for SimulatorOptions {
    fn default() -> Self {
        Self {
            stake: 100,
            rounds: 250,
            samples: 50,
            table_limit: 300,
            table_minimum: 1,
        }
    }
}

impl SimulatorOptions {
    /// Sets the initial stake.
    ///
    /// # Example
    ///
    /// ```
    /// use roulette_sim::SimulatorOptions;
    ///
    /// let options = SimulatorOptions::default().with_stake(500);
    /// assert_eq!(options.stake, 500);
    /// ```
    #[must_use]
    pub const fn with_stake(mut self, stake: u64) -> Self {
        self.stake = stake;
        self
    }

    /// Sets the number of rounds per session.
    #[must_use]
    pub const fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Sets the number of sessions to gather.
    #[must_use]
    pub const fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Sets the table limit.
    ///
    /// # Example
    ///
    /// ```
    /// use roulette_sim::SimulatorOptions;
    ///
    /// let options = SimulatorOptions::default().with_table_limit(1000);
    /// assert_eq!(options.table().limit(), 1000);
    /// ```
    #[must_use]
    pub const fn with_table_limit(mut self, limit: u64) -> Self {
        self.table_limit = limit;
        self
    }

    /// Sets the table minimum.
    #[must_use]
    pub const fn with_table_minimum(mut self, minimum: u64) -> Self {
        self.table_minimum = minimum;
        self
    }

    /// Creates an empty table with the configured limit and minimum.
    #[must_use]
    pub const fn table(&self) -> Table {
        Table::new(self.table_limit, self.table_minimum)
    }
}
