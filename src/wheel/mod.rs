//! The roulette wheel and its bins.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::outcome::Outcome;
use crate::sync::Mutex;

mod bin;
mod builder;

pub use bin::Bin;
pub use builder::{BinBuilder, FIVE_BET_NAME, RED_NUMBERS};

/// Number of bins on an American wheel.
pub const BIN_COUNT: usize = 38;

/// Position of the `00` bin.
pub const DOUBLE_ZERO: usize = 37;

/// Returns the label printed on a wheel position: `"00"` for [`DOUBLE_ZERO`],
/// the number itself otherwise.
#[must_use]
pub fn position_label(position: usize) -> String {
    if position == DOUBLE_ZERO {
        String::from("00")
    } else {
        position.to_string()
    }
}

/// Something with 38 bin positions that outcomes can be added to.
///
/// [`BinBuilder`] populates any implementor, which lets callers record or
/// inspect what a build produces without a full [`Wheel`].
pub trait OutcomeSink {
    /// Adds `outcome` to the bin at `position`.
    fn add_outcome(&mut self, position: usize, outcome: Outcome);
}

/// A 38-bin American roulette wheel.
///
/// The wheel is created empty, populated once, and read-only afterwards.
/// Spinning draws from a seeded RNG held behind a mutex, so a shared
/// `&Wheel` is enough to run a game.
pub struct Wheel {
    /// Bins indexed by position; `00` is at [`DOUBLE_ZERO`].
    bins: Vec<Bin>,
    /// Every outcome added to the wheel, by name.
    outcomes: HashMap<String, Outcome>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Wheel {
    /// Creates a wheel of empty bins with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            bins: alloc::vec![Bin::new(); BIN_COUNT],
            outcomes: HashMap::new(),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Creates a wheel with the given seed and populates it with [`BinBuilder`].
    ///
    /// # Example
    ///
    /// ```
    /// use roulette_sim::{Outcome, Wheel};
    ///
    /// let wheel = Wheel::populated(7);
    /// let bin = wheel.get(1).unwrap();
    /// assert!(bin.contains(&Outcome::new("Red", 1)));
    /// ```
    #[must_use]
    pub fn populated(seed: u64) -> Self {
        let mut wheel = Self::new(seed);
        BinBuilder::new().build_bins(&mut wheel);
        wheel
    }

    /// Returns the bin at `position`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Bin> {
        self.bins.get(position)
    }

    /// Returns all bins in position order.
    #[must_use]
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Looks up an outcome by name.
    #[must_use]
    pub fn outcome(&self, name: &str) -> Option<&Outcome> {
        self.outcomes.get(name)
    }

    /// Returns every distinct outcome on the wheel, sorted.
    #[must_use]
    pub fn all_outcomes(&self) -> Vec<Outcome> {
        let mut outcomes: Vec<Outcome> = self.outcomes.values().cloned().collect();
        outcomes.sort();
        outcomes
    }

    /// Spins the wheel and returns the winning position.
    pub fn spin(&self) -> usize {
        self.rng.lock().random_range(0..BIN_COUNT)
    }

    /// Spins the wheel and returns the winning bin.
    pub fn choose(&self) -> &Bin {
        &self.bins[self.spin()]
    }
}

impl OutcomeSink for Wheel {
    /// # Panics
    ///
    /// Panics if `position` is not below [`BIN_COUNT`].
    fn add_outcome(&mut self, position: usize, outcome: Outcome) {
        assert!(
            position < BIN_COUNT,
            "bin position {position} is outside the wheel"
        );
        self.bins[position] = self.bins[position].with(outcome.clone());
        self.outcomes
            .entry(outcome.name().to_string())
            .or_insert(outcome);
    }
}

impl core::fmt::Debug for Wheel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Wheel")
            .field("bins", &self.bins)
            .field("outcomes", &self.outcomes.len())
            .finish_non_exhaustive()
    }
}
