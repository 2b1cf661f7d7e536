//! An American roulette simulator with optional `no_std` support.
//!
//! The crate provides a [`Wheel`] populated by [`BinBuilder`] with every
//! winning [`Outcome`] for each of its 38 bins, a [`Table`] that accepts
//! [`Bet`]s, several [`Player`] betting strategies, and a [`Simulator`] that
//! runs repeated sessions and summarizes them with [`IntegerStatistics`].
//!
//! # Example
//!
//! ```no_run
//! use roulette_sim::{Passenger57, Simulator, SimulatorOptions, Wheel};
//!
//! let wheel = Wheel::populated(42);
//! let simulator = Simulator::new(&wheel, SimulatorOptions::default());
//! let summary = simulator.gather(Passenger57::new);
//! let _ = summary;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bet;
pub mod error;
pub mod game;
pub mod options;
pub mod outcome;
pub mod player;
pub mod simulator;
pub mod statistics;
pub mod table;
pub mod wheel;
mod sync;

// Re-export main types
pub use bet::Bet;
pub use error::{GameError, TableError};
pub use game::{Game, SpinResult};
pub use options::SimulatorOptions;
pub use outcome::Outcome;
pub use player::{
    Bankroll, Player, Player1326, Player1326State, PlayerFibonacci, PlayerMartingale,
    PlayerRandom, Passenger57,
};
pub use simulator::{SessionSummary, Simulator};
pub use statistics::IntegerStatistics;
pub use table::Table;
pub use wheel::{BIN_COUNT, Bin, BinBuilder, DOUBLE_ZERO, OutcomeSink, Wheel};
