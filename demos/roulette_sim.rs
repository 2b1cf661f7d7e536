//! CLI roulette simulation example.

#![allow(clippy::missing_docs_in_private_items)]

use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use roulette_sim::{
    GameError, IntegerStatistics, Passenger57, Player1326, PlayerFibonacci, PlayerMartingale,
    PlayerRandom, SessionSummary, Simulator, SimulatorOptions, Wheel,
};
use tracing::{error, info};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    Passenger57,
    Martingale,
    Fibonacci,
    Random,
    OneThreeTwoSix,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Roulette betting strategy simulation")]
struct Args {
    #[arg(short, long, value_enum, default_value = "martingale")]
    strategy: Strategy,

    #[arg(long, default_value = "42")]
    seed: u64,

    #[arg(long, default_value = "100")]
    stake: u64,

    #[arg(long, default_value = "250")]
    rounds: u32,

    #[arg(long, default_value = "50")]
    samples: usize,

    #[arg(long, default_value = "300")]
    limit: u64,

    #[arg(long, default_value = "1")]
    minimum: u64,

    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let options = SimulatorOptions::default()
        .with_stake(args.stake)
        .with_rounds(args.rounds)
        .with_samples(args.samples)
        .with_table_limit(args.limit)
        .with_table_minimum(args.minimum);

    let wheel = Wheel::populated(args.seed);
    let simulator = Simulator::new(&wheel, options);
    info!(strategy = ?args.strategy, seed = args.seed, "starting simulation");

    match run(&simulator, &wheel, args.strategy, args.seed) {
        Ok(summary) => {
            print_statistics("Maximum stake", &summary.maxima);
            print_statistics("Duration", &summary.durations);
        }
        Err(err) => error!(%err, "simulation failed"),
    }
}

fn run(
    simulator: &Simulator<'_>,
    wheel: &Wheel,
    strategy: Strategy,
    seed: u64,
) -> Result<SessionSummary, GameError> {
    match strategy {
        Strategy::Passenger57 => simulator.gather(Passenger57::new),
        Strategy::Martingale => simulator.gather(PlayerMartingale::new),
        Strategy::Fibonacci => simulator.gather(PlayerFibonacci::new),
        Strategy::OneThreeTwoSix => simulator.gather(Player1326::new),
        Strategy::Random => {
            let mut session = 0;
            simulator.gather(|table| {
                session += 1;
                let rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(session));
                PlayerRandom::new(table, wheel, rng)
            })
        }
    }
}

fn print_statistics(label: &str, stats: &IntegerStatistics) {
    let mean = stats.mean().unwrap_or_default();
    let stdev = stats.stdev().unwrap_or_default();
    println!("{label}: mean {mean:.3}, stdev {stdev:.3} over {} sessions", stats.len());
}
