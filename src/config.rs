//! Command-line options and runtime limits

use crate::dataset::DataOrder;
use clap::{Args, Parser, Subcommand};

/// Smallest array the visualizer will race
pub const MIN_SIZE: usize = 20;
/// Largest array the visualizer will race
pub const MAX_SIZE: usize = 200;
/// Size change per keypress
pub const SIZE_STEP: usize = 10;
pub const DEFAULT_SIZE: usize = 80;

pub const MIN_SPEED: u32 = 1;
pub const MAX_SPEED: u32 = 2000;
/// Steps-per-second change per keypress
pub const SPEED_STEP: u32 = 40;
pub const DEFAULT_SPEED: u32 = 180;

/// Frames drawn per second while racing
pub const FRAME_RATE: u32 = 60;
/// Upper bound on resumptions per engine per frame
pub const MAX_STEPS_PER_FRAME: usize = 400;

/// Largest value placed in a visualizer dataset
pub const MAX_VALUE: i64 = 3000;
/// Largest value placed in a benchmark dataset
pub const BENCH_MAX_VALUE: i64 = 100_000;

#[derive(Debug, Parser)]
#[command(
    name = "sortty",
    about = "Bubble, quick, merge and radix sort racing side by side",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Number of elements to sort (20..=200)
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    pub size: usize,

    /// Initial arrangement of the data
    #[arg(long, value_enum, default_value_t = DataOrder::Random)]
    pub order: DataOrder,

    /// Steps per second for every engine (1..=2000)
    #[arg(long, default_value_t = DEFAULT_SPEED)]
    pub speed: u32,

    /// Seed for data generation and pivot choice
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Time the plain sorting routines instead of visualizing
    Bench(BenchArgs),
}

#[derive(Debug, Clone, Args)]
pub struct BenchArgs {
    /// Array sizes to time
    #[arg(long, value_delimiter = ',', default_values_t = [100, 300, 1000, 3000])]
    pub sizes: Vec<usize>,

    /// Timed runs per routine; the fastest is reported
    #[arg(long, default_value_t = 3)]
    pub repeat: usize,

    /// Seed for data generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Settings of a race, always within the limits above
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaceConfig {
    pub size: usize,
    pub order: DataOrder,
    pub steps_per_second: u32,
    pub seed: Option<u64>,
}

impl RaceConfig {
    pub fn new(size: usize, order: DataOrder, steps_per_second: u32, seed: Option<u64>) -> Self {
        RaceConfig {
            size: clamp_size(size),
            order,
            steps_per_second: clamp_speed(steps_per_second),
            seed,
        }
    }

    pub fn from_cli(cli: &Cli) -> Self {
        Self::new(cli.size, cli.order, cli.speed, cli.seed)
    }
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, DataOrder::Random, DEFAULT_SPEED, None)
    }
}

pub fn clamp_size(size: usize) -> usize {
    size.clamp(MIN_SIZE, MAX_SIZE)
}

pub fn clamp_speed(steps_per_second: u32) -> u32 {
    steps_per_second.clamp(MIN_SPEED, MAX_SPEED)
}
