use clap::builder::RangedU64ValueParser;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Range-maximum queries over a random array",
    long_about = None
)]
pub struct Args {
    /// Number of values in the array.
    ///
    /// If unset, the size is read from stdin.
    pub size: Option<usize>,

    /// Seed for the random array and the random query ranges.
    ///
    /// If unset, a seed is drawn from entropy and logged.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Values are drawn from 0 up to, but excluding, this bound.
    #[arg(
        short,
        long,
        default_value_t = 1000,
        value_parser = clap::value_parser!(i64).range(1..)
    )]
    pub max_value: i64,

    /// Number of random ranges checked against the brute force.
    #[arg(short, long, default_value_t = 1000)]
    pub trials: usize,

    /// Queries per method in the timing comparison (only run for arrays of at least 100 values).
    ///
    /// Defaults to ten per value, capped at 100000.
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub perf_queries: Option<usize>,

    /// Print the array (arrays of at most 20 values).
    #[arg(long)]
    pub show_array: bool,

    /// Print the tree structure (arrays of at most 10 values).
    #[arg(long)]
    pub show_tree: bool,

    /// Answer ranges typed on stdin until `-1 -1`.
    #[arg(short, long)]
    pub interactive: bool,

    /// Write the trial report as JSON to this path.
    #[arg(long)]
    pub report: Option<PathBuf>,
}

pub const SHOW_ARRAY_LIMIT: usize = 20;
pub const SHOW_TREE_LIMIT: usize = 10;
pub const PERF_MIN_SIZE: usize = 100;
const PERF_QUERIES_CAP: usize = 100_000;

impl Args {
    pub fn perf_queries_for(&self, size: usize) -> usize {
        self.perf_queries
            .unwrap_or_else(|| (size * 10).min(PERF_QUERIES_CAP))
    }
}
