use std::path::PathBuf;
use std::time::Duration;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use clap::Parser;
use thiserror::Error;
use tracing::info;

use crate::grid::Grid;
use crate::pattern;
use crate::pattern::PatternError;
use crate::rule_set::RuleError;
use crate::rule_set::RuleSet;
use crate::seed;

/// Conway's Game of Life in the terminal
#[derive(Parser, Debug, Clone)]
#[command(name = "lifeterm", version)]
pub struct Args {
    /// Width of the grid, ignored if an input file is provided
    #[arg(long, default_value_t = 40)]
    pub width: usize,

    /// Height of the grid, ignored if an input file is provided
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Path to a plaintext pattern file for the initial state
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Seed for random generation. Defaults to one taken from the clock.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Milliseconds between generations
    #[arg(long, default_value_t = 250)]
    pub tick_ms: u64,

    /// Birth/survival rule, e.g. B36/S23
    #[arg(long, default_value = "B3/S23")]
    pub rule: String,

    /// Write logs here. Filtered by `RUST_LOG`, `info` by default.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid must be at least 1x1, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("tick period must be positive")]
    InvalidTickPeriod,

    #[error("invalid rule: {0}")]
    Rule(#[from] RuleError),
}

/// Where the first generation comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Pattern(PathBuf),
    Random {
        width: usize,
        height: usize,
        seed: u64,
    },
}

/// Startup settings, checked once and then only read
#[derive(Debug, Clone)]
pub struct Config {
    pub source: Source,
    pub tick: Duration,
    pub rules: RuleSet,
}

impl Config {
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let source = match &args.input {
            Some(path) => Source::Pattern(path.clone()),
            None => {
                let (width, height) = (args.width, args.height);
                if width == 0 || height == 0 {
                    return Err(ConfigError::InvalidDimensions { width, height });
                }

                let seed = args.seed.unwrap_or_else(clock_seed);
                info!(seed, "using seed");

                Source::Random {
                    width,
                    height,
                    seed,
                }
            }
        };

        if args.tick_ms == 0 {
            return Err(ConfigError::InvalidTickPeriod);
        }

        Ok(Self {
            source,
            tick: Duration::from_millis(args.tick_ms),
            rules: args.rule.parse()?,
        })
    }

    /// Build the first generation. Reads the pattern file, if there is one.
    pub fn initial_grid(&self) -> Result<Grid, PatternError> {
        match &self.source {
            Source::Pattern(path) => pattern::read_pattern(path),
            &Source::Random {
                width,
                height,
                seed,
            } => Ok(seed::random_grid(width, height, seed)),
        }
    }
}

fn clock_seed() -> u64 {
    // a clock before 1970 just gets seed 0
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos() as u64)
}
