//! Harness configuration.
//!
//! Benchmark parameters come from environment variables:
//!
//! - `SERVICE_BENCH_SEED`: record generator seed (default: current UNIX time in seconds)
//! - `SERVICE_BENCH_ITERATIONS`: searches timed per size (default: `300000`)
//! - `SERVICE_BENCH_SIZES`: comma-separated record counts
//!   (default: `100,1000,10000,50000,100000,200000,300000`)
//! - `SERVICE_BENCH_CSV`: benchmark output file (default: `benchmark.csv`)
use std::fmt;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

pub const SEED_VAR: &str = "SERVICE_BENCH_SEED";
pub const ITERATIONS_VAR: &str = "SERVICE_BENCH_ITERATIONS";
pub const SIZES_VAR: &str = "SERVICE_BENCH_SIZES";
pub const CSV_VAR: &str = "SERVICE_BENCH_CSV";

/// Error returned when loading configuration fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    InvalidValue { name: String, message: String },
}

impl ConfigError {
    fn invalid(name: &str, message: String) -> ConfigError {
        ConfigError::InvalidValue {
            name: name.to_string(),
            message,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { name, message } => {
                write!(f, "invalid value for {name}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Seed for record generation and key selection.
    pub seed: u64,
    /// Timed searches per structure and size.
    pub iterations: usize,
    /// Record counts to benchmark, in order.
    pub sizes: Vec<usize>,
    /// Where benchmark mode writes its CSV.
    pub csv_path: PathBuf,
}

impl BenchConfig {
    pub const DEFAULT_ITERATIONS: usize = 300_000;
    pub const DEFAULT_SIZES: [usize; 7] = [100, 1000, 10000, 50000, 100000, 200000, 300000];
    pub const DEFAULT_CSV_PATH: &'static str = "benchmark.csv";

    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to something unparseable, or if
    /// the iteration count or any size is zero.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = match lookup(SEED_VAR) {
            Some(value) => parse_number(SEED_VAR, &value)?,
            None => default_seed(),
        };

        let iterations = match lookup(ITERATIONS_VAR) {
            Some(value) => parse_count(ITERATIONS_VAR, &value)?,
            None => Self::DEFAULT_ITERATIONS,
        };

        let sizes = match lookup(SIZES_VAR) {
            Some(value) => parse_sizes(&value)?,
            None => Self::DEFAULT_SIZES.to_vec(),
        };

        let csv_path = lookup(CSV_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_CSV_PATH));

        Ok(Self {
            seed,
            iterations,
            sizes,
            csv_path,
        })
    }
}

fn default_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::invalid(name, format!("'{value}' is not a valid number")))
}

fn parse_count(name: &str, value: &str) -> Result<usize, ConfigError> {
    match parse_number(name, value)? {
        0 => Err(ConfigError::invalid(name, "must be greater than zero".to_string())),
        n => Ok(n),
    }
}

fn parse_sizes(value: &str) -> Result<Vec<usize>, ConfigError> {
    let sizes = value
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| parse_count(SIZES_VAR, part))
        .collect::<Result<Vec<_>, _>>()?;

    if sizes.is_empty() {
        return Err(ConfigError::invalid(SIZES_VAR, "no sizes given".to_string()));
    }

    Ok(sizes)
}

/// Which harness flow to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Interactive,
    Benchmark,
}

impl RunMode {
    /// Parse a menu choice (`1`/`2`) or a mode name.
    pub fn parse(choice: &str) -> Option<RunMode> {
        match choice.trim() {
            "1" | "interactive" => Some(RunMode::Interactive),
            "2" | "benchmark" => Some(RunMode::Benchmark),
            _ => None,
        }
    }
}
