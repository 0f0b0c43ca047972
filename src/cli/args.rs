use crate::strategy::BatchConfig;
use crate::types::{Bitcoin, BITCOIN_SCALE};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Replay wallet operations from a CSV file
#[derive(Parser, Debug)]
#[command(name = "wallet-replay")]
#[command(about = "Replay deposit, withdraw and balance operations against a wallet", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing operation records
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Replay strategy
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sync",
        help = "Replay strategy: 'sync' for file order or 'async' for concurrent batches"
    )]
    pub strategy: StrategyType,

    /// Starting balance of the wallet
    #[arg(
        long = "initial-balance",
        value_name = "AMOUNT",
        default_value = "0",
        allow_negative_numbers = true,
        value_parser = parse_initial_balance,
        help = "Starting balance of the wallet, at most 8 decimal places (sign not validated)"
    )]
    pub initial_balance: Bitcoin,

    /// Number of operations per batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of operations per batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Number of runtime worker threads (async mode only)
    #[arg(
        long = "max-concurrent",
        value_name = "COUNT",
        help = "Number of worker threads (default: CPU cores)"
    )]
    pub max_concurrent_batches: Option<usize>,

    /// Log verbosity, overridden by RUST_LOG
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log level written to stderr: off, error, warn, info, debug or trace"
    )]
    pub log_level: LevelFilter,
}

/// Parse `--initial-balance`, refusing digits the summary could not print
fn parse_initial_balance(value: &str) -> Result<Bitcoin, String> {
    let amount: Bitcoin = value
        .parse()
        .map_err(|e| format!("invalid amount '{}': {}", value, e))?;
    if !amount.fits_scale() {
        return Err(format!(
            "amount '{}' has more than {} decimal places",
            value, BITCOIN_SCALE
        ));
    }
    Ok(amount)
}

/// Available replay strategies
#[derive(Clone, Debug, PartialEq, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

impl CliArgs {
    /// Create a BatchConfig from CLI arguments
    ///
    /// Missing values fall back to `BatchConfig::default()`; zero values are
    /// replaced with defaults by `BatchConfig::new`.
    pub fn to_batch_config(&self) -> BatchConfig {
        if self.batch_size.is_some() || self.max_concurrent_batches.is_some() {
            let default = BatchConfig::default();
            BatchConfig::new(
                self.batch_size.unwrap_or(default.batch_size()),
                self.max_concurrent_batches
                    .unwrap_or(default.max_concurrent_batches()),
            )
        } else {
            BatchConfig::default()
        }
    }
}
