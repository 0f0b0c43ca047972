//! Wallet replay CLI
//!
//! Replays wallet operations from a CSV file and prints a summary.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- operations.csv > summary.csv
//! cargo run -- --initial-balance 1000 operations.csv
//! cargo run -- --strategy async --batch-size 500 --max-concurrent 8 operations.csv
//! RUST_LOG=debug cargo run -- operations.csv
//! ```
//!
//! Input columns are `type,amount` where type is `deposit`, `withdraw`
//! (or `withdrawal`) or `balance`. The summary CSV goes to stdout; logs go to
//! stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, file not readable, output failure, etc.)

use rust_wallet::{cli, logging, strategy};
use std::process;

fn main() {
    let args = cli::parse_args();
    logging::init(args.log_level);

    let strategy = {
        let config = if matches!(args.strategy, cli::StrategyType::Async) {
            Some(args.to_batch_config())
        } else {
            None
        };
        strategy::create_strategy(args.strategy.clone(), config)
    };

    let mut output = std::io::stdout();
    match strategy.process(&args.input_file, args.initial_balance, &mut output) {
        Ok(summary) => tracing::info!(
            balance = %summary.balance,
            operations = summary.operations(),
            rejected = summary.rejected,
            "Replay finished"
        ),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
