//! Synchronous processing strategy
//!
//! Replays operations one at a time, in file order, against a `Wallet`.
//! The strategy only orchestrates:
//! - CSV parsing is done by `SyncReader`
//! - Record handling is done by `OperationEngine`
//! - Output is done by `csv_format::write_summary_csv`
//!
//! Because the order is the file order, the final balance is fully
//! deterministic, including which withdrawals are rejected.

use crate::core::{OperationEngine, Wallet};
use crate::io::csv_format::write_summary_csv;
use crate::io::sync_reader::SyncReader;
use crate::strategy::ProcessingStrategy;
use crate::types::{Bitcoin, Outcome, ReplayError, ReplaySummary};
use std::io::Write;
use std::path::Path;

/// Synchronous, single-threaded processing strategy
///
/// # Examples
///
/// ```no_run
/// use rust_wallet::strategy::{ProcessingStrategy, SyncProcessingStrategy};
/// use rust_wallet::Bitcoin;
/// use std::path::Path;
/// use std::io;
///
/// let strategy = SyncProcessingStrategy;
/// let mut output = io::stdout();
///
/// strategy
///     .process(Path::new("operations.csv"), Bitcoin::ZERO, &mut output)
///     .expect("Replay failed");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyncProcessingStrategy;

impl ProcessingStrategy for SyncProcessingStrategy {
    fn process(
        &self,
        input_path: &Path,
        initial: Bitcoin,
        output: &mut dyn Write,
    ) -> Result<ReplaySummary, ReplayError> {
        let wallet = Wallet::new(initial);
        let mut engine = OperationEngine::new(&wallet);

        let reader = SyncReader::new(input_path)?;
        tracing::info!(path = %input_path.display(), %initial, "Replaying operations sequentially");

        for result in reader {
            match result {
                Ok(record) => match engine.process(&record) {
                    Ok(Outcome::Read(balance)) => tracing::debug!(%balance, "Balance read"),
                    Ok(_) => {}
                    Err(e) => tracing::debug!(?record, "Operation rejected: {e}"),
                },
                Err(e) => tracing::warn!("Skipping record: {e}"),
            }
        }

        let summary = engine.summary();
        write_summary_csv(&summary, output)?;

        Ok(summary)
    }
}
