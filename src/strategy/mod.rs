//! Replay strategy module
//!
//! This module defines the Strategy pattern for complete replay pipelines,
//! covering both CSV parsing and wallet processing. This allows different
//! implementations (sequential, concurrent batches) to be selected at runtime.

use crate::cli::StrategyType;
use crate::types::{Bitcoin, ReplayError, ReplaySummary};
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Processing strategy trait for complete replay pipelines
///
/// A strategy reads operation records from a CSV file, applies them to a
/// fresh wallet created with `initial`, writes the summary to `output` and
/// returns it.
pub trait ProcessingStrategy: Send + Sync {
    /// Replay `input_path` against a new wallet and write the summary
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file cannot be opened
    /// - The runtime cannot be started (async strategy)
    /// - The summary cannot be written
    ///
    /// Malformed records and rejected operations are logged and counted, and
    /// never abort the replay.
    fn process(
        &self,
        input_path: &Path,
        initial: Bitcoin,
        output: &mut dyn Write,
    ) -> Result<ReplaySummary, ReplayError>;
}

/// Create a processing strategy based on the specified strategy type
///
/// `config` only applies to the async strategy; `None` means defaults.
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<BatchConfig>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config))
        }
    }
}
