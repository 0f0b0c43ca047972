//! Asynchronous batch processing strategy
//!
//! Replays operations in batches on a multi-threaded tokio runtime.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── BatchConfig (batch_size, max_concurrent_batches)
//!     ├── AsyncReader (batch CSV reading)
//!     └── BatchProcessor (one task per operation)
//!         └── AsyncOperationEngine
//!             └── Arc<AsyncWallet>
//! ```
//!
//! # Ordering
//!
//! Batches are processed one after another. Operations inside a batch run
//! concurrently, so when a batch mixes withdrawals with too little balance to
//! cover them all, which ones get rejected depends on scheduling. The final
//! balance is always that of some serialization of each batch.

use crate::core::r#async::{AsyncOperationEngine, AsyncWallet, BatchProcessor};
use crate::io::async_reader::AsyncReader;
use crate::io::csv_format::write_summary_csv;
use crate::strategy::ProcessingStrategy;
use crate::types::{Bitcoin, ReplayError, ReplaySummary};
use std::io::{ErrorKind, Write};
use std::path::Path;
use std::sync::Arc;

/// Configuration for batch processing
///
/// Both values are always non-zero: the only ways to build one are
/// `default()` and `new()`, which replaces zeros with the defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchConfig {
    batch_size: usize,
    max_concurrent_batches: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            max_concurrent_batches: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    /// Create a new BatchConfig, replacing zero values with defaults
    pub fn new(batch_size: usize, max_concurrent_batches: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            tracing::warn!(
                "Invalid batch_size ({}), using default ({})",
                batch_size,
                default.batch_size
            );
            default.batch_size
        } else {
            batch_size
        };

        let max_concurrent_batches = if max_concurrent_batches == 0 {
            tracing::warn!(
                "Invalid max_concurrent_batches ({}), using default ({})",
                max_concurrent_batches,
                default.max_concurrent_batches
            );
            default.max_concurrent_batches
        } else {
            max_concurrent_batches
        };

        Self {
            batch_size,
            max_concurrent_batches,
        }
    }

    /// Number of operations per batch
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of runtime worker threads
    pub fn max_concurrent_batches(&self) -> usize {
        self.max_concurrent_batches
    }
}

/// Asynchronous batch processing strategy
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    config: BatchConfig,
}

impl AsyncProcessingStrategy {
    /// Create a new AsyncProcessingStrategy with the specified configuration
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    fn process(
        &self,
        input_path: &Path,
        initial: Bitcoin,
        output: &mut dyn Write,
    ) -> Result<ReplaySummary, ReplayError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.max_concurrent_batches)
            .build()
            .map_err(|e| ReplayError::Runtime {
                message: format!("Failed to create tokio runtime: {}", e),
            })?;

        let summary = runtime.block_on(async {
            let wallet = Arc::new(AsyncWallet::new(initial));
            let engine = AsyncOperationEngine::new(Arc::clone(&wallet));
            let processor = BatchProcessor::new(engine);

            let file = tokio::fs::File::open(input_path)
                .await
                .map_err(|e| match e.kind() {
                    ErrorKind::NotFound => ReplayError::FileNotFound {
                        path: input_path.display().to_string(),
                    },
                    _ => ReplayError::Io {
                        message: format!("Failed to open file '{}': {}", input_path.display(), e),
                    },
                })?;

            // csv-async reads through the futures AsyncRead trait
            let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);
            let mut reader = AsyncReader::new(compat_file);

            tracing::info!(
                path = %input_path.display(),
                %initial,
                batch_size = self.config.batch_size,
                workers = self.config.max_concurrent_batches,
                "Replaying operations in concurrent batches"
            );

            let mut summary = ReplaySummary::default();
            loop {
                let batch = reader.read_batch(self.config.batch_size).await;
                if batch.is_empty() {
                    break;
                }

                for processed in processor.process_batch(batch).await {
                    if let Err(e) = &processed.result {
                        tracing::debug!(record = ?processed.record, "Operation rejected: {e}");
                    }
                    summary.record(&processed.result);
                }
            }

            summary.balance = wallet.balance().await;
            Ok::<_, ReplayError>(summary)
        })?;

        write_summary_csv(&summary, output)?;

        Ok(summary)
    }
}
