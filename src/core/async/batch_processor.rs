//! Concurrent batch processing for async replay
//!
//! This module provides the `BatchProcessor` struct, which runs every
//! operation of a batch as its own tokio task against a shared wallet.
//!
//! # Ordering
//!
//! Operations inside one batch race each other; the wallet's lock makes the
//! final balance equal to some serialization of them. Callers that need
//! batch-to-batch ordering await `process_batch` before submitting the next
//! batch.
//!
//! # Architecture
//!
//! ```text
//! BatchProcessor
//!     └── AsyncOperationEngine  (cloned into each task)
//!             └── Arc<AsyncWallet>
//! ```

use super::AsyncOperationEngine;
use crate::types::{OperationRecord, Outcome, WalletError};

/// Result of processing a single operation
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingResult {
    /// The operation record that was processed
    pub record: OperationRecord,

    /// The result of processing (success or rejection)
    pub result: Result<Outcome, WalletError>,
}

/// Runs batches of operations concurrently
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    engine: AsyncOperationEngine,
}

impl BatchProcessor {
    /// Create a new BatchProcessor
    pub fn new(engine: AsyncOperationEngine) -> Self {
        Self { engine }
    }

    /// Process a batch of operations concurrently
    ///
    /// Spawns one task per record and waits for all of them. Rejected
    /// operations are reported in the returned results and never stop the
    /// batch. Results follow input order.
    ///
    /// A task that panics is logged and left out of the results.
    pub async fn process_batch(&self, batch: Vec<OperationRecord>) -> Vec<ProcessingResult> {
        let tasks: Vec<_> = batch
            .into_iter()
            .map(|record| {
                let engine = self.engine.clone();
                tokio::spawn(async move {
                    let result = engine.process_operation(&record).await;
                    ProcessingResult { record, result }
                })
            })
            .collect();

        let mut results = Vec::with_capacity(tasks.len());
        for task in tasks {
            match task.await {
                Ok(result) => results.push(result),
                Err(e) => tracing::error!("Operation task failed: {e}"),
            }
        }

        results
    }
}
