//! Rust Wallet Library
//! # Overview
//!
//! A thread-safe monetary balance holder, plus a CSV replay tool that drives
//! it either sequentially or with concurrent batches.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (`Bitcoin`, errors, operation records, summary)
//! - [`core`] - Business logic components:
//!   - [`core::wallet`] - The thread-safe balance holder
//!   - [`core::engine`] - Applies operation records and tallies a summary
//!   - [`core::r#async`] - tokio wallet, engine and batch processor
//! - [`io`] - CSV reading and summary output
//! - [`strategy`] - Sequential and concurrent replay pipelines
//! - [`cli`] - CLI arguments parsing
//! - [`logging`] - tracing subscriber setup for the binary
//!
//! # Wallet rules
//!
//! - **Deposit**: adds a strictly positive amount
//! - **Withdraw**: removes a strictly positive amount no larger than the balance
//! - **Balance**: reads the current amount
//!
//! A rejected operation returns a [`WalletError`] and leaves the balance
//! untouched. Concurrent operations are linearizable: no update is ever lost.

pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod strategy;
pub mod types;

pub use core::{AsyncWallet, BalanceHolder, OperationEngine, Wallet};
pub use io::write_summary_csv;
pub use types::{
    Bitcoin, OperationRecord, OperationType, Outcome, ReplayError, ReplaySummary, WalletError,
};
