//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `amount`: The `Bitcoin` monetary amount
//! - `error`: Error types for the wallet and the replay tooling
//! - `operation`: Operations replayed against a wallet
//! - `summary`: Aggregate replay results

pub mod amount;
pub mod error;
pub mod operation;
pub mod summary;

pub use amount::{Bitcoin, BITCOIN_SCALE};
pub use error::{ReplayError, WalletError};
pub use operation::{OperationRecord, OperationType, Outcome};
pub use summary::ReplaySummary;
