//! Error types for the wallet
//!
//! Two families of errors live here:
//!
//! - [`WalletError`]: outcomes of a rejected deposit or withdrawal. Every
//!   variant is recoverable and guarantees the balance was left untouched.
//! - [`ReplayError`]: failures of the CSV replay tooling (missing files,
//!   malformed records, output failures).

use super::amount::Bitcoin;
use thiserror::Error;

/// Rejection returned by a wallet operation
///
/// The wallet never logs or retries; these are handed straight back to the
/// caller and no state has been mutated when one is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WalletError {
    /// Deposit or withdrawal requested with a zero or negative amount
    #[error("negative or zero amount: {amount}")]
    NonPositiveAmount {
        /// The rejected amount
        amount: Bitcoin,
    },

    /// Withdrawal larger than the current balance
    #[error("insufficient balance: {balance} (requested {requested})")]
    InsufficientBalance {
        /// Balance at the moment the withdrawal was checked
        balance: Bitcoin,
        /// Requested withdrawal amount
        requested: Bitcoin,
    },

    /// The decimal result of the operation is not representable
    #[error("arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },
}

impl WalletError {
    /// Create a NonPositiveAmount error
    pub fn non_positive_amount(amount: Bitcoin) -> Self {
        WalletError::NonPositiveAmount { amount }
    }

    /// Create an InsufficientBalance error
    pub fn insufficient_balance(balance: Bitcoin, requested: Bitcoin) -> Self {
        WalletError::InsufficientBalance { balance, requested }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        WalletError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }
}

/// Failure of the operation replay pipeline
///
/// `FileNotFound`, `Io`, `Runtime` and `Output` abort a replay.
/// `Parse` and `InvalidRecord` concern a single CSV row, which is logged and
/// skipped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReplayError {
    /// Input file does not exist
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error while reading input
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// Row could not be deserialized
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Parse {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Row deserialized but does not describe a valid operation
    #[error("Invalid record{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    InvalidRecord {
        /// Line number of the record (if known)
        line: Option<u64>,
        /// What is wrong with the record
        message: String,
    },

    /// The async runtime could not be started
    #[error("Runtime error: {message}")]
    Runtime {
        /// Description of the runtime failure
        message: String,
    },

    /// Summary could not be written
    #[error("Output error: {message}")]
    Output {
        /// Description of the write failure
        message: String,
    },
}

impl ReplayError {
    /// Create an InvalidRecord error without line information
    pub fn invalid_record(message: impl Into<String>) -> Self {
        ReplayError::InvalidRecord {
            line: None,
            message: message.into(),
        }
    }

    /// Attach a line number to a per-record error
    ///
    /// Errors that are not tied to a record are returned unchanged.
    pub fn at_line(self, line: u64) -> Self {
        match self {
            ReplayError::Parse { message, .. } => ReplayError::Parse {
                line: Some(line),
                message,
            },
            ReplayError::InvalidRecord { message, .. } => ReplayError::InvalidRecord {
                line: Some(line),
                message,
            },
            other => other,
        }
    }

    /// Whether the error ends the replay rather than a single record
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            ReplayError::Parse { .. } | ReplayError::InvalidRecord { .. }
        )
    }
}

impl From<std::io::Error> for ReplayError {
    fn from(error: std::io::Error) -> Self {
        ReplayError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for ReplayError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        ReplayError::Parse {
            line,
            message: error.to_string(),
        }
    }
}
