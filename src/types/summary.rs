//! Replay summary
//!
//! Counts of what happened while replaying an operation file, plus the
//! balance the wallet ended with.

use super::amount::Bitcoin;
use super::error::WalletError;
use super::operation::Outcome;

/// Aggregate result of a replay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaySummary {
    /// Balance after the last operation
    pub balance: Bitcoin,

    /// Successful deposits
    pub deposits: u64,

    /// Successful withdrawals
    pub withdrawals: u64,

    /// Balance reads
    pub reads: u64,

    /// Deposits and withdrawals the wallet rejected
    pub rejected: u64,
}

impl ReplaySummary {
    /// Count one operation result
    pub fn record(&mut self, result: &Result<Outcome, WalletError>) {
        match result {
            Ok(Outcome::Deposited) => self.deposits += 1,
            Ok(Outcome::Withdrawn) => self.withdrawals += 1,
            Ok(Outcome::Read(_)) => self.reads += 1,
            Err(_) => self.rejected += 1,
        }
    }

    /// Total number of operations counted
    pub fn operations(&self) -> u64 {
        self.deposits + self.withdrawals + self.reads + self.rejected
    }
}
