//! Core trait for balance holders
//!
//! The operation engine is written against this trait so that it does not
//! depend on how a holder synchronizes access to its balance.

use crate::types::{Bitcoin, WalletError};

/// A thread-safe holder of a single monetary balance
///
/// Every method takes `&self`: implementations serialize concurrent callers
/// internally and must keep each operation linearizable.
pub trait BalanceHolder: Send + Sync {
    /// Add a strictly positive amount to the balance
    fn deposit(&self, amount: Bitcoin) -> Result<(), WalletError>;

    /// Remove a strictly positive amount no larger than the balance
    fn withdraw(&self, amount: Bitcoin) -> Result<(), WalletError>;

    /// Current balance
    fn balance(&self) -> Bitcoin;
}
