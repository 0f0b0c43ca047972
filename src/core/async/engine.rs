//! Async operation engine
//!
//! `AsyncOperationEngine` applies operation records to a shared
//! [`AsyncWallet`]. It is cheap to clone (one `Arc`) so every spawned task
//! can own a handle to the same wallet.

use std::sync::Arc;

use super::AsyncWallet;
use crate::types::{Bitcoin, OperationRecord, OperationType, Outcome, WalletError};

/// Thread-safe operation engine over an async wallet
#[derive(Debug, Clone)]
pub struct AsyncOperationEngine {
    wallet: Arc<AsyncWallet>,
}

impl AsyncOperationEngine {
    /// Create an engine over `wallet`
    pub fn new(wallet: Arc<AsyncWallet>) -> Self {
        Self { wallet }
    }

    /// Apply one operation record
    ///
    /// Mirrors [`crate::core::engine::apply`]: a deposit or withdrawal with no
    /// amount is rejected as a zero amount.
    pub async fn process_operation(
        &self,
        record: &OperationRecord,
    ) -> Result<Outcome, WalletError> {
        let amount = record.amount.unwrap_or_default();

        match record.op {
            OperationType::Deposit => self
                .wallet
                .deposit(amount)
                .await
                .map(|()| Outcome::Deposited),
            OperationType::Withdraw => self
                .wallet
                .withdraw(amount)
                .await
                .map(|()| Outcome::Withdrawn),
            OperationType::Balance => Ok(Outcome::Read(self.wallet.balance().await)),
        }
    }

    /// Current balance of the underlying wallet
    pub async fn balance(&self) -> Bitcoin {
        self.wallet.balance().await
    }
}
