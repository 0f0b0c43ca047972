//! Async wallet for callers running on a tokio runtime
//!
//! `AsyncWallet` mirrors [`crate::core::Wallet`] but guards the balance with
//! `tokio::sync::RwLock`, so waiting for the lock yields to the runtime
//! instead of blocking a worker thread.
//!
//! # Thread Safety
//!
//! Deposits and withdrawals hold the write guard across the whole
//! check-then-mutate sequence; reads take the read guard. tokio's lock is
//! fair (write-preferring FIFO), so a steady stream of readers cannot starve
//! writers.

use crate::types::{Bitcoin, WalletError};
use tokio::sync::RwLock;

/// Thread-safe balance holder with async operations
#[derive(Debug, Default)]
pub struct AsyncWallet {
    balance: RwLock<Bitcoin>,
}

impl AsyncWallet {
    /// Create a wallet holding `initial` (not validated)
    pub fn new(initial: Bitcoin) -> Self {
        Self {
            balance: RwLock::new(initial),
        }
    }

    /// Deposit funds
    ///
    /// Same contract as [`crate::core::Wallet::deposit`].
    pub async fn deposit(&self, amount: Bitcoin) -> Result<(), WalletError> {
        if !amount.is_positive() {
            return Err(WalletError::non_positive_amount(amount));
        }

        let mut balance = self.balance.write().await;
        let updated = balance
            .checked_add(amount)
            .ok_or_else(|| WalletError::arithmetic_overflow("deposit"))?;
        *balance = updated;

        Ok(())
    }

    /// Withdraw funds
    ///
    /// Same contract as [`crate::core::Wallet::withdraw`].
    pub async fn withdraw(&self, amount: Bitcoin) -> Result<(), WalletError> {
        if !amount.is_positive() {
            return Err(WalletError::non_positive_amount(amount));
        }

        let mut balance = self.balance.write().await;
        if *balance < amount {
            return Err(WalletError::insufficient_balance(*balance, amount));
        }

        // 0 < amount <= balance, so the difference cannot overflow
        let updated = Bitcoin::new(balance.as_decimal() - amount.as_decimal());
        *balance = updated;

        Ok(())
    }

    /// Current balance
    pub async fn balance(&self) -> Bitcoin {
        *self.balance.read().await
    }
}
