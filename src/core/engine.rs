//! Operation engine
//!
//! This module provides the `OperationEngine` that applies parsed operation
//! records to a balance holder and keeps a running `ReplaySummary`.
//!
//! The engine enforces record-level rules the wallet cannot see:
//! - Deposits and withdrawals must carry an amount
//! - Balance reads ignore any amount supplied
//!
//! Amount and balance rules stay in the holder itself.

use crate::core::traits::BalanceHolder;
use crate::types::{OperationRecord, OperationType, Outcome, ReplaySummary, WalletError};

/// Apply one operation record to a holder
///
/// # Errors
///
/// Returns the holder's rejection unchanged. A deposit or withdrawal with no
/// amount is treated as a zero amount and rejected as `NonPositiveAmount`.
pub fn apply<H>(holder: &H, record: &OperationRecord) -> Result<Outcome, WalletError>
where
    H: BalanceHolder + ?Sized,
{
    let amount = record.amount.unwrap_or_default();

    match record.op {
        OperationType::Deposit => holder.deposit(amount).map(|()| Outcome::Deposited),
        OperationType::Withdraw => holder.withdraw(amount).map(|()| Outcome::Withdrawn),
        OperationType::Balance => Ok(Outcome::Read(holder.balance())),
    }
}

/// Sequential operation engine
///
/// Borrows a holder and replays records against it in the order given.
pub struct OperationEngine<'a, H: BalanceHolder + ?Sized> {
    holder: &'a H,
    summary: ReplaySummary,
}

impl<'a, H: BalanceHolder + ?Sized> OperationEngine<'a, H> {
    /// Create an engine over `holder` with an empty summary
    pub fn new(holder: &'a H) -> Self {
        OperationEngine {
            holder,
            summary: ReplaySummary::default(),
        }
    }

    /// Process a single operation record
    ///
    /// The result is counted in the summary whether it succeeded or not.
    pub fn process(&mut self, record: &OperationRecord) -> Result<Outcome, WalletError> {
        let result = apply(self.holder, record);
        self.summary.record(&result);
        result
    }

    /// Summary so far, with the holder's current balance
    pub fn summary(&self) -> ReplaySummary {
        ReplaySummary {
            balance: self.holder.balance(),
            ..self.summary
        }
    }
}
