//! Operation types replayed against a wallet
//!
//! An operation record is the parsed form of one input CSV row. Deposits and
//! withdrawals carry an amount; balance reads do not.

use super::amount::Bitcoin;

/// Operations a wallet accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationType {
    /// Increase the balance by a positive amount
    Deposit,

    /// Decrease the balance by a positive amount no larger than the balance
    Withdraw,

    /// Read the current balance
    Balance,
}

impl OperationType {
    /// Whether the operation needs an amount column
    pub fn requires_amount(&self) -> bool {
        matches!(self, OperationType::Deposit | OperationType::Withdraw)
    }
}

/// A single operation parsed from input
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRecord {
    /// Which wallet operation to run
    pub op: OperationType,

    /// Amount for deposits and withdrawals, `None` for balance reads
    pub amount: Option<Bitcoin>,
}

impl OperationRecord {
    /// Build a deposit of `amount`
    pub fn deposit(amount: Bitcoin) -> Self {
        OperationRecord {
            op: OperationType::Deposit,
            amount: Some(amount),
        }
    }

    /// Build a withdrawal of `amount`
    pub fn withdraw(amount: Bitcoin) -> Self {
        OperationRecord {
            op: OperationType::Withdraw,
            amount: Some(amount),
        }
    }

    /// Build a balance read
    pub fn balance() -> Self {
        OperationRecord {
            op: OperationType::Balance,
            amount: None,
        }
    }
}

/// Result of a successfully applied operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Deposit went through
    Deposited,
    /// Withdrawal went through
    Withdrawn,
    /// Balance observed by a read
    Read(Bitcoin),
}
