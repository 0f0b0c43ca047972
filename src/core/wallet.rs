//! Wallet: a thread-safe balance holder
//!
//! This module provides the `Wallet` struct, which owns one monetary balance
//! and a reader/writer lock protecting it.
//!
//! The Wallet is responsible for:
//! - Rejecting zero and negative transaction amounts before touching state
//! - Rejecting withdrawals larger than the balance
//! - Serializing deposits and withdrawals so no update is lost
//! - Letting concurrent readers observe the balance under a shared lock
//!
//! # Locking
//!
//! Deposits and withdrawals hold the write lock for the whole
//! check-then-mutate sequence. Reads take the read lock. The guards are
//! released on drop, so every exit path (including rejections) unlocks.
//!
//! A poisoned lock is recovered rather than propagated: no code inside a
//! critical section can panic between reading and writing the balance, so the
//! stored value is always consistent.

use crate::core::traits::BalanceHolder;
use crate::types::{Bitcoin, WalletError};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Thread-safe monetary balance
///
/// Share it across threads with `Arc<Wallet>` or scoped borrows.
///
/// # Examples
///
/// ```
/// use rust_wallet::{Bitcoin, Wallet, WalletError};
///
/// let wallet = Wallet::new(Bitcoin::from(100));
/// wallet.withdraw(Bitcoin::from(30)).unwrap();
/// assert_eq!(wallet.balance(), Bitcoin::from(70));
///
/// let err = wallet.withdraw(Bitcoin::from(500)).unwrap_err();
/// assert!(matches!(err, WalletError::InsufficientBalance { .. }));
/// assert_eq!(wallet.balance(), Bitcoin::from(70));
/// ```
#[derive(Debug, Default)]
pub struct Wallet {
    balance: RwLock<Bitcoin>,
}

impl Wallet {
    /// Create a wallet holding `initial`
    ///
    /// The starting amount is taken as-is: zero and negative values are
    /// accepted.
    pub fn new(initial: Bitcoin) -> Self {
        Wallet {
            balance: RwLock::new(initial),
        }
    }

    /// Deposit funds into the wallet
    ///
    /// # Errors
    ///
    /// - `NonPositiveAmount` if `amount <= 0`
    /// - `ArithmeticOverflow` if the new balance is not representable
    ///
    /// The balance is unchanged when an error is returned.
    pub fn deposit(&self, amount: Bitcoin) -> Result<(), WalletError> {
        if !amount.is_positive() {
            return Err(WalletError::non_positive_amount(amount));
        }

        let mut balance = self.write();
        let updated = balance
            .checked_add(amount)
            .ok_or_else(|| WalletError::arithmetic_overflow("deposit"))?;
        *balance = updated;

        Ok(())
    }

    /// Withdraw funds from the wallet
    ///
    /// The sufficiency check and the subtraction run under one write lock, so
    /// concurrent withdrawals can never take the balance below zero together.
    ///
    /// # Errors
    ///
    /// - `NonPositiveAmount` if `amount <= 0`
    /// - `InsufficientBalance` if `amount` exceeds the current balance; the
    ///   error carries that balance
    ///
    /// The balance is unchanged when an error is returned.
    pub fn withdraw(&self, amount: Bitcoin) -> Result<(), WalletError> {
        if !amount.is_positive() {
            return Err(WalletError::non_positive_amount(amount));
        }

        let mut balance = self.write();
        if *balance < amount {
            return Err(WalletError::insufficient_balance(*balance, amount));
        }

        // 0 < amount <= balance, so the difference cannot overflow
        let updated = Bitcoin::new(balance.as_decimal() - amount.as_decimal());
        *balance = updated;

        Ok(())
    }

    /// Current balance
    pub fn balance(&self) -> Bitcoin {
        *self.read()
    }

    fn read(&self) -> RwLockReadGuard<'_, Bitcoin> {
        self.balance.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Bitcoin> {
        self.balance.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Bitcoin> for Wallet {
    fn from(initial: Bitcoin) -> Self {
        Wallet::new(initial)
    }
}

impl BalanceHolder for Wallet {
    fn deposit(&self, amount: Bitcoin) -> Result<(), WalletError> {
        Wallet::deposit(self, amount)
    }

    fn withdraw(&self, amount: Bitcoin) -> Result<(), WalletError> {
        Wallet::withdraw(self, amount)
    }

    fn balance(&self) -> Bitcoin {
        Wallet::balance(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::sync::Arc;
    use std::thread;

    fn btc(value: i64) -> Bitcoin {
        Bitcoin::from(value)
    }

    #[rstest]
    #[case::equal_amount(btc(100), btc(100), btc(0), None)]
    #[case::lower_amount(btc(100), btc(10), btc(90), None)]
    #[case::zero_amount(
        btc(100),
        btc(0),
        btc(100),
        Some(WalletError::non_positive_amount(btc(0)))
    )]
    #[case::from_zero_balance(
        btc(0),
        btc(100),
        btc(0),
        Some(WalletError::insufficient_balance(btc(0), btc(100)))
    )]
    #[case::negative_amount(
        btc(100),
        btc(-10),
        btc(100),
        Some(WalletError::non_positive_amount(btc(-10)))
    )]
    #[case::large_amount(
        btc(100_000_000_000),
        btc(10_000_000_000),
        btc(90_000_000_000),
        None
    )]
    fn test_withdraw(
        #[case] initial: Bitcoin,
        #[case] amount: Bitcoin,
        #[case] expected: Bitcoin,
        #[case] expected_error: Option<WalletError>,
    ) {
        let wallet = Wallet::new(initial);

        let result = wallet.withdraw(amount);

        assert_eq!(result.err(), expected_error, "withdraw({})", amount);
        assert_eq!(wallet.balance(), expected, "withdraw({})", amount);
    }

    #[rstest]
    #[case::positive_amount(btc(100), btc(100), None)]
    #[case::negative_amount(btc(-10), btc(0), Some(WalletError::non_positive_amount(btc(-10))))]
    #[case::zero_amount(btc(0), btc(0), Some(WalletError::non_positive_amount(btc(0))))]
    #[case::large_amount(btc(10_000_000_000), btc(10_000_000_000), None)]
    fn test_deposit(
        #[case] amount: Bitcoin,
        #[case] expected: Bitcoin,
        #[case] expected_error: Option<WalletError>,
    ) {
        let wallet = Wallet::new(Bitcoin::ZERO);

        let result = wallet.deposit(amount);

        assert_eq!(result.err(), expected_error, "deposit({})", amount);
        assert_eq!(wallet.balance(), expected, "deposit({})", amount);
    }

    #[rstest]
    #[case::zero_balance(btc(0))]
    #[case::positive_balance(btc(100))]
    #[case::negative_balance(btc(-25))]
    fn test_balance_reports_initial_amount(#[case] initial: Bitcoin) {
        let wallet = Wallet::new(initial);
        assert_eq!(wallet.balance(), initial);
    }

    #[test]
    fn test_default_is_empty() {
        assert_eq!(Wallet::default().balance(), Bitcoin::ZERO);
    }

    #[test]
    fn test_insufficient_balance_carries_current_balance() {
        let wallet = Wallet::new(btc(40));
        wallet.deposit(btc(2)).unwrap();

        match wallet.withdraw(btc(50)) {
            Err(WalletError::InsufficientBalance { balance, requested }) => {
                assert_eq!(balance, btc(42));
                assert_eq!(requested, btc(50));
            }
            other => panic!("expected InsufficientBalance, got {:?}", other),
        }
    }

    #[test]
    fn test_withdraw_from_negative_initial_balance_is_rejected() {
        let wallet = Wallet::new(btc(-5));

        let result = wallet.withdraw(btc(1));

        assert_eq!(
            result,
            Err(WalletError::insufficient_balance(btc(-5), btc(1)))
        );
        assert_eq!(wallet.balance(), btc(-5));
    }

    #[test]
    fn test_failed_operations_are_idempotent() {
        let wallet = Wallet::new(btc(10));

        for _ in 0..5 {
            assert!(wallet.withdraw(btc(11)).is_err());
            assert!(wallet.withdraw(btc(0)).is_err());
            assert!(wallet.deposit(btc(-1)).is_err());
        }

        assert_eq!(wallet.balance(), btc(10));
    }

    #[test]
    fn test_deposit_overflow_leaves_balance_unchanged() {
        let wallet = Wallet::new(Bitcoin::new(Decimal::MAX));

        let result = wallet.deposit(btc(1));

        assert_eq!(result, Err(WalletError::arithmetic_overflow("deposit")));
        assert_eq!(wallet.balance(), Bitcoin::new(Decimal::MAX));
    }

    #[rstest]
    #[case::whole_extreme_balance(Decimal::MAX, Decimal::MAX, Decimal::ZERO)]
    #[case::one_from_extreme_balance(Decimal::MAX, Decimal::ONE, Decimal::MAX - Decimal::ONE)]
    fn test_withdraw_at_decimal_limits(
        #[case] initial: Decimal,
        #[case] amount: Decimal,
        #[case] expected: Decimal,
    ) {
        let wallet = Wallet::new(Bitcoin::new(initial));

        assert_eq!(wallet.withdraw(Bitcoin::new(amount)), Ok(()));
        assert_eq!(wallet.balance(), Bitcoin::new(expected));
    }

    #[test]
    fn test_fractional_deposits_do_not_drift() {
        let wallet = Wallet::default();
        let tenth = Bitcoin::new(Decimal::new(1, 1));

        for _ in 0..30 {
            wallet.deposit(tenth).unwrap();
        }

        assert_eq!(wallet.balance(), btc(3));
    }

    #[test]
    fn test_parallel_withdraw() {
        const THREADS: usize = 100;
        let wallet = Arc::new(Wallet::new(btc(1000)));

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let wallet = Arc::clone(&wallet);
                thread::spawn(move || wallet.withdraw(btc(10)))
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap().is_ok());
        }
        assert_eq!(wallet.balance(), btc(0));
    }

    #[test]
    fn test_parallel_deposit() {
        const THREADS: usize = 100;
        let wallet = Wallet::new(Bitcoin::ZERO);

        thread::scope(|scope| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| scope.spawn(|| wallet.deposit(btc(10))))
                .collect();

            for handle in handles {
                assert!(handle.join().unwrap().is_ok());
            }
        });

        assert_eq!(wallet.balance(), btc(1000));
    }

    #[test]
    fn test_parallel_withdraw_never_overdraws() {
        // 100 withdrawals of 10 against 500: exactly half can succeed
        let wallet = Wallet::new(btc(500));

        let results: Vec<_> = thread::scope(|scope| {
            let handles: Vec<_> = (0..100)
                .map(|_| scope.spawn(|| wallet.withdraw(btc(10))))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let succeeded = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(succeeded, 50);
        assert!(results.iter().filter(|r| r.is_err()).all(|r| matches!(
            r,
            Err(WalletError::InsufficientBalance { .. })
        )));
        assert_eq!(wallet.balance(), btc(0));
    }

    #[test]
    fn test_readers_see_consistent_balance_during_writes() {
        let wallet = Wallet::new(btc(0));

        thread::scope(|scope| {
            for _ in 0..10 {
                scope.spawn(|| {
                    for _ in 0..100 {
                        wallet.deposit(btc(1)).unwrap();
                    }
                });
            }
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..100 {
                        let seen = wallet.balance();
                        assert!(seen >= btc(0) && seen <= btc(1000));
                    }
                });
            }
        });

        assert_eq!(wallet.balance(), btc(1000));
    }

    #[test]
    fn test_poisoned_lock_is_recovered() {
        let wallet = Arc::new(Wallet::new(btc(10)));

        let poisoner = Arc::clone(&wallet);
        let _ = thread::spawn(move || {
            let _guard = poisoner.balance.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(wallet.balance.is_poisoned());
        wallet.deposit(btc(5)).unwrap();
        assert_eq!(wallet.balance(), btc(15));
    }

    #[test]
    fn test_wallet_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Wallet>();
    }
}
