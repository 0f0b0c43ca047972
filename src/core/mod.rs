//! Core business logic module
//!
//! This module contains the wallet and the components that drive it:
//! - `traits` - The `BalanceHolder` seam
//! - `wallet` - Thread-safe balance holder
//! - `engine` - Applies operation records and tallies a summary
//! - `async` - tokio-based wallet, engine and batch processor

pub mod r#async;
pub mod engine;
pub mod traits;
pub mod wallet;

pub use engine::OperationEngine;
pub use r#async::{AsyncOperationEngine, AsyncWallet, BatchProcessor};
pub use traits::BalanceHolder;
pub use wallet::Wallet;
