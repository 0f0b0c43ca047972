//! Asynchronous implementations of core components
//!
//! This module provides the tokio-flavoured counterparts of the synchronous
//! wallet components.
//!
//! # Architecture
//!
//! - **AsyncWallet**: balance holder guarded by `tokio::sync::RwLock`
//! - **AsyncOperationEngine**: applies operation records to a shared wallet
//! - **BatchProcessor**: runs each operation of a batch as its own task
//!
//! # Thread Safety
//!
//! All components are `Send + Sync`; the wallet is the only shared state and
//! its lock serializes every mutation.

pub mod batch_processor;
pub mod engine;
pub mod wallet;

pub use batch_processor::{BatchProcessor, ProcessingResult};
pub use engine::AsyncOperationEngine;
pub use wallet::AsyncWallet;
