//! # Storage Layer
//!
//! This module defines the storage abstraction for mohul. The [`DataStore`] trait
//! lets the managers load and flush their state without knowing where it lives.
//!
//! ## Flush Model
//!
//! Stores are touched at exactly two points of a run:
//! - **Open**: every account and stock record is streamed into the managers.
//! - **Shutdown**: the managers write their complete state back, replacing what
//!   was there.
//!
//! Nothing is written per mutation, so a crash loses the whole session.
//!
//! ## Streaming Loads
//!
//! Loads push records into a sink callback one line at a time instead of
//! returning a collection. When a read fails half way, everything pushed before
//! the failure is already in the manager and stays there.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, two delimited text files
//! - [`memory::InMemoryStore`]: Line buffers for testing, same codec
//!
//! ## Storage Format
//!
//! ```text
//! <data-dir>/
//! ├── users.txt        # name,id,role,password
//! ├── inventory.txt    # productName,quantity
//! └── mohul.json       # Optional configuration
//! ```
//!
//! See [`records`] for the exact line rules.

use crate::error::Result;
use crate::model::{Account, StockRecord};

pub mod fs;
pub mod memory;
pub mod records;

#[cfg(any(test, feature = "test_utils"))]
pub use memory::fixtures;

/// Abstract interface for account and stock persistence.
pub trait DataStore {
    /// Stream every persisted account into `sink`, in stored order
    fn load_accounts(&self, sink: &mut dyn FnMut(Account)) -> Result<()>;

    /// Replace all persisted accounts
    fn save_accounts(&mut self, accounts: &[Account]) -> Result<()>;

    /// Stream every persisted stock record into `sink`, in stored order
    fn load_stock(&self, sink: &mut dyn FnMut(StockRecord)) -> Result<()>;

    /// Replace all persisted stock records
    fn save_stock(&mut self, stock: &[StockRecord]) -> Result<()>;
}
