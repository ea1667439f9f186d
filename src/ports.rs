//! Storage port for transactions.
//! The HTTP layer depends on this trait, never on a concrete store.

use crate::domain::Transaction;
use thiserror::Error;

/// Successful outcome of a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The transaction was new and has been stored.
    Accepted,
    /// An equal transaction was already stored; nothing changed.
    Duplicate,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("transaction {0} not found")]
    NotFound(String),

    #[error("transaction {0} already exists with different data")]
    Conflict(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Transaction storage with idempotent writes and a stable total order.
///
/// Every returned transaction is an independent copy of the stored record.
pub trait TransactionStore: Send + Sync {
    /// Stores `txn` unless its id is taken. Resubmitting an equal record yields
    /// `Duplicate`; reusing the id with different data yields `Conflict`.
    fn create(&self, txn: &Transaction) -> StoreResult<CreateOutcome>;

    fn get(&self, id: &str) -> StoreResult<Transaction>;

    /// Window `[offset, offset + limit)` of the ordered sequence, clamped to the
    /// stored range. Out-of-range or negative values produce a shorter or empty
    /// page rather than an error.
    fn list(&self, limit: i64, offset: i64) -> Vec<Transaction>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
