//! In-memory implementation of TransactionStore.
//!
//! Holds a lookup index by id and the ordered sequence behind one
//! reader/writer lock so both are always updated together. Inserting shifts
//! the tail of the sequence (O(n) per write) to keep reads as plain slices; a
//! B-tree keyed by `(effective_at, id)` would remove the shift if write
//! contention ever matters.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::Transaction;
use crate::ports::{CreateOutcome, StoreError, StoreResult, TransactionStore};
use crate::utils::window::clamp_window;

/// Single-process transaction store.
#[derive(Debug, Default)]
pub struct MemoryTransactionStore {
    state: RwLock<State>,
}

#[derive(Debug, Default)]
struct State {
    by_id: HashMap<String, Arc<Transaction>>,
    ordered: Vec<Arc<Transaction>>,
}

impl MemoryTransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Every mutation completes before its guard drops, so a poisoned lock
    // still guards consistent state.
    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TransactionStore for MemoryTransactionStore {
    fn create(&self, txn: &Transaction) -> StoreResult<CreateOutcome> {
        let mut state = self.write();

        if let Some(existing) = state.by_id.get(&txn.id) {
            return if existing.as_ref() == txn {
                Ok(CreateOutcome::Duplicate)
            } else {
                Err(StoreError::Conflict(txn.id.clone()))
            };
        }

        let stored = Arc::new(txn.clone());
        let position = state
            .ordered
            .partition_point(|existing| existing.order_cmp(&stored) == Ordering::Less);
        state.ordered.insert(position, Arc::clone(&stored));
        state.by_id.insert(stored.id.clone(), stored);

        Ok(CreateOutcome::Accepted)
    }

    fn get(&self, id: &str) -> StoreResult<Transaction> {
        self.read()
            .by_id
            .get(id)
            .map(|txn| txn.as_ref().clone())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn list(&self, limit: i64, offset: i64) -> Vec<Transaction> {
        let state = self.read();
        let range = clamp_window(state.ordered.len(), limit, offset);
        state.ordered[range]
            .iter()
            .map(|txn| txn.as_ref().clone())
            .collect()
    }

    fn len(&self) -> usize {
        self.read().ordered.len()
    }
}
