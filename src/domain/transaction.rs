//! Transaction domain entity.
//! Framework-agnostic representation of a financial transaction record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Free-form string attributes attached to a transaction.
pub type Metadata = HashMap<String, String>;

/// Domain entity representing a transaction.
///
/// `amount` is expressed in minor currency units. `effective_at` is the
/// business time of the transaction and the primary sort key; `id` breaks ties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    pub effective_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        amount: i64,
        currency: impl Into<String>,
        effective_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            amount,
            currency: currency.into(),
            effective_at,
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Total order used by the store: `effective_at` ascending, then `id` ascending.
    pub fn order_cmp(&self, other: &Self) -> Ordering {
        self.effective_at
            .cmp(&other.effective_at)
            .then_with(|| self.id.cmp(&other.id))
    }
}

/// Deep equality used to tell an idempotent retry from a conflicting write.
///
/// Currency is compared case-sensitively and timestamps as instants. A missing
/// metadata map equals an empty one.
impl PartialEq for Transaction {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.amount == other.amount
            && self.currency == other.currency
            && self.effective_at == other.effective_at
            && metadata_eq(self.metadata.as_ref(), other.metadata.as_ref())
    }
}

impl Eq for Transaction {}

fn metadata_eq(a: Option<&Metadata>, b: Option<&Metadata>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.len() == b.len() && a.iter().all(|(k, v)| b.get(k) == Some(v)),
        (Some(m), None) | (None, Some(m)) => m.is_empty(),
        (None, None) => true,
    }
}
