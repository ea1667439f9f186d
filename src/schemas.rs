use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::Metadata;

/// Body of `POST /transactions`. Missing fields decode to empty values so
/// validation can report which one is absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTransactionRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub effective_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
}
