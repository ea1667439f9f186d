//! List query pipeline.
//!
//! Parameters are validated eagerly, then the store is asked for a bounded
//! ordered batch which is filtered and paged in memory.

pub mod filter;
pub mod pagination;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::Transaction;
use crate::ports::TransactionStore;

pub use filter::{apply_filters, TransactionFilter};
pub use pagination::{apply_pagination, Pagination};

/// Upper bound on records pulled from the store per list request. Filters run
/// over this in-memory batch, so records past the cap are never visible to a
/// filtered query.
pub const LIST_BATCH_CAP: i64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("limit must be between {} and {}", pagination::MIN_LIMIT, pagination::MAX_LIMIT)]
    LimitOutOfRange,

    #[error("offset must be non-negative")]
    NegativeOffset,

    #[error("invalid {0} format, use YYYY-MM-DD")]
    InvalidDate(&'static str),

    #[error("start_date must be before or equal to end_date")]
    InvertedDateRange,

    #[error("invalid {0}")]
    InvalidAmount(&'static str),

    #[error("min_amount must be less than or equal to max_amount")]
    InvertedAmountRange,
}

/// Raw list parameters as they arrive on the query string.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub currency: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub min_amount: Option<String>,
    pub max_amount: Option<String>,
}

/// A validated list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub filter: TransactionFilter,
    pub pagination: Pagination,
}

impl ListQuery {
    pub fn parse(params: &ListParams) -> Result<Self, QueryError> {
        let pagination = Pagination::parse(params.limit.as_deref(), params.offset.as_deref())?;

        let (start_date, end_date) =
            filter::parse_date_filters(params.start_date.as_deref(), params.end_date.as_deref())?;
        let (min_amount, max_amount) = filter::parse_amount_filters(
            params.min_amount.as_deref(),
            params.max_amount.as_deref(),
        )?;

        let currency = params
            .currency
            .as_deref()
            .filter(|c| !c.is_empty())
            .map(str::to_uppercase);

        Ok(Self {
            filter: TransactionFilter {
                currency,
                start_date,
                end_date,
                min_amount,
                max_amount,
            },
            pagination,
        })
    }

    /// Runs the query against `store`: fetch a capped ordered batch, filter, then page.
    pub fn execute(&self, store: &dyn TransactionStore) -> Vec<Transaction> {
        let batch = store.list(LIST_BATCH_CAP, 0);
        let filtered = apply_filters(batch, &self.filter);
        apply_pagination(&filtered, self.pagination.limit, self.pagination.offset).to_vec()
    }
}
