use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

use super::QueryError;
use crate::domain::Transaction;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Conjunction of optional predicates over a transaction. `None` matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub currency: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    /// Inclusive at day granularity: anything before the following midnight matches.
    pub end_date: Option<DateTime<Utc>>,
    pub min_amount: Option<i64>,
    pub max_amount: Option<i64>,
}

impl TransactionFilter {
    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(currency) = &self.currency {
            if txn.currency.to_lowercase() != currency.to_lowercase() {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if txn.effective_at < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            // no representable next day means no upper bound
            if let Some(end_of_day) = end.checked_add_signed(Duration::hours(24)) {
                if txn.effective_at >= end_of_day {
                    return false;
                }
            }
        }
        if self.min_amount.is_some_and(|min| txn.amount < min) {
            return false;
        }
        if self.max_amount.is_some_and(|max| txn.amount > max) {
            return false;
        }
        true
    }
}

/// Keeps the transactions matching `filter`, preserving input order.
pub fn apply_filters(transactions: Vec<Transaction>, filter: &TransactionFilter) -> Vec<Transaction> {
    transactions
        .into_iter()
        .filter(|txn| filter.matches(txn))
        .collect()
}

/// Parses a zero-padded `YYYY-MM-DD` date as UTC midnight. Absent or empty
/// input means no filter.
pub fn parse_date_or_none(
    value: Option<&str>,
    field: &'static str,
) -> Result<Option<DateTime<Utc>>, QueryError> {
    match value {
        None | Some("") => Ok(None),
        Some(raw) => {
            // chrono accepts unpadded month and day, so check the shape first
            if !is_padded_date(raw) {
                return Err(QueryError::InvalidDate(field));
            }
            let date = NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .map_err(|_| QueryError::InvalidDate(field))?;
            Ok(Some(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))))
        }
    }
}

fn is_padded_date(raw: &str) -> bool {
    raw.len() == 10
        && raw.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

pub fn parse_date_filters(
    start: Option<&str>,
    end: Option<&str>,
) -> Result<(Option<DateTime<Utc>>, Option<DateTime<Utc>>), QueryError> {
    let start = parse_date_or_none(start, "start_date")?;
    let end = parse_date_or_none(end, "end_date")?;

    if let (Some(start), Some(end)) = (start, end) {
        if start > end {
            return Err(QueryError::InvertedDateRange);
        }
    }

    Ok((start, end))
}

pub fn parse_amount_filters(
    min: Option<&str>,
    max: Option<&str>,
) -> Result<(Option<i64>, Option<i64>), QueryError> {
    let min = parse_amount(min, "min_amount")?;
    let max = parse_amount(max, "max_amount")?;

    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(QueryError::InvertedAmountRange);
        }
    }

    Ok((min, max))
}

fn parse_amount(value: Option<&str>, field: &'static str) -> Result<Option<i64>, QueryError> {
    match value {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse::<i64>()
            .map(Some)
            .map_err(|_| QueryError::InvalidAmount(field)),
    }
}
