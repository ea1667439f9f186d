use super::QueryError;
use crate::utils::window::clamp_window;

pub const DEFAULT_LIMIT: i64 = 100;
pub const DEFAULT_OFFSET: i64 = 0;
pub const MIN_LIMIT: i64 = 1;
pub const MAX_LIMIT: i64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: i64,
    pub offset: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl Pagination {
    /// Reads `limit`/`offset` from raw strings, falling back to the defaults on
    /// missing or unparsable input, then validates the result.
    pub fn parse(limit: Option<&str>, offset: Option<&str>) -> Result<Self, QueryError> {
        let pagination = Self {
            limit: parse_int_or_default(limit, DEFAULT_LIMIT),
            offset: parse_int_or_default(offset, DEFAULT_OFFSET),
        };
        validate_pagination(pagination.limit, pagination.offset)?;
        Ok(pagination)
    }
}

pub fn parse_int_or_default(value: Option<&str>, default: i64) -> i64 {
    value
        .and_then(|raw| raw.parse::<i64>().ok())
        .unwrap_or(default)
}

pub fn validate_pagination(limit: i64, offset: i64) -> Result<(), QueryError> {
    if !(MIN_LIMIT..=MAX_LIMIT).contains(&limit) {
        return Err(QueryError::LimitOutOfRange);
    }
    if offset < 0 {
        return Err(QueryError::NegativeOffset);
    }
    Ok(())
}

/// Page window over an already filtered list, with the store's clamping rules.
pub fn apply_pagination<T>(items: &[T], limit: i64, offset: i64) -> &[T] {
    &items[clamp_window(items.len(), limit, offset)]
}
