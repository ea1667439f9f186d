use std::fmt;

use crate::domain::Transaction;
use crate::schemas::CreateTransactionRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult = Result<(), ValidationError>;

pub fn validate_required(field: &'static str, value: &str) -> ValidationResult {
    if value.is_empty() {
        return Err(ValidationError::new(field, "is required"));
    }

    Ok(())
}

pub fn validate_non_negative_amount(amount: i64) -> ValidationResult {
    if amount < 0 {
        return Err(ValidationError::new("amount", "must be non-negative"));
    }

    Ok(())
}

impl TryFrom<CreateTransactionRequest> for Transaction {
    type Error = ValidationError;

    fn try_from(request: CreateTransactionRequest) -> Result<Self, Self::Error> {
        validate_required("id", &request.id)?;
        validate_required("currency", &request.currency)?;
        validate_non_negative_amount(request.amount)?;
        let effective_at = request
            .effective_at
            .ok_or_else(|| ValidationError::new("effective_at", "is required"))?;

        Ok(Transaction {
            id: request.id,
            amount: request.amount,
            currency: request.currency,
            effective_at,
            metadata: request.metadata,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn valid_request() -> CreateTransactionRequest {
        CreateTransactionRequest {
            id: "txn-1".to_string(),
            amount: 100,
            currency: "USD".to_string(),
            effective_at: Some(Utc::now()),
            metadata: None,
        }
    }

    #[test]
    fn validates_required_field() {
        assert!(validate_required("field", "value").is_ok());
        assert!(validate_required("field", "").is_err());
    }

    #[test]
    fn whitespace_only_values_are_not_empty() {
        assert!(validate_required("field", "   ").is_ok());
        let request = CreateTransactionRequest {
            id: " ".to_string(),
            ..valid_request()
        };
        assert_eq!(Transaction::try_from(request).unwrap().id, " ");
    }

    #[test]
    fn accepts_valid_request() {
        let txn = Transaction::try_from(valid_request()).expect("valid request");
        assert_eq!(txn.id, "txn-1");
        assert_eq!(txn.amount, 100);
    }

    #[test]
    fn zero_amount_is_allowed() {
        let request = CreateTransactionRequest {
            amount: 0,
            ..valid_request()
        };
        assert!(Transaction::try_from(request).is_ok());
    }

    #[test]
    fn rejects_missing_fields() {
        let missing_id = CreateTransactionRequest {
            id: String::new(),
            ..valid_request()
        };
        assert_eq!(Transaction::try_from(missing_id).unwrap_err().field, "id");

        let missing_currency = CreateTransactionRequest {
            currency: String::new(),
            ..valid_request()
        };
        assert_eq!(
            Transaction::try_from(missing_currency).unwrap_err().field,
            "currency"
        );

        let missing_effective_at = CreateTransactionRequest {
            effective_at: None,
            ..valid_request()
        };
        assert_eq!(
            Transaction::try_from(missing_effective_at)
                .unwrap_err()
                .to_string(),
            "effective_at is required"
        );
    }

    #[test]
    fn rejects_negative_amount() {
        let request = CreateTransactionRequest {
            amount: -1,
            ..valid_request()
        };
        assert_eq!(
            Transaction::try_from(request).unwrap_err().to_string(),
            "amount must be non-negative"
        );
    }
}
