use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::domain::Transaction;
use crate::error::AppError;
use crate::ports::CreateOutcome;
use crate::query::{ListParams, ListQuery};
use crate::schemas::CreateTransactionRequest;
use crate::AppState;

/// `POST /transactions`: 201 when stored, 200 for an idempotent retry, 409 on id reuse.
pub async fn create_transaction(
    State(state): State<AppState>,
    payload: Result<Json<CreateTransactionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Transaction>), AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected transaction body");
        AppError::BadRequest("invalid JSON".to_string())
    })?;
    let txn = Transaction::try_from(request)?;

    let status = match state.store.create(&txn) {
        Ok(CreateOutcome::Accepted) => {
            tracing::info!(
                id = %txn.id,
                amount = txn.amount,
                currency = %txn.currency,
                "Transaction accepted"
            );
            StatusCode::CREATED
        }
        Ok(CreateOutcome::Duplicate) => {
            tracing::debug!(id = %txn.id, "Idempotent retry of existing transaction");
            StatusCode::OK
        }
        Err(e) => {
            tracing::warn!(id = %txn.id, "Transaction id reused with different data");
            return Err(e.into());
        }
    };

    Ok((status, Json(txn)))
}

pub async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Transaction>, AppError> {
    let txn = state.store.get(&id)?;
    Ok(Json(txn))
}

pub async fn list_transactions(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    let query = ListQuery::parse(&params)?;
    let results = query.execute(state.store.as_ref());
    Ok(Json(results))
}
