use axum::extract::{Path, State};
use axum::Json;
use pointbank_core::app_state::AppState;
use pointbank_core::services::DebitOutcome;
use pointbank_primitives::error::{ApiError, ApiErrorResponse};
use pointbank_primitives::models::{DebitRequest, DebitResponse};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/wallets/{user_id}/debit",
    tag = "Wallet",
    summary = "Debit points from a wallet (service-to-service)",
    description = "Atomically checks the balance, decrements it and appends a ledger entry. \
                   `success: false` signals insufficient balance and is not an error.",
    request_body = DebitRequest,
    responses(
        (status = 200, description = "Debit outcome", body = DebitResponse),
        (status = 400, description = "Invalid amount or reason", body = ApiErrorResponse),
        (status = 500, description = "Internal server error", body = ApiErrorResponse),
    )
)]
pub async fn debit(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<DebitRequest>,
) -> Result<Json<DebitResponse>, ApiError> {
    req.validate().map_err(|e| {
        warn!("debit: validation failed: {}", e);
        ApiError::Validation(e)
    })?;

    let outcome = state
        .wallets
        .debit(user_id, req.amount, &req.reason, req.related_id)?;

    let response = match outcome {
        DebitOutcome::Applied { balance } => DebitResponse {
            success: true,
            balance: Some(balance),
        },
        DebitOutcome::InsufficientBalance { .. } => DebitResponse {
            success: false,
            balance: None,
        },
    };

    Ok(Json(response))
}
