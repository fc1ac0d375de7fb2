use axum::extract::{Path, State};
use axum::Json;
use pointbank_core::app_state::AppState;
use pointbank_primitives::error::{ApiError, ApiErrorResponse};
use pointbank_primitives::models::{WithdrawRequest, WithdrawResponse};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/withdrawals/{user_id}",
    tag = "Withdrawals",
    summary = "Request a point withdrawal",
    description = "Validates the balance, then creates the withdrawal row and the ledger debit \
                   in one transaction. Insufficient balance creates nothing.",
    request_body = WithdrawRequest,
    responses(
        (status = 200, description = "Withdrawal created in REQUESTED", body = WithdrawResponse),
        (status = 400, description = "Invalid amount or destination", body = ApiErrorResponse),
        (status = 409, description = "Insufficient balance", body = ApiErrorResponse),
    )
)]
pub async fn request_withdrawal(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<WithdrawRequest>,
) -> Result<Json<WithdrawResponse>, ApiError> {
    req.validate().map_err(|e| {
        warn!("withdrawal: validation failed: {}", e);
        ApiError::Validation(e)
    })?;

    let withdrawal = state
        .withdrawals
        .request_withdrawal(user_id, req.amount, &req.destination_ref)?;

    Ok(Json(WithdrawResponse {
        withdrawal_id: withdrawal.id,
        status: withdrawal.status,
        amount: withdrawal.amount,
    }))
}
