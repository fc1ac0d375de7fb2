use axum::extract::{Path, State};
use axum::Json;
use pointbank_core::app_state::AppState;
use pointbank_primitives::error::{ApiError, ApiErrorResponse};
use pointbank_primitives::models::{WithdrawalDto, WithdrawalHistoryResponse};
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/withdrawals/{user_id}",
    tag = "Withdrawals",
    summary = "Withdrawal history for a user",
    description = "All withdrawals for the user, most recent first.",
    responses(
        (status = 200, description = "Withdrawal history", body = WithdrawalHistoryResponse),
        (status = 500, description = "Internal server error", body = ApiErrorResponse),
    )
)]
pub async fn withdrawal_history(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<WithdrawalHistoryResponse>, ApiError> {
    let withdrawals = state.withdrawals.withdrawal_history(user_id)?;

    Ok(Json(WithdrawalHistoryResponse {
        user_id,
        withdrawals: withdrawals.into_iter().map(WithdrawalDto::from).collect(),
    }))
}
