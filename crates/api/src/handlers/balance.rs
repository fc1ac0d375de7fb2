use axum::extract::{Path, State};
use axum::Json;
use pointbank_core::app_state::AppState;
use pointbank_primitives::error::{ApiError, ApiErrorResponse};
use pointbank_primitives::models::BalanceResponse;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/wallets/{user_id}/balance",
    tag = "Wallet",
    summary = "Current point balance for a user",
    description = "Returns the wallet balance, creating an empty wallet on first access.",
    responses(
        (status = 200, description = "Current balance", body = BalanceResponse),
        (status = 500, description = "Internal server error", body = ApiErrorResponse),
    )
)]
pub async fn balance(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<BalanceResponse>, ApiError> {
    let balance = state.wallets.balance(user_id)?;

    Ok(Json(BalanceResponse { user_id, balance }))
}
