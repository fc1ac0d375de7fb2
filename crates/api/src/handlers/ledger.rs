use axum::extract::{Path, State};
use axum::Json;
use pointbank_core::app_state::AppState;
use pointbank_primitives::error::{ApiError, ApiErrorResponse};
use pointbank_primitives::models::{LedgerEntryDto, LedgerResponse};
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/wallets/{user_id}/ledger",
    tag = "Wallet",
    summary = "Point movement history for a user",
    description = "Append-only audit trail of credits and debits, most recent first.",
    responses(
        (status = 200, description = "Ledger entries", body = LedgerResponse),
        (status = 500, description = "Internal server error", body = ApiErrorResponse),
    )
)]
pub async fn ledger(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<LedgerResponse>, ApiError> {
    let entries = state.wallets.ledger_entries(user_id)?;

    Ok(Json(LedgerResponse {
        user_id,
        entries: entries.into_iter().map(LedgerEntryDto::from).collect(),
    }))
}
