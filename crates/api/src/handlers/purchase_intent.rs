use axum::extract::{Path, State};
use axum::Json;
use pointbank_core::app_state::AppState;
use pointbank_primitives::error::{ApiError, ApiErrorResponse};
use pointbank_primitives::models::{PurchaseIntentRequest, PurchaseIntentResponse};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/purchases/{user_id}",
    tag = "Purchases",
    summary = "Create a point purchase intent",
    description = "Creates a pending purchase and a payable intent at the payment provider. \
                   The wallet is only credited once the provider confirms the payment via webhook. \
                   If the provider call fails, the purchase ends in FAILED and the error is returned.",
    request_body = PurchaseIntentRequest,
    responses(
        (status = 200, description = "Pending purchase with client secret", body = PurchaseIntentResponse),
        (status = 400, description = "Invalid amount or currency", body = ApiErrorResponse),
        (status = 502, description = "Payment provider rejected the intent", body = ApiErrorResponse),
    )
)]
pub async fn create_purchase_intent(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<PurchaseIntentRequest>,
) -> Result<Json<PurchaseIntentResponse>, ApiError> {
    req.validate().map_err(|e| {
        warn!("purchase: validation failed: {}", e);
        ApiError::Validation(e)
    })?;

    let response = state.purchases.create_purchase_intent(user_id, req).await?;

    Ok(Json(response))
}
