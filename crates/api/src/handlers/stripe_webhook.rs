use axum::body::Bytes;
use axum::extract::State;
use http::{HeaderMap, StatusCode};
use pointbank_core::app_state::AppState;
use pointbank_core::services::{StripeWebhook, WebhookOutcome};
use pointbank_primitives::error::{ApiError, ApiErrorResponse};
use std::sync::Arc;
use tracing::info;

#[utoipa::path(
    post,
    path = "/api/webhooks/stripe",
    tag = "Webhooks",
    summary = "Receive Stripe payment confirmations",
    description = "Verifies the `Stripe-Signature` header, then finalizes the matching purchase. \
                   Stripe delivers events at least once and out of order; duplicate confirmations \
                   are deliberate no-ops and still acknowledged with 200.",
    request_body(content = String, description = "Raw Stripe event payload"),
    responses(
        (status = 200, description = "Event accepted (processed, duplicate, or ignored)"),
        (status = 400, description = "Bad signature or malformed payload", body = ApiErrorResponse),
    ),
    security(()),
)]
pub async fn stripe_webhook(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let event = StripeWebhook::construct_event(&state.config.stripe, &headers, &body)?;

    match StripeWebhook::handle_event(&state.purchases, event)? {
        WebhookOutcome::Processed => info!("Stripe webhook processed"),
        WebhookOutcome::Ignored => info!("Stripe webhook ignored"),
    }

    Ok(StatusCode::OK)
}
