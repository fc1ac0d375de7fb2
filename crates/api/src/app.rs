use axum::routing::{get, post};
use axum::{Json, Router};
use pointbank_core::app_state::AppState;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::handlers;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health,
        handlers::balance::balance,
        handlers::debit::debit,
        handlers::ledger::ledger,
        handlers::purchase_intent::create_purchase_intent,
        handlers::stripe_webhook::stripe_webhook,
        handlers::withdraw::request_withdrawal,
        handlers::withdrawal_history::withdrawal_history,
    ),
    components(schemas(
        pointbank_primitives::models::BalanceResponse,
        pointbank_primitives::models::DebitRequest,
        pointbank_primitives::models::DebitResponse,
        pointbank_primitives::models::LedgerEntryDto,
        pointbank_primitives::models::LedgerResponse,
        pointbank_primitives::models::PurchaseIntentRequest,
        pointbank_primitives::models::PurchaseIntentResponse,
        pointbank_primitives::models::WithdrawRequest,
        pointbank_primitives::models::WithdrawResponse,
        pointbank_primitives::models::WithdrawalDto,
        pointbank_primitives::models::WithdrawalHistoryResponse,
        pointbank_primitives::error::ApiErrorResponse,
    )),
    tags(
        (name = "Wallet", description = "Balance and point ledger"),
        (name = "Purchases", description = "Point purchase intents"),
        (name = "Withdrawals", description = "Payout requests"),
        (name = "Webhooks", description = "Payment provider callbacks"),
    )
)]
pub struct ApiDoc;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health::health))
        .route(
            "/api/wallets/{user_id}/balance",
            get(handlers::balance::balance),
        )
        .route("/api/wallets/{user_id}/debit", post(handlers::debit::debit))
        .route("/api/wallets/{user_id}/ledger", get(handlers::ledger::ledger))
        .route(
            "/api/purchases/{user_id}",
            post(handlers::purchase_intent::create_purchase_intent),
        )
        .route(
            "/api/webhooks/stripe",
            post(handlers::stripe_webhook::stripe_webhook),
        )
        .route(
            "/api/withdrawals/{user_id}",
            post(handlers::withdraw::request_withdrawal)
                .get(handlers::withdrawal_history::withdrawal_history),
        )
        .route(
            "/api/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .with_state(state)
}
