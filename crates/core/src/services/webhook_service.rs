use axum::body::Bytes;
use http::HeaderMap;
use pointbank_primitives::config::StripeInfo;
use pointbank_primitives::error::ApiError;
use secrecy::ExposeSecret;
use stripe::{Event, EventObject, EventType, Webhook};
use tracing::info;

use crate::gateway::PaymentGateway;
use crate::services::purchase_service::PurchaseManager;
use crate::store::LedgerStore;

pub enum WebhookOutcome {
    Processed,
    Ignored,
}

pub struct StripeWebhook;

impl StripeWebhook {
    /// Verifies the webhook signature against the signing secret and
    /// parses the event out of the raw payload.
    pub fn construct_event(
        config: &StripeInfo,
        headers: &HeaderMap,
        body: &Bytes,
    ) -> Result<Event, ApiError> {
        let signature = headers
            .get("stripe-signature")
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::Payment("Missing Stripe signature".into()))?;

        let payload = std::str::from_utf8(body)
            .map_err(|_| ApiError::Payment("Invalid UTF-8 payload".into()))?;

        Webhook::construct_event(payload, signature, config.webhook_secret.expose_secret())
            .map_err(ApiError::from)
    }

    pub fn handle_event<S: LedgerStore, G: PaymentGateway>(
        purchases: &PurchaseManager<S, G>,
        event: Event,
    ) -> Result<WebhookOutcome, ApiError> {
        match event.type_ {
            EventType::PaymentIntentSucceeded => {
                let EventObject::PaymentIntent(intent) = event.data.object else {
                    return Err(ApiError::Payment("Invalid PaymentIntent object".into()));
                };

                purchases.handle_purchase_success(intent.id.as_str())?;
                Ok(WebhookOutcome::Processed)
            }

            EventType::PaymentIntentPaymentFailed | EventType::PaymentIntentCanceled => {
                let EventObject::PaymentIntent(intent) = event.data.object else {
                    return Err(ApiError::Payment("Invalid PaymentIntent object".into()));
                };

                purchases.handle_purchase_failure(intent.id.as_str())?;
                Ok(WebhookOutcome::Processed)
            }

            other => {
                info!(event_type = %other, "unhandled Stripe event type");
                Ok(WebhookOutcome::Ignored)
            }
        }
    }
}
