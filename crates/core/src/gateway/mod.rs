pub mod stripe;

pub use self::stripe::StripeGateway;

use pointbank_primitives::error::ApiError;
use pointbank_primitives::models::CurrencyCode;
use std::collections::HashMap;

/// What the provider hands back when a payable intent is created.
#[derive(Debug, Clone)]
pub struct PaymentIntentHandle {
    /// Provider transaction id, later echoed by the confirmation webhook.
    pub provider_tx_id: String,
    /// Client-facing secret needed to complete payment, if the provider
    /// issues one.
    pub client_secret: Option<String>,
}

/// Outbound boundary to the payment provider. Confirmations come back
/// asynchronously through the webhook, keyed by `provider_tx_id`.
#[allow(async_fn_in_trait)]
pub trait PaymentGateway: Clone + Send + Sync + 'static {
    /// Provider name recorded on the purchase row.
    fn name(&self) -> &'static str;

    async fn create_payment_intent(
        &self,
        amount: i64,
        currency: CurrencyCode,
        metadata: HashMap<String, String>,
        payment_method_ref: Option<&str>,
    ) -> Result<PaymentIntentHandle, ApiError>;
}
