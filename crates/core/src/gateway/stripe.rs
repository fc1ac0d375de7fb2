use pointbank_primitives::config::StripeInfo;
use pointbank_primitives::error::ApiError;
use pointbank_primitives::models::CurrencyCode;
use secrecy::ExposeSecret;
use std::collections::HashMap;
use stripe::{Client, CreatePaymentIntent, PaymentIntent};

use crate::gateway::{PaymentGateway, PaymentIntentHandle};

#[derive(Clone)]
pub struct StripeGateway {
    client: Client,
}

impl StripeGateway {
    pub fn new(config: &StripeInfo) -> Self {
        let client = Client::new(config.secret_key.expose_secret());
        Self { client }
    }
}

impl PaymentGateway for StripeGateway {
    fn name(&self) -> &'static str {
        "stripe"
    }

    async fn create_payment_intent(
        &self,
        amount: i64,
        currency: CurrencyCode,
        metadata: HashMap<String, String>,
        payment_method_ref: Option<&str>,
    ) -> Result<PaymentIntentHandle, ApiError> {
        let stripe_currency = currency
            .to_string()
            .to_lowercase()
            .parse::<stripe::Currency>()
            .map_err(|_| ApiError::Payment(format!("Unsupported Stripe currency: {}", currency)))?;

        let mut params = CreatePaymentIntent::new(amount, stripe_currency);
        params.metadata = Some(metadata);
        if let Some(pm) = payment_method_ref {
            params.payment_method = Some(
                pm.parse()
                    .map_err(|_| ApiError::Payment(format!("Invalid payment method: {}", pm)))?,
            );
        }

        let intent = PaymentIntent::create(&self.client, params)
            .await
            .map_err(|e| ApiError::Payment(format!("Stripe error: {}", e)))?;

        Ok(PaymentIntentHandle {
            provider_tx_id: intent.id.to_string(),
            client_secret: intent.client_secret,
        })
    }
}
