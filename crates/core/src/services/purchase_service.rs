use pointbank_primitives::error::ApiError;
use pointbank_primitives::models::{
    CurrencyCode, NewPurchase, Purchase, PurchaseIntentRequest, PurchaseIntentResponse,
    PurchaseStatus,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::gateway::PaymentGateway;
use crate::services::wallet_service::WalletManager;
use crate::store::LedgerStore;

/// Maps a requested point amount to the price charged through the
/// provider. Product has not defined a pricing table yet, so the default
/// is a pass-through.
pub trait PricingPolicy: Send + Sync + 'static {
    fn price(&self, points: i64, currency: CurrencyCode) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughPricing;

impl PricingPolicy for PassThroughPricing {
    fn price(&self, points: i64, _currency: CurrencyCode) -> i64 {
        points
    }
}

/// Drives the purchase state machine: `Pending -> Completed | Failed`,
/// terminal once non-pending. Webhook confirmations are made idempotent by
/// re-checking `status == Pending` under the purchase row lock inside the
/// finalizing transaction.
#[derive(Clone)]
pub struct PurchaseManager<S: LedgerStore, G: PaymentGateway> {
    store: S,
    gateway: G,
    pricing: Arc<dyn PricingPolicy>,
}

impl<S: LedgerStore, G: PaymentGateway> PurchaseManager<S, G> {
    pub fn new(store: S, gateway: G) -> Self {
        Self::with_pricing(store, gateway, Arc::new(PassThroughPricing))
    }

    pub fn with_pricing(store: S, gateway: G, pricing: Arc<dyn PricingPolicy>) -> Self {
        Self {
            store,
            gateway,
            pricing,
        }
    }

    /// Creates a pending purchase, asks the provider for a payable intent
    /// and stores the provider transaction id on the row. A provider
    /// failure moves the purchase to `Failed` before the error is returned,
    /// so the caller is never left with a pending row whose provider call
    /// is known dead.
    pub async fn create_purchase_intent(
        &self,
        user_id: Uuid,
        req: PurchaseIntentRequest,
    ) -> Result<PurchaseIntentResponse, ApiError> {
        if req.amount <= 0 {
            return Err(ApiError::BadRequest(format!(
                "Amount must be a positive integer, got {}",
                req.amount
            )));
        }

        let price = self.pricing.price(req.amount, req.currency);

        let purchase = self.store.transaction(|conn| {
            let wallet = S::wallet_for_update(conn, user_id)?;
            S::insert_purchase(
                conn,
                NewPurchase {
                    user_id,
                    wallet_id: wallet.id,
                    points: req.amount,
                    currency: req.currency,
                    price,
                    status: PurchaseStatus::Pending,
                    provider: self.gateway.name().to_string(),
                },
            )
        })?;

        let mut metadata = HashMap::new();
        metadata.insert("purchase_id".to_string(), purchase.id.to_string());

        match self
            .gateway
            .create_payment_intent(price, req.currency, metadata, req.payment_method_ref.as_deref())
            .await
        {
            Ok(handle) => {
                self.store.transaction(|conn| {
                    S::set_purchase_provider_tx(conn, purchase.id, &handle.provider_tx_id)
                })?;
                info!(purchase_id = %purchase.id, provider_tx_id = %handle.provider_tx_id, "purchase intent created");

                Ok(PurchaseIntentResponse {
                    purchase_id: purchase.id,
                    status: PurchaseStatus::Pending,
                    client_secret: handle.client_secret,
                })
            }
            Err(err) => {
                error!(purchase_id = %purchase.id, %err, "provider intent creation failed");
                self.store.transaction(|conn| {
                    S::set_purchase_status(conn, purchase.id, PurchaseStatus::Failed)
                })?;

                Err(ApiError::Payment(format!(
                    "Payment intent creation for purchase {} failed: {}",
                    purchase.id, err
                )))
            }
        }
    }

    /// Provider confirmed the payment. Repeated or concurrent deliveries
    /// for the same transaction id are safe: only one transaction can
    /// observe the row in `Pending` and consume it; everyone else no-ops.
    pub fn handle_purchase_success(&self, provider_tx_id: &str) -> Result<(), ApiError> {
        self.store.transaction(|conn| {
            let Some(purchase) = S::purchase_by_provider_tx_for_update(conn, provider_tx_id)?
            else {
                info!(provider_tx_id, "success confirmation for unknown transaction, ignoring");
                return Ok(());
            };

            if purchase.status != PurchaseStatus::Pending {
                info!(purchase_id = %purchase.id, status = ?purchase.status, "purchase already finalized, ignoring");
                return Ok(());
            }

            S::set_purchase_status(conn, purchase.id, PurchaseStatus::Completed)?;
            WalletManager::<S>::credit_in_tx(
                conn,
                purchase.user_id,
                purchase.points,
                "point purchase",
                Some(purchase.id),
            )?;

            info!(purchase_id = %purchase.id, points = purchase.points, "purchase completed, wallet credited");
            Ok(())
        })
    }

    /// Provider reported a failed payment. A completed purchase is never
    /// downgraded; no ledger entry is produced for a failure.
    pub fn handle_purchase_failure(&self, provider_tx_id: &str) -> Result<(), ApiError> {
        self.store.transaction(|conn| {
            let Some(purchase) = S::purchase_by_provider_tx_for_update(conn, provider_tx_id)?
            else {
                info!(provider_tx_id, "failure confirmation for unknown transaction, ignoring");
                return Ok(());
            };

            match purchase.status {
                PurchaseStatus::Completed => {
                    warn!(purchase_id = %purchase.id, "failure confirmation for completed purchase, ignoring");
                    Ok(())
                }
                PurchaseStatus::Failed => Ok(()),
                PurchaseStatus::Pending => {
                    S::set_purchase_status(conn, purchase.id, PurchaseStatus::Failed)?;
                    info!(purchase_id = %purchase.id, "purchase marked failed");
                    Ok(())
                }
            }
        })
    }

    pub fn purchase(&self, id: Uuid) -> Result<Option<Purchase>, ApiError> {
        self.store.transaction(|conn| S::purchase_by_id(conn, id))
    }

    pub fn purchase_history(&self, user_id: Uuid) -> Result<Vec<Purchase>, ApiError> {
        self.store
            .transaction(|conn| S::purchases_by_user(conn, user_id))
    }
}
