mod common;

use common::{ledger_sum, test_context, FailingGateway, MockGateway};
use pointbank_core::services::{PricingPolicy, PurchaseManager};
use pointbank_core::store::MemLedgerStore;
use pointbank_primitives::error::ApiError;
use pointbank_primitives::models::{
    CurrencyCode, LedgerEntryKind, PurchaseIntentRequest, PurchaseStatus,
};
use std::sync::Arc;
use uuid::Uuid;

fn intent_request(amount: i64) -> PurchaseIntentRequest {
    PurchaseIntentRequest {
        amount,
        currency: CurrencyCode::JPY,
        payment_method_ref: None,
    }
}

#[tokio::test]
async fn create_purchase_intent_returns_pending_with_secret() {
    let ctx = test_context();
    let user_id = Uuid::new_v4();

    let response = ctx
        .purchases
        .create_purchase_intent(user_id, intent_request(500))
        .await
        .unwrap();

    assert_eq!(response.status, PurchaseStatus::Pending);
    assert!(response.client_secret.is_some());

    let purchase = ctx.purchases.purchase(response.purchase_id).unwrap().unwrap();
    assert_eq!(purchase.points, 500);
    assert_eq!(purchase.price, 500); // pass-through pricing
    assert_eq!(purchase.provider, "mock");
    assert!(purchase.provider_tx_id.is_some());

    // No credit before the provider confirms.
    assert_eq!(ctx.wallets.balance(user_id).unwrap(), 0);
}

#[tokio::test]
async fn purchase_success_credits_wallet_exactly_once() {
    let ctx = test_context();
    let user_id = Uuid::new_v4();

    let response = ctx
        .purchases
        .create_purchase_intent(user_id, intent_request(500))
        .await
        .unwrap();
    let purchase = ctx.purchases.purchase(response.purchase_id).unwrap().unwrap();
    let tx_id = purchase.provider_tx_id.unwrap();

    ctx.purchases.handle_purchase_success(&tx_id).unwrap();

    let purchase = ctx.purchases.purchase(response.purchase_id).unwrap().unwrap();
    assert_eq!(purchase.status, PurchaseStatus::Completed);
    assert_eq!(ctx.wallets.balance(user_id).unwrap(), 500);

    let entries = ctx.wallets.ledger_entries(user_id).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].amount, 500);
    assert_eq!(entries[0].kind, LedgerEntryKind::Credit);
    assert_eq!(entries[0].related_id, Some(response.purchase_id));

    // Redelivery of the same confirmation is a no-op.
    ctx.purchases.handle_purchase_success(&tx_id).unwrap();
    assert_eq!(ctx.wallets.balance(user_id).unwrap(), 500);
    assert_eq!(ctx.wallets.ledger_entries(user_id).unwrap().len(), 1);
}

#[tokio::test]
async fn purchase_failure_marks_failed_without_ledger_entry() {
    let ctx = test_context();
    let user_id = Uuid::new_v4();

    let response = ctx
        .purchases
        .create_purchase_intent(user_id, intent_request(300))
        .await
        .unwrap();
    let tx_id = ctx
        .purchases
        .purchase(response.purchase_id)
        .unwrap()
        .unwrap()
        .provider_tx_id
        .unwrap();

    ctx.purchases.handle_purchase_failure(&tx_id).unwrap();

    let purchase = ctx.purchases.purchase(response.purchase_id).unwrap().unwrap();
    assert_eq!(purchase.status, PurchaseStatus::Failed);
    assert!(ctx.wallets.ledger_entries(user_id).unwrap().is_empty());

    // A late success confirmation must not resurrect a failed purchase.
    ctx.purchases.handle_purchase_success(&tx_id).unwrap();
    assert_eq!(ctx.wallets.balance(user_id).unwrap(), 0);
}

#[tokio::test]
async fn purchase_failure_never_downgrades_a_completed_purchase() {
    let ctx = test_context();
    let user_id = Uuid::new_v4();

    let response = ctx
        .purchases
        .create_purchase_intent(user_id, intent_request(500))
        .await
        .unwrap();
    let tx_id = ctx
        .purchases
        .purchase(response.purchase_id)
        .unwrap()
        .unwrap()
        .provider_tx_id
        .unwrap();

    ctx.purchases.handle_purchase_success(&tx_id).unwrap();
    ctx.purchases.handle_purchase_failure(&tx_id).unwrap();

    let purchase = ctx.purchases.purchase(response.purchase_id).unwrap().unwrap();
    assert_eq!(purchase.status, PurchaseStatus::Completed);
    assert_eq!(ctx.wallets.balance(user_id).unwrap(), 500);
}

#[test]
fn confirmations_for_unknown_transactions_are_noops() {
    let ctx = test_context();

    ctx.purchases.handle_purchase_success("unknown_tx").unwrap();
    ctx.purchases.handle_purchase_failure("unknown_tx").unwrap();
}

#[tokio::test]
async fn provider_error_fails_the_purchase_and_propagates() {
    let store = MemLedgerStore::new();
    let purchases = PurchaseManager::new(store.clone(), FailingGateway);
    let wallets = pointbank_core::services::WalletManager::new(store);
    let user_id = Uuid::new_v4();

    let err = purchases
        .create_purchase_intent(user_id, intent_request(500))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Payment(_)));

    let history = purchases.purchase_history(user_id).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].status, PurchaseStatus::Failed);
    assert!(history[0].provider_tx_id.is_none());
    assert!(wallets.ledger_entries(user_id).unwrap().is_empty());
}

#[tokio::test]
async fn create_purchase_intent_rejects_non_positive_amount() {
    let ctx = test_context();
    let user_id = Uuid::new_v4();

    let err = ctx
        .purchases
        .create_purchase_intent(user_id, intent_request(0))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
    assert!(ctx.purchases.purchase_history(user_id).unwrap().is_empty());
}

#[tokio::test]
async fn pricing_policy_is_pluggable() {
    struct DoublePricing;
    impl PricingPolicy for DoublePricing {
        fn price(&self, points: i64, _currency: CurrencyCode) -> i64 {
            points * 2
        }
    }

    let store = MemLedgerStore::new();
    let purchases =
        PurchaseManager::with_pricing(store, MockGateway::new(), Arc::new(DoublePricing));
    let user_id = Uuid::new_v4();

    let response = purchases
        .create_purchase_intent(user_id, intent_request(500))
        .await
        .unwrap();

    let purchase = purchases.purchase(response.purchase_id).unwrap().unwrap();
    assert_eq!(purchase.points, 500);
    assert_eq!(purchase.price, 1000);
}

#[tokio::test]
async fn completed_purchase_keeps_ledger_in_sync() {
    let ctx = test_context();
    let user_id = Uuid::new_v4();

    for amount in [500, 120] {
        let response = ctx
            .purchases
            .create_purchase_intent(user_id, intent_request(amount))
            .await
            .unwrap();
        let tx_id = ctx
            .purchases
            .purchase(response.purchase_id)
            .unwrap()
            .unwrap()
            .provider_tx_id
            .unwrap();
        ctx.purchases.handle_purchase_success(&tx_id).unwrap();
    }

    let balance = ctx.wallets.balance(user_id).unwrap();
    assert_eq!(balance, 620);
    assert_eq!(balance, ledger_sum(&ctx.wallets, user_id));
}
