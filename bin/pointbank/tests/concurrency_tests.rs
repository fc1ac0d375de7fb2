mod common;

use common::{ledger_sum, seed_balance, test_context};
use pointbank_primitives::error::ApiError;
use pointbank_primitives::models::{CurrencyCode, PurchaseIntentRequest, PurchaseStatus};
use std::thread;
use uuid::Uuid;

#[test]
fn concurrent_withdrawals_cannot_overdraft() {
    let ctx = test_context();
    let user_id = Uuid::new_v4();
    seed_balance(&ctx.store, user_id, 300);

    let handles: Vec<_> = (0..2)
        .map(|_| {
            let withdrawals = ctx.withdrawals.clone();
            thread::spawn(move || withdrawals.request_withdrawal(user_id, 300, "bank:main"))
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("withdrawal thread panicked"))
        .collect();

    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1);
    assert!(results.iter().any(|r| matches!(
        r,
        Err(ApiError::InsufficientBalance { .. })
    )));

    assert_eq!(ctx.wallets.balance(user_id).unwrap(), 0);
    assert_eq!(ctx.withdrawals.withdrawal_history(user_id).unwrap().len(), 1);
    assert_eq!(ledger_sum(&ctx.wallets, user_id), 0);
}

#[tokio::test]
async fn concurrent_success_confirmations_credit_once() {
    let ctx = test_context();
    let user_id = Uuid::new_v4();

    let response = ctx
        .purchases
        .create_purchase_intent(
            user_id,
            PurchaseIntentRequest {
                amount: 500,
                currency: CurrencyCode::JPY,
                payment_method_ref: None,
            },
        )
        .await
        .unwrap();
    let tx_id = ctx
        .purchases
        .purchase(response.purchase_id)
        .unwrap()
        .unwrap()
        .provider_tx_id
        .unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let purchases = ctx.purchases.clone();
            let tx_id = tx_id.clone();
            thread::spawn(move || purchases.handle_purchase_success(&tx_id))
        })
        .collect();

    for handle in handles {
        handle.join().expect("webhook thread panicked").unwrap();
    }

    let purchase = ctx.purchases.purchase(response.purchase_id).unwrap().unwrap();
    assert_eq!(purchase.status, PurchaseStatus::Completed);
    assert_eq!(ctx.wallets.balance(user_id).unwrap(), 500);
    assert_eq!(ctx.wallets.ledger_entries(user_id).unwrap().len(), 1);
}

#[test]
fn concurrent_first_access_creates_a_single_wallet() {
    let ctx = test_context();
    let user_id = Uuid::new_v4();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let wallets = ctx.wallets.clone();
            thread::spawn(move || wallets.get_or_create_wallet(user_id))
        })
        .collect();

    let ids: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("wallet thread panicked").unwrap().id)
        .collect();

    assert!(ids.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn interleaved_debits_never_overspend() {
    let ctx = test_context();
    let user_id = Uuid::new_v4();
    seed_balance(&ctx.store, user_id, 1000);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let wallets = ctx.wallets.clone();
            thread::spawn(move || wallets.debit(user_id, 300, "spend", None))
        })
        .collect();

    let applied = handles
        .into_iter()
        .map(|h| h.join().expect("debit thread panicked").unwrap())
        .filter(|o| matches!(o, pointbank_core::services::DebitOutcome::Applied { .. }))
        .count();

    // 1000 points cover exactly three 300-point debits.
    assert_eq!(applied, 3);
    assert_eq!(ctx.wallets.balance(user_id).unwrap(), 100);
    assert_eq!(ledger_sum(&ctx.wallets, user_id), 100);
}
