mod common;

use common::{ledger_sum, seed_balance, test_context};
use pointbank_primitives::error::ApiError;
use pointbank_primitives::models::{LedgerEntryKind, WithdrawalStatus};
use uuid::Uuid;

#[test]
fn insufficient_balance_creates_nothing() {
    let ctx = test_context();
    let user_id = Uuid::new_v4();

    let err = ctx
        .withdrawals
        .request_withdrawal(user_id, 100, "bank:main")
        .unwrap_err();

    assert!(matches!(
        err,
        ApiError::InsufficientBalance {
            requested: 100,
            available: 0
        }
    ));
    assert!(ctx.withdrawals.withdrawal_history(user_id).unwrap().is_empty());
    assert!(ctx.wallets.ledger_entries(user_id).unwrap().is_empty());
    assert_eq!(ctx.wallets.balance(user_id).unwrap(), 0);
}

#[test]
fn withdrawal_creates_row_and_debit_together() {
    let ctx = test_context();
    let user_id = Uuid::new_v4();
    seed_balance(&ctx.store, user_id, 500);

    let withdrawal = ctx
        .withdrawals
        .request_withdrawal(user_id, 300, "bank:main")
        .unwrap();

    assert_eq!(withdrawal.status, WithdrawalStatus::Requested);
    assert_eq!(withdrawal.amount, 300);
    assert_eq!(ctx.wallets.balance(user_id).unwrap(), 200);

    let entries = ctx.wallets.ledger_entries(user_id).unwrap();
    let debit = &entries[0];
    assert_eq!(debit.amount, -300);
    assert_eq!(debit.kind, LedgerEntryKind::Debit);
    assert_eq!(debit.related_id, Some(withdrawal.id));

    assert_eq!(ctx.wallets.balance(user_id).unwrap(), ledger_sum(&ctx.wallets, user_id));
}

#[test]
fn withdrawal_can_drain_the_exact_balance() {
    let ctx = test_context();
    let user_id = Uuid::new_v4();
    seed_balance(&ctx.store, user_id, 300);

    ctx.withdrawals
        .request_withdrawal(user_id, 300, "bank:main")
        .unwrap();

    assert_eq!(ctx.wallets.balance(user_id).unwrap(), 0);
}

#[test]
fn withdrawal_rejects_non_positive_amounts() {
    let ctx = test_context();
    let user_id = Uuid::new_v4();
    seed_balance(&ctx.store, user_id, 500);

    for amount in [0, -10] {
        let err = ctx
            .withdrawals
            .request_withdrawal(user_id, amount, "bank:main")
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)), "amount {}", amount);
    }
    assert_eq!(ctx.wallets.balance(user_id).unwrap(), 500);
}

#[test]
fn history_is_most_recent_first() {
    let ctx = test_context();
    let user_id = Uuid::new_v4();
    seed_balance(&ctx.store, user_id, 1000);

    let first = ctx
        .withdrawals
        .request_withdrawal(user_id, 100, "bank:main")
        .unwrap();
    let second = ctx
        .withdrawals
        .request_withdrawal(user_id, 200, "bank:main")
        .unwrap();

    let history = ctx.withdrawals.withdrawal_history(user_id).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].id, second.id);
    assert_eq!(history[1].id, first.id);
}

#[test]
fn back_office_transitions_follow_the_state_machine() {
    let ctx = test_context();
    let user_id = Uuid::new_v4();
    seed_balance(&ctx.store, user_id, 500);

    let withdrawal = ctx
        .withdrawals
        .request_withdrawal(user_id, 300, "bank:main")
        .unwrap();
    assert!(withdrawal.processed_at.is_none());

    // Requested -> Completed skips Processing and is rejected.
    let err = ctx
        .withdrawals
        .update_status(withdrawal.id, WithdrawalStatus::Completed)
        .unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));

    let processing = ctx
        .withdrawals
        .update_status(withdrawal.id, WithdrawalStatus::Processing)
        .unwrap();
    assert_eq!(processing.status, WithdrawalStatus::Processing);
    assert!(processing.processed_at.is_none());

    let completed = ctx
        .withdrawals
        .update_status(withdrawal.id, WithdrawalStatus::Completed)
        .unwrap();
    assert_eq!(completed.status, WithdrawalStatus::Completed);
    assert!(completed.processed_at.is_some());

    // Terminal states are immutable.
    let err = ctx
        .withdrawals
        .update_status(withdrawal.id, WithdrawalStatus::Failed)
        .unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
}

#[test]
fn unknown_withdrawal_update_is_not_found() {
    let ctx = test_context();

    let err = ctx
        .withdrawals
        .update_status(Uuid::new_v4(), WithdrawalStatus::Processing)
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}
