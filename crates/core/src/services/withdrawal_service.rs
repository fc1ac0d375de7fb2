use chrono::Utc;
use pointbank_primitives::error::ApiError;
use pointbank_primitives::models::{NewWithdrawal, Withdrawal, WithdrawalStatus};
use tracing::info;
use uuid::Uuid;

use crate::services::wallet_service::{DebitOutcome, WalletManager};
use crate::store::LedgerStore;

/// Creates withdrawal requests and exposes their history. The withdrawal
/// row and its ledger debit are written in one transaction, so a
/// "requested" withdrawal can never coexist with still-spendable points.
#[derive(Clone)]
pub struct WithdrawalManager<S: LedgerStore> {
    store: S,
}

impl<S: LedgerStore> WithdrawalManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn request_withdrawal(
        &self,
        user_id: Uuid,
        amount: i64,
        destination_ref: &str,
    ) -> Result<Withdrawal, ApiError> {
        if amount <= 0 {
            return Err(ApiError::BadRequest(format!(
                "Amount must be a positive integer, got {}",
                amount
            )));
        }

        let withdrawal = self.store.transaction(|conn| {
            let wallet = S::wallet_for_update(conn, user_id)?;
            if wallet.balance < amount {
                return Err(ApiError::InsufficientBalance {
                    requested: amount,
                    available: wallet.balance,
                });
            }

            let withdrawal = S::insert_withdrawal(
                conn,
                NewWithdrawal {
                    user_id,
                    wallet_id: wallet.id,
                    amount,
                    destination_ref: destination_ref.to_string(),
                    status: WithdrawalStatus::Requested,
                },
            )?;

            // The balance was checked above under the same wallet lock; a
            // failing debit here is a logic defect, not a retryable state.
            match WalletManager::<S>::debit_in_tx(
                conn,
                user_id,
                amount,
                "withdrawal request",
                Some(withdrawal.id),
            )? {
                DebitOutcome::Applied { .. } => Ok(withdrawal),
                DebitOutcome::InsufficientBalance { balance } => Err(ApiError::Invariant(format!(
                    "debit for withdrawal {} reported insufficient balance {} after a passing check",
                    withdrawal.id, balance
                ))),
            }
        })?;

        info!(withdrawal_id = %withdrawal.id, %user_id, amount, "withdrawal requested");
        Ok(withdrawal)
    }

    pub fn withdrawal_history(&self, user_id: Uuid) -> Result<Vec<Withdrawal>, ApiError> {
        self.store
            .transaction(|conn| S::withdrawals_by_user(conn, user_id))
    }

    /// Back-office transition: `Requested -> Processing | Failed`,
    /// `Processing -> Completed | Failed`. Terminal states are immutable;
    /// `processed_at` is stamped on the terminal transitions.
    pub fn update_status(
        &self,
        id: Uuid,
        next: WithdrawalStatus,
    ) -> Result<Withdrawal, ApiError> {
        self.store.transaction(|conn| {
            let withdrawal = S::withdrawal_by_id_for_update(conn, id)?
                .ok_or_else(|| ApiError::NotFound(format!("withdrawal {}", id)))?;

            let allowed = matches!(
                (withdrawal.status, next),
                (WithdrawalStatus::Requested, WithdrawalStatus::Processing)
                    | (WithdrawalStatus::Requested, WithdrawalStatus::Failed)
                    | (WithdrawalStatus::Processing, WithdrawalStatus::Completed)
                    | (WithdrawalStatus::Processing, WithdrawalStatus::Failed)
            );
            if !allowed {
                return Err(ApiError::BadRequest(format!(
                    "Illegal withdrawal transition {:?} -> {:?}",
                    withdrawal.status, next
                )));
            }

            let processed_at = next.is_terminal().then(Utc::now);
            S::set_withdrawal_status(conn, id, next, processed_at)?;

            S::withdrawal_by_id_for_update(conn, id)?
                .ok_or_else(|| ApiError::Internal(format!("withdrawal {} vanished mid-update", id)))
        })
    }
}
