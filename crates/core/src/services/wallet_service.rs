use pointbank_primitives::error::ApiError;
use pointbank_primitives::models::{LedgerEntry, LedgerEntryKind, NewLedgerEntry, Wallet};
use tracing::debug;
use uuid::Uuid;

use crate::store::LedgerStore;

/// Outcome of a debit attempt. Insufficient balance is an expected
/// business result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebitOutcome {
    Applied { balance: i64 },
    InsufficientBalance { balance: i64 },
}

/// Owns get-or-create wallet semantics and the atomic debit/credit
/// primitives. Every balance mutation is paired, in the same transaction,
/// with exactly one ledger entry of matching sign and magnitude.
#[derive(Clone)]
pub struct WalletManager<S: LedgerStore> {
    store: S,
}

impl<S: LedgerStore> WalletManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn get_or_create_wallet(&self, user_id: Uuid) -> Result<Wallet, ApiError> {
        self.store
            .transaction(|conn| S::wallet_for_update(conn, user_id))
    }

    pub fn balance(&self, user_id: Uuid) -> Result<i64, ApiError> {
        Ok(self.get_or_create_wallet(user_id)?.balance)
    }

    pub fn ledger_entries(&self, user_id: Uuid) -> Result<Vec<LedgerEntry>, ApiError> {
        self.store
            .transaction(|conn| S::ledger_entries_for_user(conn, user_id))
    }

    /// Debits the wallet in its own transaction: balance check, decrement
    /// and ledger entry commit or roll back together.
    pub fn debit(
        &self,
        user_id: Uuid,
        amount: i64,
        reason: &str,
        related_id: Option<Uuid>,
    ) -> Result<DebitOutcome, ApiError> {
        self.store
            .transaction(|conn| Self::debit_in_tx(conn, user_id, amount, reason, related_id))
    }

    /// Debit primitive for callers that already hold a transaction. The
    /// balance check runs under the wallet row lock, so two concurrent
    /// debits can never both pass when only one would leave the balance
    /// non-negative.
    pub fn debit_in_tx(
        conn: &mut S::Conn,
        user_id: Uuid,
        amount: i64,
        reason: &str,
        related_id: Option<Uuid>,
    ) -> Result<DebitOutcome, ApiError> {
        require_positive(amount)?;

        let wallet = S::wallet_for_update(conn, user_id)?;
        if wallet.balance < amount {
            debug!(%user_id, amount, balance = wallet.balance, "debit rejected: insufficient balance");
            return Ok(DebitOutcome::InsufficientBalance {
                balance: wallet.balance,
            });
        }

        let balance = S::adjust_balance(conn, wallet.id, -amount)?;
        S::append_ledger_entry(
            conn,
            NewLedgerEntry {
                user_id,
                wallet_id: wallet.id,
                amount: -amount,
                kind: LedgerEntryKind::Debit,
                reason: reason.to_string(),
                related_id,
            },
        )?;

        Ok(DebitOutcome::Applied { balance })
    }

    /// Credit primitive. There is deliberately no transaction-opening
    /// counterpart: a credit must always share its transaction with the
    /// state change that justifies it (e.g. marking a purchase completed),
    /// so a crash can never separate the two.
    pub fn credit_in_tx(
        conn: &mut S::Conn,
        user_id: Uuid,
        amount: i64,
        reason: &str,
        related_id: Option<Uuid>,
    ) -> Result<i64, ApiError> {
        require_positive(amount)?;

        let wallet = S::wallet_for_update(conn, user_id)?;
        let balance = S::adjust_balance(conn, wallet.id, amount)?;
        S::append_ledger_entry(
            conn,
            NewLedgerEntry {
                user_id,
                wallet_id: wallet.id,
                amount,
                kind: LedgerEntryKind::Credit,
                reason: reason.to_string(),
                related_id,
            },
        )?;

        Ok(balance)
    }
}

fn require_positive(amount: i64) -> Result<(), ApiError> {
    if amount <= 0 {
        return Err(ApiError::BadRequest(format!(
            "Amount must be a positive integer, got {}",
            amount
        )));
    }
    Ok(())
}
