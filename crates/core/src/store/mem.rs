use chrono::{DateTime, Utc};
use pointbank_primitives::error::ApiError;
use pointbank_primitives::models::{
    LedgerEntry, NewLedgerEntry, NewPurchase, NewWithdrawal, Purchase, PurchaseStatus, Wallet,
    Withdrawal, WithdrawalStatus,
};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::store::LedgerStore;

/// In-memory working set a transaction operates on. The store hands out a
/// clone of the committed state; writes only become visible when the
/// transaction closure returns `Ok`.
#[derive(Debug, Default, Clone)]
pub struct MemState {
    wallets: Vec<Wallet>,
    ledger: Vec<LedgerEntry>,
    purchases: Vec<Purchase>,
    withdrawals: Vec<Withdrawal>,
}

/// In-memory ledger store with commit/rollback semantics, used by tests
/// and local development. A single mutex serializes all transactions,
/// which is a coarse but faithful stand-in for the per-wallet row locks
/// of the Postgres store.
#[derive(Clone, Default)]
pub struct MemLedgerStore {
    state: Arc<Mutex<MemState>>,
}

impl MemLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedgerStore for MemLedgerStore {
    type Conn = MemState;

    fn transaction<T>(
        &self,
        f: impl FnOnce(&mut Self::Conn) -> Result<T, ApiError>,
    ) -> Result<T, ApiError> {
        let mut committed = self
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut scratch = committed.clone();
        let out = f(&mut scratch)?;
        *committed = scratch;
        Ok(out)
    }

    fn wallet_for_update(conn: &mut Self::Conn, user_id: Uuid) -> Result<Wallet, ApiError> {
        if let Some(wallet) = conn.wallets.iter().find(|w| w.user_id == user_id) {
            return Ok(wallet.clone());
        }

        let now = Utc::now();
        let wallet = Wallet {
            id: Uuid::new_v4(),
            user_id,
            balance: 0,
            created_at: now,
            updated_at: now,
        };
        conn.wallets.push(wallet.clone());
        Ok(wallet)
    }

    fn adjust_balance(conn: &mut Self::Conn, wallet_id: Uuid, delta: i64) -> Result<i64, ApiError> {
        let wallet = conn
            .wallets
            .iter_mut()
            .find(|w| w.id == wallet_id)
            .ok_or_else(|| ApiError::NotFound(format!("wallet {}", wallet_id)))?;
        wallet.balance += delta;
        wallet.updated_at = Utc::now();
        Ok(wallet.balance)
    }

    fn append_ledger_entry(
        conn: &mut Self::Conn,
        entry: NewLedgerEntry,
    ) -> Result<LedgerEntry, ApiError> {
        let row = LedgerEntry {
            id: Uuid::new_v4(),
            user_id: entry.user_id,
            wallet_id: entry.wallet_id,
            amount: entry.amount,
            kind: entry.kind,
            reason: entry.reason,
            related_id: entry.related_id,
            created_at: Utc::now(),
        };
        conn.ledger.push(row.clone());
        Ok(row)
    }

    fn ledger_entries_for_user(
        conn: &mut Self::Conn,
        user_id: Uuid,
    ) -> Result<Vec<LedgerEntry>, ApiError> {
        let mut entries: Vec<LedgerEntry> = conn
            .ledger
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        entries.reverse();
        Ok(entries)
    }

    fn insert_purchase(
        conn: &mut Self::Conn,
        purchase: NewPurchase,
    ) -> Result<Purchase, ApiError> {
        let now = Utc::now();
        let row = Purchase {
            id: Uuid::new_v4(),
            user_id: purchase.user_id,
            wallet_id: purchase.wallet_id,
            points: purchase.points,
            currency: purchase.currency,
            price: purchase.price,
            status: purchase.status,
            provider: purchase.provider,
            provider_tx_id: None,
            created_at: now,
            updated_at: now,
        };
        conn.purchases.push(row.clone());
        Ok(row)
    }

    fn purchase_by_id(conn: &mut Self::Conn, id: Uuid) -> Result<Option<Purchase>, ApiError> {
        Ok(conn.purchases.iter().find(|p| p.id == id).cloned())
    }

    fn purchases_by_user(
        conn: &mut Self::Conn,
        user_id: Uuid,
    ) -> Result<Vec<Purchase>, ApiError> {
        let mut rows: Vec<Purchase> = conn
            .purchases
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        rows.reverse();
        Ok(rows)
    }

    fn purchase_by_provider_tx_for_update(
        conn: &mut Self::Conn,
        provider_tx_id: &str,
    ) -> Result<Option<Purchase>, ApiError> {
        Ok(conn
            .purchases
            .iter()
            .find(|p| p.provider_tx_id.as_deref() == Some(provider_tx_id))
            .cloned())
    }

    fn set_purchase_provider_tx(
        conn: &mut Self::Conn,
        id: Uuid,
        provider_tx_id: &str,
    ) -> Result<(), ApiError> {
        let purchase = conn
            .purchases
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("purchase {}", id)))?;
        purchase.provider_tx_id = Some(provider_tx_id.to_string());
        purchase.updated_at = Utc::now();
        Ok(())
    }

    fn set_purchase_status(
        conn: &mut Self::Conn,
        id: Uuid,
        status: PurchaseStatus,
    ) -> Result<(), ApiError> {
        let purchase = conn
            .purchases
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("purchase {}", id)))?;
        purchase.status = status;
        purchase.updated_at = Utc::now();
        Ok(())
    }

    fn insert_withdrawal(
        conn: &mut Self::Conn,
        withdrawal: NewWithdrawal,
    ) -> Result<Withdrawal, ApiError> {
        let row = Withdrawal {
            id: Uuid::new_v4(),
            user_id: withdrawal.user_id,
            wallet_id: withdrawal.wallet_id,
            amount: withdrawal.amount,
            destination_ref: withdrawal.destination_ref,
            status: withdrawal.status,
            requested_at: Utc::now(),
            processed_at: None,
        };
        conn.withdrawals.push(row.clone());
        Ok(row)
    }

    fn withdrawal_by_id_for_update(
        conn: &mut Self::Conn,
        id: Uuid,
    ) -> Result<Option<Withdrawal>, ApiError> {
        Ok(conn.withdrawals.iter().find(|w| w.id == id).cloned())
    }

    fn set_withdrawal_status(
        conn: &mut Self::Conn,
        id: Uuid,
        status: WithdrawalStatus,
        processed_at: Option<DateTime<Utc>>,
    ) -> Result<(), ApiError> {
        let withdrawal = conn
            .withdrawals
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("withdrawal {}", id)))?;
        withdrawal.status = status;
        withdrawal.processed_at = processed_at;
        Ok(())
    }

    fn withdrawals_by_user(
        conn: &mut Self::Conn,
        user_id: Uuid,
    ) -> Result<Vec<Withdrawal>, ApiError> {
        let mut rows: Vec<Withdrawal> = conn
            .withdrawals
            .iter()
            .filter(|w| w.user_id == user_id)
            .cloned()
            .collect();
        rows.reverse();
        Ok(rows)
    }
}
