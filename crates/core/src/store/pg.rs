use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use pointbank_primitives::error::ApiError;
use pointbank_primitives::models::{
    LedgerEntry, NewLedgerEntry, NewPurchase, NewWithdrawal, Purchase, PurchaseStatus, Wallet,
    Withdrawal, WithdrawalStatus,
};
use uuid::Uuid;

use crate::repositories::purchase_repository::PurchaseRepository;
use crate::repositories::wallet_repository::WalletRepository;
use crate::repositories::withdrawal_repository::WithdrawalRepository;
use crate::store::LedgerStore;

pub type DbPool = Pool<ConnectionManager<PgConnection>>;

/// Postgres-backed ledger store. Transactions map to database
/// transactions; `FOR UPDATE` in the repositories provides the row-level
/// serialization per wallet.
#[derive(Clone)]
pub struct PgLedgerStore {
    pool: DbPool,
}

impl PgLedgerStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl LedgerStore for PgLedgerStore {
    type Conn = PgConnection;

    fn transaction<T>(
        &self,
        f: impl FnOnce(&mut Self::Conn) -> Result<T, ApiError>,
    ) -> Result<T, ApiError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;
        (&mut *conn).transaction::<T, ApiError, _>(f)
    }

    fn wallet_for_update(conn: &mut Self::Conn, user_id: Uuid) -> Result<Wallet, ApiError> {
        WalletRepository::create_if_not_exists(conn, user_id)
    }

    fn adjust_balance(conn: &mut Self::Conn, wallet_id: Uuid, delta: i64) -> Result<i64, ApiError> {
        WalletRepository::adjust_balance(conn, wallet_id, delta)
    }

    fn append_ledger_entry(
        conn: &mut Self::Conn,
        entry: NewLedgerEntry,
    ) -> Result<LedgerEntry, ApiError> {
        WalletRepository::add_ledger_entry(conn, entry)
    }

    fn ledger_entries_for_user(
        conn: &mut Self::Conn,
        user_id: Uuid,
    ) -> Result<Vec<LedgerEntry>, ApiError> {
        WalletRepository::ledger_entries_by_user(conn, user_id)
    }

    fn insert_purchase(
        conn: &mut Self::Conn,
        purchase: NewPurchase,
    ) -> Result<Purchase, ApiError> {
        PurchaseRepository::create(conn, purchase)
    }

    fn purchase_by_id(conn: &mut Self::Conn, id: Uuid) -> Result<Option<Purchase>, ApiError> {
        PurchaseRepository::find_by_id(conn, id)
    }

    fn purchases_by_user(
        conn: &mut Self::Conn,
        user_id: Uuid,
    ) -> Result<Vec<Purchase>, ApiError> {
        PurchaseRepository::find_all_by_user(conn, user_id)
    }

    fn purchase_by_provider_tx_for_update(
        conn: &mut Self::Conn,
        provider_tx_id: &str,
    ) -> Result<Option<Purchase>, ApiError> {
        PurchaseRepository::find_by_provider_tx_for_update(conn, provider_tx_id)
    }

    fn set_purchase_provider_tx(
        conn: &mut Self::Conn,
        id: Uuid,
        provider_tx_id: &str,
    ) -> Result<(), ApiError> {
        PurchaseRepository::set_provider_tx(conn, id, provider_tx_id)
    }

    fn set_purchase_status(
        conn: &mut Self::Conn,
        id: Uuid,
        status: PurchaseStatus,
    ) -> Result<(), ApiError> {
        PurchaseRepository::set_status(conn, id, status)
    }

    fn insert_withdrawal(
        conn: &mut Self::Conn,
        withdrawal: NewWithdrawal,
    ) -> Result<Withdrawal, ApiError> {
        WithdrawalRepository::create(conn, withdrawal)
    }

    fn withdrawal_by_id_for_update(
        conn: &mut Self::Conn,
        id: Uuid,
    ) -> Result<Option<Withdrawal>, ApiError> {
        WithdrawalRepository::find_by_id_for_update(conn, id)
    }

    fn set_withdrawal_status(
        conn: &mut Self::Conn,
        id: Uuid,
        status: WithdrawalStatus,
        processed_at: Option<DateTime<Utc>>,
    ) -> Result<(), ApiError> {
        WithdrawalRepository::set_status(conn, id, status, processed_at)
    }

    fn withdrawals_by_user(
        conn: &mut Self::Conn,
        user_id: Uuid,
    ) -> Result<Vec<Withdrawal>, ApiError> {
        WithdrawalRepository::find_all_by_user(conn, user_id)
    }
}
