pub mod mem;
pub mod pg;

pub use mem::MemLedgerStore;
pub use pg::PgLedgerStore;

use chrono::{DateTime, Utc};
use pointbank_primitives::error::ApiError;
use pointbank_primitives::models::{
    LedgerEntry, NewLedgerEntry, NewPurchase, NewWithdrawal, Purchase, PurchaseStatus, Wallet,
    Withdrawal, WithdrawalStatus,
};
use uuid::Uuid;

/// Storage abstraction for the wallet ledger.
///
/// Row-level methods take `&mut Self::Conn` and therefore can only run
/// inside a `transaction` closure; that call shape is what forces every
/// compound operation (check-and-debit, finalize-and-credit) into a single
/// atomic unit. `wallet_for_update` and the purchase/withdrawal
/// `*_for_update` lookups acquire the row lock that serializes concurrent
/// operations against the same wallet.
pub trait LedgerStore: Clone + Send + Sync + 'static {
    type Conn;

    /// Runs `f` inside one transaction; any error rolls the whole unit back.
    fn transaction<T>(
        &self,
        f: impl FnOnce(&mut Self::Conn) -> Result<T, ApiError>,
    ) -> Result<T, ApiError>;

    /// Returns the user's wallet, creating it with balance 0 if absent, and
    /// locks the row for the remainder of the transaction. A lost
    /// insert race falls back to fetching the winner's row.
    fn wallet_for_update(conn: &mut Self::Conn, user_id: Uuid) -> Result<Wallet, ApiError>;

    /// Applies `delta` to the wallet balance and returns the new balance.
    /// Callers hold the wallet lock and have already validated the delta.
    fn adjust_balance(conn: &mut Self::Conn, wallet_id: Uuid, delta: i64) -> Result<i64, ApiError>;

    fn append_ledger_entry(
        conn: &mut Self::Conn,
        entry: NewLedgerEntry,
    ) -> Result<LedgerEntry, ApiError>;

    /// All ledger entries for a user, most recent first.
    fn ledger_entries_for_user(
        conn: &mut Self::Conn,
        user_id: Uuid,
    ) -> Result<Vec<LedgerEntry>, ApiError>;

    fn insert_purchase(conn: &mut Self::Conn, purchase: NewPurchase)
        -> Result<Purchase, ApiError>;

    fn purchase_by_id(conn: &mut Self::Conn, id: Uuid) -> Result<Option<Purchase>, ApiError>;

    /// All purchases for a user, most recent first.
    fn purchases_by_user(
        conn: &mut Self::Conn,
        user_id: Uuid,
    ) -> Result<Vec<Purchase>, ApiError>;

    /// Locked lookup by provider transaction id. The caller re-checks the
    /// status under the lock; that re-check is the idempotency guard for
    /// at-least-once webhook delivery.
    fn purchase_by_provider_tx_for_update(
        conn: &mut Self::Conn,
        provider_tx_id: &str,
    ) -> Result<Option<Purchase>, ApiError>;

    fn set_purchase_provider_tx(
        conn: &mut Self::Conn,
        id: Uuid,
        provider_tx_id: &str,
    ) -> Result<(), ApiError>;

    fn set_purchase_status(
        conn: &mut Self::Conn,
        id: Uuid,
        status: PurchaseStatus,
    ) -> Result<(), ApiError>;

    fn insert_withdrawal(
        conn: &mut Self::Conn,
        withdrawal: NewWithdrawal,
    ) -> Result<Withdrawal, ApiError>;

    fn withdrawal_by_id_for_update(
        conn: &mut Self::Conn,
        id: Uuid,
    ) -> Result<Option<Withdrawal>, ApiError>;

    fn set_withdrawal_status(
        conn: &mut Self::Conn,
        id: Uuid,
        status: WithdrawalStatus,
        processed_at: Option<DateTime<Utc>>,
    ) -> Result<(), ApiError>;

    /// All withdrawals for a user, most recent first.
    fn withdrawals_by_user(
        conn: &mut Self::Conn,
        user_id: Uuid,
    ) -> Result<Vec<Withdrawal>, ApiError>;
}
