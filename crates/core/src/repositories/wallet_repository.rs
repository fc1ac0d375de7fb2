use chrono::Utc;
use diesel::prelude::*;
use pointbank_primitives::error::ApiError;
use pointbank_primitives::models::{LedgerEntry, NewLedgerEntry, NewWallet, Wallet};
use pointbank_primitives::schema::{point_ledger, wallets};
use uuid::Uuid;

pub struct WalletRepository;

impl WalletRepository {
    pub fn find_by_user_with_lock(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<Option<Wallet>, ApiError> {
        wallets::table
            .filter(wallets::user_id.eq(user_id))
            .for_update()
            .first::<Wallet>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    /// Insert-or-fetch with the uniqueness constraint on `user_id` as the
    /// arbiter: a concurrent create that loses the race lands on
    /// `do_nothing` and the re-fetch picks up the winner's row.
    pub fn create_if_not_exists(conn: &mut PgConnection, user_id: Uuid) -> Result<Wallet, ApiError> {
        if let Some(wallet) = Self::find_by_user_with_lock(conn, user_id)? {
            return Ok(wallet);
        }

        diesel::insert_into(wallets::table)
            .values(&NewWallet { user_id })
            .on_conflict(wallets::user_id)
            .do_nothing()
            .execute(conn)?;

        Self::find_by_user_with_lock(conn, user_id)?.ok_or_else(|| {
            ApiError::Internal(format!("wallet for user {} vanished after upsert", user_id))
        })
    }

    pub fn adjust_balance(
        conn: &mut PgConnection,
        wallet_id: Uuid,
        delta: i64,
    ) -> Result<i64, ApiError> {
        diesel::update(wallets::table.find(wallet_id))
            .set((
                wallets::balance.eq(wallets::balance + delta),
                wallets::updated_at.eq(Utc::now()),
            ))
            .returning(wallets::balance)
            .get_result::<i64>(conn)
            .map_err(ApiError::from)
    }

    pub fn add_ledger_entry(
        conn: &mut PgConnection,
        entry: NewLedgerEntry,
    ) -> Result<LedgerEntry, ApiError> {
        diesel::insert_into(point_ledger::table)
            .values(entry)
            .get_result::<LedgerEntry>(conn)
            .map_err(ApiError::from)
    }

    pub fn ledger_entries_by_user(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<Vec<LedgerEntry>, ApiError> {
        point_ledger::table
            .filter(point_ledger::user_id.eq(user_id))
            .order(point_ledger::created_at.desc())
            .load::<LedgerEntry>(conn)
            .map_err(ApiError::from)
    }
}
