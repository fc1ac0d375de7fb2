use crate::models::entities::enum_types::WithdrawalStatus;
use chrono::{DateTime, Utc};
use diesel::{Associations, Identifiable, Insertable, Queryable};
use serde::Serialize;
use uuid::Uuid;

/// One payout request. Created together with its ledger debit in the same
/// transaction; `processed_at` is set on the terminal transitions.
#[derive(Debug, Clone, Queryable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::withdrawals)]
#[diesel(belongs_to(crate::models::entities::wallet::Wallet))]
pub struct Withdrawal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub wallet_id: Uuid,
    pub amount: i64,
    pub destination_ref: String,
    pub status: WithdrawalStatus,
    pub requested_at: DateTime<Utc>,
    pub processed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::withdrawals)]
pub struct NewWithdrawal {
    pub user_id: Uuid,
    pub wallet_id: Uuid,
    pub amount: i64,
    pub destination_ref: String,
    pub status: WithdrawalStatus,
}
