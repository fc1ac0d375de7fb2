use crate::models::entities::enum_types::LedgerEntryKind;
use chrono::{DateTime, Utc};
use diesel::{Associations, Identifiable, Insertable, Queryable};
use serde::Serialize;
use uuid::Uuid;

/// Append-only record of a single point movement. Never updated or
/// deleted; the sum of `amount` over a wallet's entries equals its balance.
#[derive(Debug, Clone, Queryable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::point_ledger)]
#[diesel(belongs_to(crate::models::entities::wallet::Wallet))]
pub struct LedgerEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub wallet_id: Uuid,
    pub amount: i64,
    pub kind: LedgerEntryKind,
    pub reason: String,
    pub related_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::point_ledger)]
pub struct NewLedgerEntry {
    pub user_id: Uuid,
    pub wallet_id: Uuid,
    pub amount: i64,
    pub kind: LedgerEntryKind,
    pub reason: String,
    pub related_id: Option<Uuid>,
}
