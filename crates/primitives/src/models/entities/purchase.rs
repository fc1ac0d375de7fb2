use crate::models::entities::enum_types::{CurrencyCode, PurchaseStatus};
use chrono::{DateTime, Utc};
use diesel::{Associations, Identifiable, Insertable, Queryable};
use serde::Serialize;
use uuid::Uuid;

/// One attempt to buy points through the payment provider.
///
/// `provider_tx_id` is set once the provider intent exists and is the
/// idempotency key for webhook confirmations.
#[derive(Debug, Clone, Queryable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::purchases)]
#[diesel(belongs_to(crate::models::entities::wallet::Wallet))]
pub struct Purchase {
    pub id: Uuid,
    pub user_id: Uuid,
    pub wallet_id: Uuid,
    pub points: i64,
    pub currency: CurrencyCode,
    pub price: i64,
    pub status: PurchaseStatus,
    pub provider: String,
    pub provider_tx_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::purchases)]
pub struct NewPurchase {
    pub user_id: Uuid,
    pub wallet_id: Uuid,
    pub points: i64,
    pub currency: CurrencyCode,
    pub price: i64,
    pub status: PurchaseStatus,
    pub provider: String,
}
