use crate::models::entities::enum_types::LedgerEntryKind;
use crate::models::entities::ledger_entry::LedgerEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// --- Balance DTOs ---

#[derive(Debug, Serialize, ToSchema)]
pub struct BalanceResponse {
    pub user_id: Uuid,
    pub balance: i64,
}

// --- Debit DTOs (internal, service-to-service) ---

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct DebitRequest {
    #[validate(range(min = 1))]
    pub amount: i64,
    #[validate(length(min = 1, max = 200))]
    pub reason: String,
    pub related_id: Option<Uuid>,
}

/// `success: false` means insufficient balance, not an error.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DebitResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<i64>,
}

// --- Ledger DTOs ---

#[derive(Debug, Serialize, ToSchema)]
pub struct LedgerEntryDto {
    pub id: Uuid,
    pub amount: i64,
    pub kind: LedgerEntryKind,
    pub reason: String,
    pub related_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<LedgerEntry> for LedgerEntryDto {
    fn from(entry: LedgerEntry) -> Self {
        Self {
            id: entry.id,
            amount: entry.amount,
            kind: entry.kind,
            reason: entry.reason,
            related_id: entry.related_id,
            created_at: entry.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LedgerResponse {
    pub user_id: Uuid,
    pub entries: Vec<LedgerEntryDto>,
}
