use crate::models::entities::enum_types::WithdrawalStatus;
use crate::models::entities::withdrawal::Withdrawal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct WithdrawRequest {
    #[validate(range(min = 1))]
    pub amount: i64,
    /// Payout destination reference (bank account, payout profile, ...).
    #[validate(length(min = 1, max = 200))]
    pub destination_ref: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WithdrawResponse {
    pub withdrawal_id: Uuid,
    pub status: WithdrawalStatus,
    pub amount: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WithdrawalDto {
    pub id: Uuid,
    pub amount: i64,
    pub status: WithdrawalStatus,
    pub destination_ref: String,
    pub requested_at: DateTime<Utc>,
    pub processed_at: Option<DateTime<Utc>>,
}

impl From<Withdrawal> for WithdrawalDto {
    fn from(withdrawal: Withdrawal) -> Self {
        Self {
            id: withdrawal.id,
            amount: withdrawal.amount,
            status: withdrawal.status,
            destination_ref: withdrawal.destination_ref,
            requested_at: withdrawal.requested_at,
            processed_at: withdrawal.processed_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WithdrawalHistoryResponse {
    pub user_id: Uuid,
    pub withdrawals: Vec<WithdrawalDto>,
}
