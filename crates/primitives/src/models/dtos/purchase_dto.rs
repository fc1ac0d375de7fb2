use crate::models::entities::enum_types::{CurrencyCode, PurchaseStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct PurchaseIntentRequest {
    /// Requested point amount.
    #[validate(range(min = 1))]
    pub amount: i64,
    #[schema(example = "JPY")]
    pub currency: CurrencyCode,
    /// Provider-side payment method reference, if the client already has one.
    pub payment_method_ref: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PurchaseIntentResponse {
    pub purchase_id: Uuid,
    pub status: PurchaseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
}
