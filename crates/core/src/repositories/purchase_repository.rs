use chrono::Utc;
use diesel::prelude::*;
use pointbank_primitives::error::ApiError;
use pointbank_primitives::models::{NewPurchase, Purchase, PurchaseStatus};
use pointbank_primitives::schema::purchases;
use uuid::Uuid;

pub struct PurchaseRepository;

impl PurchaseRepository {
    pub fn create(conn: &mut PgConnection, new_purchase: NewPurchase) -> Result<Purchase, ApiError> {
        diesel::insert_into(purchases::table)
            .values(&new_purchase)
            .get_result::<Purchase>(conn)
            .map_err(ApiError::from)
    }

    pub fn find_by_id(conn: &mut PgConnection, id: Uuid) -> Result<Option<Purchase>, ApiError> {
        purchases::table
            .find(id)
            .first::<Purchase>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn find_all_by_user(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<Vec<Purchase>, ApiError> {
        purchases::table
            .filter(purchases::user_id.eq(user_id))
            .order(purchases::created_at.desc())
            .load::<Purchase>(conn)
            .map_err(ApiError::from)
    }

    pub fn find_by_provider_tx_for_update(
        conn: &mut PgConnection,
        provider_tx_id: &str,
    ) -> Result<Option<Purchase>, ApiError> {
        purchases::table
            .filter(purchases::provider_tx_id.eq(provider_tx_id))
            .for_update()
            .first::<Purchase>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn set_provider_tx(
        conn: &mut PgConnection,
        id: Uuid,
        provider_tx_id: &str,
    ) -> Result<(), ApiError> {
        diesel::update(purchases::table.find(id))
            .set((
                purchases::provider_tx_id.eq(provider_tx_id),
                purchases::updated_at.eq(Utc::now()),
            ))
            .execute(conn)?;
        Ok(())
    }

    pub fn set_status(
        conn: &mut PgConnection,
        id: Uuid,
        status: PurchaseStatus,
    ) -> Result<(), ApiError> {
        diesel::update(purchases::table.find(id))
            .set((
                purchases::status.eq(status),
                purchases::updated_at.eq(Utc::now()),
            ))
            .execute(conn)?;
        Ok(())
    }
}
