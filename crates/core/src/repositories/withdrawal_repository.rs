use chrono::{DateTime, Utc};
use diesel::prelude::*;
use pointbank_primitives::error::ApiError;
use pointbank_primitives::models::{NewWithdrawal, Withdrawal, WithdrawalStatus};
use pointbank_primitives::schema::withdrawals;
use uuid::Uuid;

pub struct WithdrawalRepository;

impl WithdrawalRepository {
    pub fn create(
        conn: &mut PgConnection,
        new_withdrawal: NewWithdrawal,
    ) -> Result<Withdrawal, ApiError> {
        diesel::insert_into(withdrawals::table)
            .values(&new_withdrawal)
            .get_result::<Withdrawal>(conn)
            .map_err(ApiError::from)
    }

    pub fn find_by_id_for_update(
        conn: &mut PgConnection,
        id: Uuid,
    ) -> Result<Option<Withdrawal>, ApiError> {
        withdrawals::table
            .find(id)
            .for_update()
            .first::<Withdrawal>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn set_status(
        conn: &mut PgConnection,
        id: Uuid,
        status: WithdrawalStatus,
        processed_at: Option<DateTime<Utc>>,
    ) -> Result<(), ApiError> {
        diesel::update(withdrawals::table.find(id))
            .set((
                withdrawals::status.eq(status),
                withdrawals::processed_at.eq(processed_at),
            ))
            .execute(conn)?;
        Ok(())
    }

    pub fn find_all_by_user(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<Vec<Withdrawal>, ApiError> {
        withdrawals::table
            .filter(withdrawals::user_id.eq(user_id))
            .order(withdrawals::requested_at.desc())
            .load::<Withdrawal>(conn)
            .map_err(ApiError::from)
    }
}
