use super::parse_column;
use chrono::{DateTime, NaiveDate, Utc};
use kernel::model::{
    id::{RebateId, UserId},
    rebate::Rebate,
    user::Requester,
};
use shared::error::AppError;

// rebates と users を結合した行
#[derive(sqlx::FromRow)]
pub struct RebateRow {
    pub rebate_id: RebateId,
    pub user_id: UserId,
    pub user_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<RebateRow> for Rebate {
    type Error = AppError;

    fn try_from(value: RebateRow) -> Result<Self, Self::Error> {
        let RebateRow {
            rebate_id,
            user_id,
            user_name,
            start_date,
            end_date,
            reason,
            status,
            created_at,
        } = value;
        Ok(Rebate {
            rebate_id,
            requested_by: Requester {
                user_id,
                name: user_name,
            },
            start_date,
            end_date,
            reason,
            status: parse_column("status", &status)?,
            created_at,
        })
    }
}
