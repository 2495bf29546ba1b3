use super::user::RequesterResponse;
use chrono::{DateTime, NaiveDate, Utc};
use garde::Validate;
use kernel::model::{
    date::deserialize_calendar_date,
    id::RebateId,
    rebate::{Rebate, RebateStatus},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRebateRequest {
    #[garde(skip)]
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub start_date: NaiveDate,
    #[garde(skip)]
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub end_date: NaiveDate,
    #[garde(length(min = 1))]
    pub reason: String,
}

#[derive(Debug, Deserialize)]
pub struct RebateListQuery {
    pub status: Option<RebateStatus>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRebateStatusRequest {
    pub status: RebateStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RebateResponse {
    pub id: RebateId,
    pub user: RequesterResponse,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: RebateStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Rebate> for RebateResponse {
    fn from(value: Rebate) -> Self {
        let Rebate {
            rebate_id,
            requested_by,
            start_date,
            end_date,
            reason,
            status,
            created_at,
        } = value;
        Self {
            id: rebate_id,
            user: requested_by.into(),
            start_date,
            end_date,
            reason,
            status,
            created_at,
        }
    }
}
