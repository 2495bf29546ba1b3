use crate::model::{id::RebateId, user::Requester};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};
use strum::{AsRefStr, EnumString};

pub mod event;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RebateStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl RebateStatus {
    /// Only a pending request can be decided, and a decision is final.
    pub fn transition(self, next: RebateStatus) -> AppResult<RebateStatus> {
        match (self, next) {
            (RebateStatus::Pending, RebateStatus::Approved | RebateStatus::Rejected) => Ok(next),
            (RebateStatus::Pending, RebateStatus::Pending) => Err(AppError::InvalidRequest(
                "status must be approved or rejected".into(),
            )),
            (current, _) => Err(AppError::UnprocessableEntity(format!(
                "Rebate has already been {}",
                current.as_ref()
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Rebate {
    pub rebate_id: RebateId,
    pub requested_by: Requester,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: RebateStatus,
    pub created_at: DateTime<Utc>,
}
