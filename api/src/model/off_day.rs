use chrono::NaiveDate;
use garde::Validate;
use kernel::model::{
    date::deserialize_calendar_date,
    id::OffDayId,
    off_day::{event::CreateOffDay, OffDay},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOffDayRequest {
    #[garde(skip)]
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub date: NaiveDate,
    #[garde(length(min = 1))]
    pub reason: String,
}

impl From<CreateOffDayRequest> for CreateOffDay {
    fn from(value: CreateOffDayRequest) -> Self {
        let CreateOffDayRequest { date, reason } = value;
        CreateOffDay::new(date, reason.trim().to_string())
    }
}

#[derive(Debug, Deserialize)]
pub struct OffDayCheckQuery {
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub date: NaiveDate,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OffDayCheckResponse {
    pub date: NaiveDate,
    pub is_off_day: bool,
    pub reason: Option<String>,
}

impl OffDayCheckResponse {
    pub fn new(date: NaiveDate, off_day: Option<OffDay>) -> Self {
        Self {
            date,
            is_off_day: off_day.is_some(),
            reason: off_day.map(|d| d.reason),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OffDayResponse {
    pub id: OffDayId,
    pub date: NaiveDate,
    pub reason: String,
}

impl From<OffDay> for OffDayResponse {
    fn from(value: OffDay) -> Self {
        let OffDay {
            off_day_id,
            date,
            reason,
        } = value;
        Self {
            id: off_day_id,
            date,
            reason,
        }
    }
}
