use super::user::RequesterResponse;
use chrono::{DateTime, NaiveDate, Utc};
use garde::Validate;
use kernel::model::{
    booking::{Booking, BookingStatus, Quantities},
    date::{deserialize_calendar_date, deserialize_optional_calendar_date},
    id::BookingId,
    meal::MealType,
};
use kernel::eligibility::Eligibility;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[garde(skip)]
    pub meal_type: MealType,
    // 品目名は日ごとに変わるのでキーは検証しない
    #[garde(skip)]
    pub quantities: Quantities,
    #[garde(skip)]
    #[serde(default)]
    pub is_vegetarian: bool,
    #[garde(skip)]
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingStatusRequest {
    pub status: BookingStatus,
}

// date が無ければ全件
#[derive(Debug, Deserialize)]
pub struct BookingListQuery {
    #[serde(default, deserialize_with = "deserialize_optional_calendar_date")]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityQuery {
    pub meal_type: MealType,
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub date: NaiveDate,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResponse {
    pub allowed: bool,
    pub reason: Option<String>,
}

impl From<Eligibility> for EligibilityResponse {
    fn from(value: Eligibility) -> Self {
        match value {
            Eligibility::Allowed => Self {
                allowed: true,
                reason: None,
            },
            Eligibility::Denied(denial) => Self {
                allowed: false,
                reason: Some(denial.to_string()),
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: BookingId,
    pub user: RequesterResponse,
    pub meal_type: MealType,
    pub date: NaiveDate,
    pub quantities: Quantities,
    pub is_vegetarian: bool,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            booking_id,
            booked_by,
            meal_type,
            date,
            quantities,
            is_vegetarian,
            status,
            created_at,
        } = value;
        Self {
            id: booking_id,
            user: booked_by.into(),
            meal_type,
            date,
            quantities,
            is_vegetarian,
            status,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::eligibility::Denial;

    #[test]
    fn accepts_timestamped_booking_dates() {
        let req: CreateBookingRequest = serde_json::from_str(
            r#"{"mealType":"breakfast","quantities":{"idli":2},"isVegetarian":true,"date":"2025-01-27T00:00:00.000Z"}"#,
        )
        .unwrap();
        assert_eq!(req.meal_type, MealType::Breakfast);
        assert_eq!(req.date, NaiveDate::from_ymd_opt(2025, 1, 27).unwrap());
        assert_eq!(req.quantities["idli"], 2);
    }

    #[test]
    fn negative_quantities_do_not_deserialize() {
        let res = serde_json::from_str::<CreateBookingRequest>(
            r#"{"mealType":"lunch","quantities":{"rice":-1},"date":"2025-01-27"}"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn list_query_date_is_optional() {
        let all: BookingListQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(all.date, None);

        let one: BookingListQuery = serde_json::from_str(r#"{"date":"2025-01-27"}"#).unwrap();
        assert_eq!(one.date, NaiveDate::from_ymd_opt(2025, 1, 27));

        assert!(serde_json::from_str::<BookingListQuery>(r#"{"date":"27/01/2025"}"#).is_err());
    }

    #[test]
    fn denial_reason_is_exposed() {
        let res = EligibilityResponse::from(Eligibility::Denied(Denial::OnRebate));
        assert!(!res.allowed);
        assert_eq!(res.reason.as_deref(), Some("on rebate"));
    }
}
