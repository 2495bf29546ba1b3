use chrono::{DateTime, NaiveDate, Utc};
use garde::Validate;
use kernel::model::{
    booking::Quantities,
    date::deserialize_calendar_date,
    guest_booking::{event::CreateGuestBooking, GuestBooking, GuestBookingStatus},
    id::GuestBookingId,
    meal::MealType,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGuestBookingRequest {
    #[garde(length(min = 1))]
    pub user_name: String,
    #[garde(length(min = 1))]
    pub contact_number: String,
    #[garde(skip)]
    pub meal_type: MealType,
    #[garde(skip)]
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub date: NaiveDate,
    #[garde(skip)]
    pub quantities: Quantities,
}

impl From<CreateGuestBookingRequest> for CreateGuestBooking {
    fn from(value: CreateGuestBookingRequest) -> Self {
        let CreateGuestBookingRequest {
            user_name,
            contact_number,
            meal_type,
            date,
            quantities,
        } = value;
        CreateGuestBooking::new(
            user_name.trim().to_string(),
            contact_number.trim().to_string(),
            meal_type,
            date,
            quantities,
        )
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGuestBookingStatusRequest {
    pub status: GuestBookingStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestBookingResponse {
    pub id: GuestBookingId,
    pub booking_number: i64,
    pub user_name: String,
    pub contact_number: String,
    pub meal_type: MealType,
    pub date: NaiveDate,
    pub quantities: Quantities,
    pub has_discount: bool,
    pub status: GuestBookingStatus,
    pub created_at: DateTime<Utc>,
}

impl From<GuestBooking> for GuestBookingResponse {
    fn from(value: GuestBooking) -> Self {
        let GuestBooking {
            guest_booking_id,
            booking_number,
            user_name,
            contact_number,
            meal_type,
            date,
            quantities,
            has_discount,
            status,
            created_at,
        } = value;
        Self {
            id: guest_booking_id,
            booking_number,
            user_name,
            contact_number,
            meal_type,
            date,
            quantities,
            has_discount,
            status,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_name_and_contact_are_required() {
        let req: CreateGuestBookingRequest = serde_json::from_str(
            r#"{"userName":"","contactNumber":"98450","mealType":"dinner","date":"2025-02-01","quantities":{"roti":2}}"#,
        )
        .unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn completed_is_not_a_guest_status() {
        let res =
            serde_json::from_str::<UpdateGuestBookingStatusRequest>(r#"{"status":"completed"}"#);
        assert!(res.is_err());
    }
}
