use super::parse_column;
use chrono::{DateTime, NaiveDate, Utc};
use kernel::model::{booking::Quantities, guest_booking::GuestBooking, id::GuestBookingId};
use shared::error::AppError;
use sqlx::types::Json;

#[derive(sqlx::FromRow)]
pub struct GuestBookingRow {
    pub guest_booking_id: GuestBookingId,
    pub booking_number: i64,
    pub user_name: String,
    pub contact_number: String,
    pub meal_type: String,
    pub booking_date: NaiveDate,
    pub quantities: Json<Quantities>,
    pub has_discount: bool,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<GuestBookingRow> for GuestBooking {
    type Error = AppError;

    fn try_from(value: GuestBookingRow) -> Result<Self, Self::Error> {
        let GuestBookingRow {
            guest_booking_id,
            booking_number,
            user_name,
            contact_number,
            meal_type,
            booking_date,
            quantities,
            has_discount,
            status,
            created_at,
        } = value;
        Ok(GuestBooking {
            guest_booking_id,
            booking_number,
            user_name,
            contact_number,
            meal_type: parse_column("meal_type", &meal_type)?,
            date: booking_date,
            quantities: quantities.0,
            has_discount,
            status: parse_column("status", &status)?,
            created_at,
        })
    }
}
