use crate::model::{
    booking::Quantities,
    guest_booking::GuestBookingStatus,
    id::GuestBookingId,
    meal::MealType,
};
use chrono::NaiveDate;
use derive_new::new;

/// Discount is never granted at creation; the column exists for reporting.
#[derive(new, Debug)]
pub struct CreateGuestBooking {
    pub user_name: String,
    pub contact_number: String,
    pub meal_type: MealType,
    pub date: NaiveDate,
    pub quantities: Quantities,
}

#[derive(new, Debug)]
pub struct UpdateGuestBookingStatus {
    pub guest_booking_id: GuestBookingId,
    pub status: GuestBookingStatus,
}
