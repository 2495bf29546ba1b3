use crate::model::{
    booking::{BookingStatus, Quantities},
    id::{BookingId, UserId},
    meal::MealType,
};
use chrono::NaiveDate;
use derive_new::new;

#[derive(new, Debug)]
pub struct CreateBooking {
    pub booked_by: UserId,
    pub meal_type: MealType,
    pub date: NaiveDate,
    pub quantities: Quantities,
    pub is_vegetarian: bool,
}

#[derive(new, Debug)]
pub struct UpdateBookingStatus {
    pub booking_id: BookingId,
    pub status: BookingStatus,
}
