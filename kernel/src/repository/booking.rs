use crate::model::{
    booking::{
        event::{CreateBooking, UpdateBookingStatus},
        Booking,
    },
    id::{BookingId, UserId},
    meal::MealType,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use shared::error::AppResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    // 同じ (利用者, 食事, 日付) が既にあれば BookingNotAllowed を返す
    async fn create(&self, event: CreateBooking) -> AppResult<Booking>;
    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>>;
    async fn find_all(&self) -> AppResult<Vec<Booking>>;
    async fn find_by_date(&self, date: NaiveDate) -> AppResult<Vec<Booking>>;
    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Booking>>;
    // 両端を含む期間で取得する
    async fn find_in_range(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<Booking>>;
    async fn exists(&self, user_id: UserId, meal_type: MealType, date: NaiveDate)
        -> AppResult<bool>;
    async fn update_status(&self, event: UpdateBookingStatus) -> AppResult<Booking>;
}
