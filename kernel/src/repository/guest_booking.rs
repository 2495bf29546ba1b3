use crate::model::{
    guest_booking::{
        event::{CreateGuestBooking, UpdateGuestBookingStatus},
        GuestBooking,
    },
    id::GuestBookingId,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use shared::error::AppResult;

#[async_trait]
pub trait GuestBookingRepository: Send + Sync {
    // 予約番号の採番と登録を行う
    async fn create(&self, event: CreateGuestBooking) -> AppResult<GuestBooking>;
    async fn find_by_id(&self, guest_booking_id: GuestBookingId)
        -> AppResult<Option<GuestBooking>>;
    async fn find_all(&self) -> AppResult<Vec<GuestBooking>>;
    async fn find_by_date(&self, date: NaiveDate) -> AppResult<Vec<GuestBooking>>;
    async fn find_in_range(&self, from: NaiveDate, to: NaiveDate)
        -> AppResult<Vec<GuestBooking>>;
    async fn update_status(&self, event: UpdateGuestBookingStatus) -> AppResult<GuestBooking>;
    async fn delete(&self, guest_booking_id: GuestBookingId) -> AppResult<()>;
}
