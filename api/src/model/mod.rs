pub mod booking;
pub mod guest_booking;
pub mod menu;
pub mod off_day;
pub mod rebate;
pub mod report;
pub mod user;
