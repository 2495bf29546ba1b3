pub mod auth;
pub mod booking;
pub mod guest_booking;
pub mod health;
pub mod menu;
pub mod off_day;
pub mod rebate;
pub mod user;
