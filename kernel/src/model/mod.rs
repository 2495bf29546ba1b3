pub mod auth;
pub mod booking;
pub mod date;
pub mod guest_booking;
pub mod id;
pub mod meal;
pub mod menu;
pub mod off_day;
pub mod rebate;
pub mod role;
pub mod user;
