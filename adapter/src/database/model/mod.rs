pub mod booking;
pub mod guest_booking;
pub mod menu;
pub mod off_day;
pub mod rebate;
pub mod user;

use shared::error::AppError;
use std::str::FromStr;

/// Parses an enum column stored as text.
pub(crate) fn parse_column<T: FromStr>(column: &str, value: &str) -> Result<T, AppError> {
    value.parse().map_err(|_| {
        AppError::ConversionEntityError(format!("unexpected {column} value: {value}"))
    })
}
