use crate::model::{booking::Quantities, id::GuestBookingId, meal::MealType};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

pub mod event;

/// Key of the counter row that hands out guest booking numbers.
pub const GUEST_BOOKING_COUNTER: &str = "guestBooking";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GuestBookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

impl GuestBookingStatus {
    /// Staff confirm or cancel a pending guest booking; both outcomes are final.
    pub fn can_transition_to(self, next: GuestBookingStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Confirmed | Self::Cancelled)
        ) || self == next
    }
}

#[derive(Debug, Clone)]
pub struct GuestBooking {
    pub guest_booking_id: GuestBookingId,
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

#[cfg(test)]
mod tests {
    use super::GuestBookingStatus::*;

    #[test]
    fn pending_guest_bookings_move_once() {
        assert!(Pending.can_transition_to(Confirmed));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Confirmed.can_transition_to(Confirmed));
        assert!(!Confirmed.can_transition_to(Cancelled));
        assert!(!Cancelled.can_transition_to(Pending));
    }
}
