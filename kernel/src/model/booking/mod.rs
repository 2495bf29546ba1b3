use crate::model::{id::BookingId, meal::MealType, user::Requester};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{AsRefStr, EnumString};

pub mod event;

/// Requested count per dish. Dish names follow whatever the menu lists that day.
pub type Quantities = BTreeMap<String, u32>;

pub fn total_items(quantities: &Quantities) -> u64 {
    quantities.values().map(|&q| u64::from(q)).sum()
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Completed,
}

#[derive(Debug, Clone)]
pub struct Booking {
    pub booking_id: BookingId,
    pub booked_by: Requester,
    pub meal_type: MealType,
    pub date: NaiveDate,
    pub quantities: Quantities,
    pub is_vegetarian: bool,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_sum_every_dish() {
        let q: Quantities = [("idli".to_string(), 2), ("vada".to_string(), 1)].into();
        assert_eq!(total_items(&q), 3);
        let zeros: Quantities = [("idli".to_string(), 0)].into();
        assert_eq!(total_items(&zeros), 0);
        assert_eq!(total_items(&Quantities::new()), 0);
    }
}
