use crate::model::id::OffDayId;
use chrono::NaiveDate;

pub mod event;

/// A date on which the mess serves no meals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffDay {
    pub off_day_id: OffDayId,
    pub date: NaiveDate,
    pub reason: String,
}
