use crate::model::date::DayOfWeek;

pub mod event;

/// One day of the recurring weekly menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuDay {
    pub day: DayOfWeek,
    pub breakfast: Vec<String>,
    pub lunch: Vec<String>,
    pub dinner: Vec<String>,
}

impl MenuDay {
    pub fn empty(day: DayOfWeek) -> Self {
        Self {
            day,
            breakfast: Vec::new(),
            lunch: Vec::new(),
            dinner: Vec::new(),
        }
    }
}
