use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumString,
    AsRefStr, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    pub const ALL: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

    pub fn window(self) -> MealWindow {
        match self {
            MealType::Breakfast => MealWindow::from_hm((7, 0), (9, 0)),
            MealType::Lunch => MealWindow::from_hm((12, 0), (14, 0)),
            MealType::Dinner => MealWindow::from_hm((19, 0), (21, 0)),
        }
    }
}

/// Daily serving window. Bookings for today close at `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl MealWindow {
    fn from_hm(start: (u32, u32), end: (u32, u32)) -> Self {
        Self {
            start: hm(start),
            end: hm(end),
        }
    }
}

fn hm((hour, min): (u32, u32)) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_are_ordered_through_the_day() {
        let windows: Vec<_> = MealType::ALL.iter().map(|m| m.window()).collect();
        for w in &windows {
            assert!(w.start < w.end);
        }
        assert!(windows[0].end <= windows[1].start);
        assert!(windows[1].end <= windows[2].start);
        assert_eq!(MealType::Dinner.window().end, NaiveTime::from_hms_opt(21, 0, 0).unwrap());
    }

    #[test]
    fn meal_names_are_lowercase() {
        assert_eq!("lunch".parse::<MealType>().unwrap(), MealType::Lunch);
        assert_eq!(MealType::Breakfast.as_ref(), "breakfast");
        assert!("supper".parse::<MealType>().is_err());
    }
}
