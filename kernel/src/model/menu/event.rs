use crate::model::{date::DayOfWeek, meal::MealType};

/// Lists that are `Some` replace the stored list; `None` keeps it.
#[derive(Debug)]
pub struct UpdateMenuDay {
    pub day: DayOfWeek,
    pub breakfast: Option<Vec<String>>,
    pub lunch: Option<Vec<String>>,
    pub dinner: Option<Vec<String>>,
}

impl UpdateMenuDay {
    pub fn single(day: DayOfWeek, meal_type: MealType, items: Vec<String>) -> Self {
        let mut event = Self {
            day,
            breakfast: None,
            lunch: None,
            dinner: None,
        };
        match meal_type {
            MealType::Breakfast => event.breakfast = Some(items),
            MealType::Lunch => event.lunch = Some(items),
            MealType::Dinner => event.dinner = Some(items),
        }
        event
    }
}
