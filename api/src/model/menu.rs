use chrono::NaiveDate;
use kernel::model::{
    date::DayOfWeek,
    menu::{event::UpdateMenuDay, MenuDay},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuDayResponse {
    pub day: DayOfWeek,
    pub breakfast: Vec<String>,
    pub lunch: Vec<String>,
    pub dinner: Vec<String>,
}

impl From<MenuDay> for MenuDayResponse {
    fn from(value: MenuDay) -> Self {
        let MenuDay {
            day,
            breakfast,
            lunch,
            dinner,
        } = value;
        Self {
            day,
            breakfast,
            lunch,
            dinner,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuForDateResponse {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub menu: MenuDayResponse,
}

/// Lists left out keep their current items. Items are stored as sent.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMenuDayRequest {
    pub breakfast: Option<Vec<String>>,
    pub lunch: Option<Vec<String>>,
    pub dinner: Option<Vec<String>>,
}

impl UpdateMenuDayRequest {
    pub fn into_event(self, day: DayOfWeek) -> UpdateMenuDay {
        let UpdateMenuDayRequest {
            breakfast,
            lunch,
            dinner,
        } = self;
        UpdateMenuDay {
            day,
            breakfast,
            lunch,
            dinner,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReplaceMealRequest {
    pub items: Vec<String>,
}

impl ReplaceMealRequest {
    pub fn into_items(self) -> Vec<String> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_update_keeps_missing_meals() {
        let req: UpdateMenuDayRequest =
            serde_json::from_str(r#"{"dinner":[" Dal ","Rice",""]}"#).unwrap();
        let event = req.into_event(DayOfWeek::Monday);
        assert_eq!(event.breakfast, None);
        assert_eq!(event.lunch, None);
        assert_eq!(
            event.dinner,
            Some(vec![" Dal ".to_string(), "Rice".to_string(), String::new()])
        );
    }

    #[test]
    fn empty_list_clears_a_meal() {
        let req: ReplaceMealRequest = serde_json::from_str(r#"{"items":[]}"#).unwrap();
        assert!(req.into_items().is_empty());
    }

    #[test]
    fn replacement_items_are_kept_verbatim() {
        let req: ReplaceMealRequest =
            serde_json::from_str(r#"{"items":["Poha ","Chai"]}"#).unwrap();
        assert_eq!(req.into_items(), vec!["Poha ".to_string(), "Chai".to_string()]);
    }
}
