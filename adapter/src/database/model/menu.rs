use super::parse_column;
use kernel::model::menu::MenuDay;
use shared::error::AppError;

#[derive(sqlx::FromRow)]
pub struct MenuRow {
    pub day: String,
    pub breakfast: Vec<String>,
    pub lunch: Vec<String>,
    pub dinner: Vec<String>,
}

impl TryFrom<MenuRow> for MenuDay {
    type Error = AppError;

    fn try_from(value: MenuRow) -> Result<Self, Self::Error> {
        let MenuRow {
            day,
            breakfast,
            lunch,
            dinner,
        } = value;
        Ok(MenuDay {
            day: parse_column("day", &day)?,
            breakfast,
            lunch,
            dinner,
        })
    }
}
