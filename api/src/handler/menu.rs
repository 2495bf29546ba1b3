use crate::{
    extractor::{AppJson, AppPath, AuthorizedUser},
    model::menu::{MenuDayResponse, MenuForDateResponse, ReplaceMealRequest, UpdateMenuDayRequest},
};
use axum::{
    extract::State,
    Json,
};
use kernel::model::{
    date::{parse_calendar_date, DayOfWeek},
    meal::MealType,
    menu::{event::UpdateMenuDay, MenuDay},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

fn parse_day(day: &str) -> AppResult<DayOfWeek> {
    day.to_ascii_lowercase()
        .parse()
        .map_err(|_| AppError::InvalidRequest(format!("invalid day: {day}")))
}

fn parse_meal_type(meal_type: &str) -> AppResult<MealType> {
    meal_type
        .to_ascii_lowercase()
        .parse()
        .map_err(|_| AppError::InvalidRequest(format!("invalid meal type: {meal_type}")))
}

pub async fn show_weekly_menu(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<MenuDayResponse>>> {
    registry
        .menu_repository()
        .find_all()
        .await
        .map(|days| days.into_iter().map(MenuDayResponse::from).collect())
        .map(Json)
}

pub async fn show_menu_for_date(
    AppPath(date): AppPath<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MenuForDateResponse>> {
    let date = parse_calendar_date(&date)
        .ok_or_else(|| AppError::InvalidRequest(format!("invalid date: {date}")))?;
    let day = DayOfWeek::of(date);

    // 未登録の曜日は空のメニューとして返す
    let menu = registry
        .menu_repository()
        .find_by_day(day)
        .await?
        .unwrap_or_else(|| MenuDay::empty(day));

    Ok(Json(MenuForDateResponse {
        date,
        menu: menu.into(),
    }))
}

pub async fn update_menu_day(
    user: AuthorizedUser,
    AppPath(day): AppPath<String>,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<UpdateMenuDayRequest>,
) -> AppResult<Json<MenuDayResponse>> {
    user.require_admin()?;
    let day = parse_day(&day)?;

    registry
        .menu_repository()
        .update(req.into_event(day))
        .await
        .map(MenuDayResponse::from)
        .map(Json)
}

pub async fn replace_day_meal(
    user: AuthorizedUser,
    AppPath((day, meal_type)): AppPath<(String, String)>,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<ReplaceMealRequest>,
) -> AppResult<Json<MenuDayResponse>> {
    user.require_admin()?;
    let day = parse_day(&day)?;
    let meal_type = parse_meal_type(&meal_type)?;

    let menu = registry
        .menu_repository()
        .update(UpdateMenuDay::single(day, meal_type, req.into_items()))
        .await?;
    tracing::info!(day = day.as_ref(), meal = %meal_type, "menu replaced");

    Ok(Json(menu.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_and_meal_names_are_case_insensitive() {
        assert_eq!(parse_day("Monday").unwrap(), DayOfWeek::Monday);
        assert_eq!(parse_meal_type("DINNER").unwrap(), MealType::Dinner);
    }

    #[test]
    fn unknown_day_or_meal_is_a_bad_request() {
        assert!(matches!(parse_day("someday"), Err(AppError::InvalidRequest(_))));
        assert!(matches!(parse_meal_type("brunch"), Err(AppError::InvalidRequest(_))));
    }
}
