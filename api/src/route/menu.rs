use axum::{
    routing::{get, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::menu::{replace_day_meal, show_menu_for_date, show_weekly_menu, update_menu_day};

pub fn build_menu_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", get(show_weekly_menu))
        .route("/date/:date", get(show_menu_for_date))
        .route("/:day", put(update_menu_day))
        .route("/:day/:meal_type", put(replace_day_meal));

    Router::new().nest("/menu", routers)
}
