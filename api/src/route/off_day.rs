use axum::{
    routing::{delete, get},
    Router,
};
use registry::AppRegistry;

use crate::handler::off_day::{check_off_day, delete_off_day, register_off_day, show_off_day_list};

pub fn build_off_day_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", get(show_off_day_list).post(register_off_day))
        .route("/check", get(check_off_day))
        .route("/:off_day_id", delete(delete_off_day));

    Router::new().nest("/off-days", routers)
}
