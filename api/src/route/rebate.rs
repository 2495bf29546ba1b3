use axum::{
    routing::{get, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::rebate::{apply_rebate, show_my_rebates, show_rebate_list, update_rebate_status};

pub fn build_rebate_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", get(show_rebate_list).post(apply_rebate))
        .route("/mine", get(show_my_rebates))
        .route("/:rebate_id", put(update_rebate_status));

    Router::new().nest("/rebates", routers)
}
