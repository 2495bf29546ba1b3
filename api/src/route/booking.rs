use axum::{
    routing::{get, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::booking::{
    check_eligibility, create_booking, show_attendance, show_bookings_by_date,
    show_monthly_summary, show_my_bookings, update_booking_status,
};

pub fn build_booking_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", get(show_bookings_by_date).post(create_booking))
        .route("/mine", get(show_my_bookings))
        .route("/eligibility", get(check_eligibility))
        .route("/summary", get(show_monthly_summary))
        .route("/attendance/:user_id", get(show_attendance))
        .route("/:booking_id", put(update_booking_status));

    Router::new().nest("/bookings", routers)
}
