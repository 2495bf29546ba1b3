use axum::{
    routing::{get, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::guest_booking::{
    create_guest_booking, delete_guest_booking, show_guest_bookings_by_date,
    show_guest_bookings_report, update_guest_booking_status,
};

pub fn build_guest_booking_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", get(show_guest_bookings_by_date).post(create_guest_booking))
        .route("/report", get(show_guest_bookings_report))
        .route(
            "/:guest_booking_id",
            put(update_guest_booking_status).delete(delete_guest_booking),
        );

    Router::new().nest("/guest-bookings", routers)
}
