use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/bookings",
            get(handlers::booking::list_bookings).post(handlers::booking::create_booking),
        )
        .route(
            "/api/bookings/available-slots",
            get(handlers::booking::available_slots),
        )
        .route(
            "/api/bookings/:id",
            get(handlers::booking::get_booking).put(handlers::booking::reschedule_booking),
        )
        .route("/api/bookings/:id/cancel", put(handlers::booking::cancel_booking))
}
