use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use crate::{ApiState, handlers::availability};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        // Windows of the default schedule
        .route(
            "/api/availability",
            get(availability::get_availability).put(availability::bulk_update_availability),
        )
        .route(
            "/api/availability/timezone",
            get(availability::get_timezone).put(availability::update_timezone),
        )
        .route(
            "/api/availability/schedules",
            get(availability::list_schedules).post(availability::create_schedule),
        )
        .route(
            "/api/availability/schedules/:id",
            get(availability::get_schedule)
                .put(availability::update_schedule)
                .delete(availability::delete_schedule),
        )
        .route(
            "/api/availability/schedules/:id/slots",
            put(availability::replace_schedule_windows),
        )
        .route(
            "/api/availability/schedules/:id/overrides",
            post(availability::create_date_override),
        )
        .route(
            "/api/availability/overrides/:id",
            delete(availability::delete_date_override),
        )
        .route("/api/availability/:id", put(availability::update_availability))
}
