use axum::{
    Router,
    routing::get,
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/event-types",
            get(handlers::event_type::list_event_types)
                .post(handlers::event_type::create_event_type),
        )
        .route(
            "/api/event-types/slug/:slug",
            get(handlers::event_type::get_event_type_by_slug),
        )
        .route(
            "/api/event-types/:id",
            get(handlers::event_type::get_event_type)
                .put(handlers::event_type::update_event_type)
                .delete(handlers::event_type::delete_event_type),
        )
}
