//! # Cal.in API
//!
//! The API crate provides the web server for the Cal.in booking service. It
//! exposes RESTful endpoints for event types, availability schedules and
//! bookings, including the public available-slots lookup.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Validate requests, call repositories and the scheduling kernel
//! - **Middleware**: Map domain errors onto HTTP responses
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework and SQLx for database interactions.
//! Slot computation and conflict checks go through the
//! [`SchedulingStore`] held in [`ApiState`], so they can be exercised against
//! a mock store.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Error handling middleware
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use calin_core::scheduling::SchedulingStore;
use calin_db::PgSchedulingStore;
use eyre::{Result, WrapErr};
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// # Example
///
/// ```ignore
/// let state = Arc::new(ApiState::new(db_pool));
/// let app = calin_api::app(state);
/// ```
pub struct ApiState {
    /// PostgreSQL connection pool for CRUD operations
    pub db_pool: PgPool,
    /// Read side used by slot computation and conflict checks
    pub store: Arc<dyn SchedulingStore>,
}

impl ApiState {
    /// State whose scheduling store reads from the same pool.
    pub fn new(db_pool: PgPool) -> Self {
        let store = Arc::new(PgSchedulingStore::new(db_pool.clone()));
        Self { db_pool, store }
    }
}

/// Builds the application router with every route attached to `state`.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Event type management endpoints
        .merge(routes::event_type::routes())
        // Schedule, window and override endpoints
        .merge(routes::availability::routes())
        // Booking and available slot endpoints
        .merge(routes::booking::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Starts the API server with the provided configuration and database connection
///
/// Initializes logging, builds the router, applies CORS, tracing and timeout
/// layers, and serves until the process is stopped.
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::new(db_pool));
    let app = app(state);

    // Restrict CORS to the configured origins, otherwise allow any origin
    let cors = match &config.cors_origins {
        Some(origins) => {
            let origins = origins
                .iter()
                .map(|origin| origin.parse::<HeaderValue>())
                .collect::<Result<Vec<_>, _>>()
                .wrap_err("Invalid origin in API_CORS_ORIGINS")?;

            CorsLayer::new()
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
                .allow_origin(origins)
                .allow_credentials(true)
        }
        None => CorsLayer::permissive(),
    };

    // Request tracing, CORS and timeout middleware
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
