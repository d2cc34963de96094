//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`   - Health check: database and configuration (public)
//! - `/tax/*`         - Tax calculation API (public, rate limited)
//! - `/admin/*`       - Deduction management (Basic auth, strict rate limit)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket
//! - **Authentication** - HTTP Basic on admin routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{admin_auth, rate_limit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let tax_router = api::routes::tax_routes().layer(rate_limit::layer());

    let admin_router = api::routes::admin_routes()
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            admin_auth::layer,
        ))
        .layer(rate_limit::secure_layer());

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/tax", tax_router)
        .nest("/admin", admin_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
