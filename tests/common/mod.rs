#![allow(dead_code)]

use axum::extract::Request;
use axum::http::{HeaderName, HeaderValue, header};
use axum::routing::get;
use axum::{Router, ServiceExt, middleware};
use axum_test::TestServer;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::net::SocketAddr;
use std::sync::Arc;
use tax_service::api::handlers::health_handler;
use tax_service::api::middleware::admin_auth;
use tax_service::api::routes::{admin_routes, tax_routes};
use tax_service::application::services::AuthService;
use tax_service::infrastructure::persistence::InMemoryDeductionRepository;
use tax_service::routes::app_router;
use tax_service::state::AppState;

pub const ADMIN_USERNAME: &str = "adminTax";
pub const ADMIN_PASSWORD: &str = "admin!";

pub const SEED_PERSONAL_DEDUCTION: Decimal = dec!(60000);
pub const SEED_K_RECEIPT_MAX: Decimal = dec!(50000);

/// State backed by an in-memory store holding the given deductions.
pub fn create_test_state(personal_deduction: Decimal, k_receipt_max: Decimal) -> AppState {
    let repository = Arc::new(InMemoryDeductionRepository::new(
        personal_deduction,
        k_receipt_max,
    ));

    AppState::new(repository, AuthService::new(ADMIN_USERNAME, ADMIN_PASSWORD))
}

/// State seeded like a freshly migrated database.
pub fn create_seeded_state() -> AppState {
    create_test_state(SEED_PERSONAL_DEDUCTION, SEED_K_RECEIPT_MAX)
}

/// State whose store has no configuration row.
pub fn create_unconfigured_state() -> AppState {
    AppState::new(
        Arc::new(InMemoryDeductionRepository::empty()),
        AuthService::new(ADMIN_USERNAME, ADMIN_PASSWORD),
    )
}

/// The route table with admin authentication but no rate limiting, so
/// handler tests can send any number of requests.
pub fn create_test_router(state: AppState) -> Router {
    let admin = admin_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        admin_auth::layer,
    ));

    Router::new()
        .route("/health", get(health_handler))
        .nest("/tax", tax_routes())
        .nest("/admin", admin)
        .with_state(state)
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(create_test_router(state)).unwrap()
}

/// The production router served over a real socket with peer addresses,
/// as `server::run` serves it.
pub fn create_app_server(state: AppState) -> TestServer {
    let app =
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app_router(state));

    TestServer::builder().http_transport().build(app).unwrap()
}

/// `Authorization` value for `adminTax:admin!`.
pub const ADMIN_BASIC_AUTH: &str = "Basic YWRtaW5UYXg6YWRtaW4h";

/// `Authorization` value for `adminTax:wrong`.
pub const WRONG_PASSWORD_BASIC_AUTH: &str = "Basic YWRtaW5UYXg6d3Jvbmc=";

pub fn auth_header(value: &'static str) -> (HeaderName, HeaderValue) {
    (header::AUTHORIZATION, HeaderValue::from_static(value))
}
