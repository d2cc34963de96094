//! API route configuration.
//!
//! The routers here carry no rate limiting or authentication; those layers
//! are added by [`crate::routes::app_router`].

use crate::api::handlers::{
    calculate_handler, get_deductions_handler, set_k_receipt_handler,
    set_personal_deduction_handler, upload_csv_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public tax calculation routes, nested under `/tax`.
///
/// # Endpoints
///
/// - `POST /calculations`             - Calculate tax for one filing
/// - `POST /calculations/upload-csv`  - Calculate tax for every row of a CSV file
pub fn tax_routes() -> Router<AppState> {
    Router::new()
        .route("/calculations", post(calculate_handler))
        .route("/calculations/upload-csv", post(upload_csv_handler))
}

/// Admin routes, nested under `/admin`.
///
/// # Endpoints
///
/// - `GET  /deductions`            - Current deduction configuration
/// - `POST /deductions/personal`   - Set the personal deduction
/// - `POST /deductions/k-receipt`  - Set the k-receipt maximum
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/deductions", get(get_deductions_handler))
        .route("/deductions/personal", post(set_personal_deduction_handler))
        .route("/deductions/k-receipt", post(set_k_receipt_handler))
}
