//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Database**: The configuration store answers
/// 2. **Configuration**: A deduction configuration row exists
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected" },
///     "configuration": {
///       "status": "ok",
///       "message": "Personal deduction: 60000, k-receipt max: 50000"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let (database, configuration) = check_configuration_store(&state).await;

    let all_healthy = database.is_ok() && configuration.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            database,
            configuration,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Reads the stored configuration once and derives both checks from it.
async fn check_configuration_store(state: &AppState) -> (CheckStatus, CheckStatus) {
    match state.deduction_service.get_settings().await {
        Ok(settings) => (
            CheckStatus::ok("Connected"),
            CheckStatus::ok(format!(
                "Personal deduction: {}, k-receipt max: {}",
                settings.config.personal_deduction, settings.config.k_receipt_max
            )),
        ),
        Err(AppError::NotFound { message, .. }) => {
            (CheckStatus::ok("Connected"), CheckStatus::error(message))
        }
        Err(e) => (
            CheckStatus::error(format!("Database error: {}", e)),
            CheckStatus::error("Configuration could not be read"),
        ),
    }
}
