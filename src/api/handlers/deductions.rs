//! Handlers for admin deduction management.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::deductions::{
    AmountRequest, DeductionSettingsResponse, KReceiptResponse, PersonalDeductionResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the current deduction configuration.
///
/// # Endpoint
///
/// `GET /admin/deductions`
///
/// # Response
///
/// ```json
/// {
///   "personalDeduction": 60000.0,
///   "kReceipt": 50000.0,
///   "updatedAt": "2024-04-01T00:00:00Z"
/// }
/// ```
pub async fn get_deductions_handler(
    State(state): State<AppState>,
) -> Result<Json<DeductionSettingsResponse>, AppError> {
    let settings = state.deduction_service.get_settings().await?;

    Ok(Json(settings.into()))
}

/// Sets the personal deduction.
///
/// # Endpoint
///
/// `POST /admin/deductions/personal` with `{"amount": 70000.0}`
///
/// # Errors
///
/// Returns 400 if the amount is negative or above 100,000.
pub async fn set_personal_deduction_handler(
    State(state): State<AppState>,
    payload: Result<Json<AmountRequest>, JsonRejection>,
) -> Result<Json<PersonalDeductionResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let settings = state
        .deduction_service
        .update_personal_deduction(payload.amount)
        .await?;

    Ok(Json(PersonalDeductionResponse {
        personal_deduction: settings.config.personal_deduction,
    }))
}

/// Sets the k-receipt maximum.
///
/// # Endpoint
///
/// `POST /admin/deductions/k-receipt` with `{"amount": 70000.0}`
///
/// # Errors
///
/// Returns 400 if the amount is negative or above 100,000.
pub async fn set_k_receipt_handler(
    State(state): State<AppState>,
    payload: Result<Json<AmountRequest>, JsonRejection>,
) -> Result<Json<KReceiptResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let settings = state
        .deduction_service
        .update_k_receipt_max(payload.amount)
        .await?;

    Ok(Json(KReceiptResponse {
        k_receipt: settings.config.k_receipt_max,
    }))
}
