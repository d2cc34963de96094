//! Handler for the tax calculation endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::api::dto::calculation::{CalculationRequest, CalculationResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Calculates tax for one filing.
///
/// # Endpoint
///
/// `POST /tax/calculations`
///
/// # Request Body
///
/// ```json
/// {
///   "totalIncome": 500000.0,
///   "wht": 0.0,
///   "allowances": [
///     { "allowanceType": "donation", "amount": 0.0 }
///   ]
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "tax": 29000.0,
///   "taxLevels": [
///     { "level": "0-150,000", "tax": 0.0 },
///     { "level": "150,001-500,000", "tax": 29000.0 },
///     { "level": "500,001-1,000,000", "tax": 0.0 },
///     { "level": "1,000,001-2,000,000", "tax": 0.0 },
///     { "level": "2,000,001 and above", "tax": 0.0 }
///   ]
/// }
/// ```
///
/// `taxRefund` appears only when withholding exceeds the computed tax.
///
/// # Errors
///
/// - 400 for malformed JSON, unknown fields or a validation failure
/// - 404 if no deduction configuration exists
/// - 500 if the configuration cannot be fetched
pub async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Result<Json<CalculationResponse>, AppError> {
    let Json(payload) = payload?;

    let result = state.tax_service.calculate(payload.into()).await?;

    Ok(Json(result.into()))
}
