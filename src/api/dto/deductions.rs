//! DTOs for the admin deduction endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::{DeductionSettings, check_configured_amount};

/// Request body for both deduction update endpoints.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AmountRequest {
    #[validate(custom(function = "validate_amount"))]
    pub amount: Decimal,
}

fn validate_amount(amount: &Decimal) -> Result<(), ValidationError> {
    check_configured_amount(*amount)
        .map_err(|e| ValidationError::new("amount_range").with_message(e.to_string().into()))
}

/// Response of `POST /admin/deductions/personal`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalDeductionResponse {
    pub personal_deduction: Decimal,
}

/// Response of `POST /admin/deductions/k-receipt`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KReceiptResponse {
    pub k_receipt: Decimal,
}

/// Response of `GET /admin/deductions`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeductionSettingsResponse {
    pub personal_deduction: Decimal,
    pub k_receipt: Decimal,
    pub updated_at: DateTime<Utc>,
}

impl From<DeductionSettings> for DeductionSettingsResponse {
    fn from(settings: DeductionSettings) -> Self {
        Self {
            personal_deduction: settings.config.personal_deduction,
            k_receipt: settings.config.k_receipt_max,
            updated_at: settings.updated_at,
        }
    }
}
