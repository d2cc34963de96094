//! Administrator-configured deduction parameters.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

/// Smallest personal deduction ever applied, whatever is configured.
pub const PERSONAL_DEDUCTION_FLOOR: Decimal = dec!(10000);

/// Largest amount an administrator may configure for either parameter.
pub const MAX_CONFIGURED_AMOUNT: Decimal = dec!(100000);

/// Parameters a single calculation reads from the configuration store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeductionConfig {
    pub personal_deduction: Decimal,
    pub k_receipt_max: Decimal,
}

impl DeductionConfig {
    pub fn new(personal_deduction: Decimal, k_receipt_max: Decimal) -> Self {
        Self {
            personal_deduction,
            k_receipt_max,
        }
    }

    /// Personal deduction raised to [`PERSONAL_DEDUCTION_FLOOR`] when the
    /// configured value is lower.
    pub fn effective_personal_deduction(&self) -> Decimal {
        self.personal_deduction.max(PERSONAL_DEDUCTION_FLOOR)
    }
}

/// Stored deduction configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeductionSettings {
    pub config: DeductionConfig,
    pub updated_at: DateTime<Utc>,
}

impl DeductionSettings {
    pub fn new(
        personal_deduction: Decimal,
        k_receipt_max: Decimal,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            config: DeductionConfig::new(personal_deduction, k_receipt_max),
            updated_at,
        }
    }
}

/// Rejection of an administrator-supplied amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("amount cannot be negative")]
    Negative,

    #[error("amount cannot be greater than 100000")]
    TooLarge,
}

/// Checks an amount an administrator wants to store.
///
/// Values under [`PERSONAL_DEDUCTION_FLOOR`] are accepted; the floor is
/// applied at calculation time.
pub fn check_configured_amount(amount: Decimal) -> Result<(), AmountError> {
    if amount < Decimal::ZERO {
        return Err(AmountError::Negative);
    }
    if amount > MAX_CONFIGURED_AMOUNT {
        return Err(AmountError::TooLarge);
    }
    Ok(())
}
