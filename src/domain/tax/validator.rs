//! Request validation.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::entities::{Allowance, AllowanceKind, TaxRequest, ValidatedRequest};

/// First rule a request violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("total income must be specified and greater than zero")]
    NonPositiveIncome,

    #[error("withholding cannot be negative")]
    NegativeWithholding,

    #[error("withholding cannot exceed total income")]
    WithholdingExceedsIncome,

    #[error("unrecognized allowance category")]
    UnrecognizedAllowance { category: String },

    #[error("allowance amounts cannot be negative")]
    NegativeAllowance { category: AllowanceKind },
}

/// Validates a request and converts its allowances to typed entries.
///
/// Rules run in a fixed order and the first failure is returned:
///
/// 1. total income must be greater than zero
/// 2. withholding must not be negative
/// 3. withholding must not exceed total income
/// 4. every allowance category must be recognised
/// 5. every allowance amount must be non-negative
///
/// Rule 4 is checked across all entries before rule 5 looks at any amount.
pub fn validate(request: &TaxRequest) -> Result<ValidatedRequest, ValidationError> {
    if request.total_income <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveIncome);
    }
    if request.wht < Decimal::ZERO {
        return Err(ValidationError::NegativeWithholding);
    }
    if request.wht > request.total_income {
        return Err(ValidationError::WithholdingExceedsIncome);
    }

    let kinds = request
        .allowances
        .iter()
        .map(|raw| {
            AllowanceKind::parse(&raw.allowance_type).ok_or_else(|| {
                ValidationError::UnrecognizedAllowance {
                    category: raw.allowance_type.clone(),
                }
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let allowances = kinds
        .into_iter()
        .zip(&request.allowances)
        .map(|(kind, raw)| {
            if raw.amount < Decimal::ZERO {
                Err(ValidationError::NegativeAllowance { category: kind })
            } else {
                Ok(Allowance::new(kind, raw.amount))
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ValidatedRequest {
        total_income: request.total_income,
        wht: request.wht,
        allowances,
    })
}
