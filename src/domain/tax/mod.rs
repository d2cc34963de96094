//! Tax computation engine.
//!
//! Pure and synchronous: nothing here touches I/O or shared mutable state.
//! A calculation flows one way through the stages below.
//!
//! 1. [`validate`] - raw request to [`ValidatedRequest`]
//! 2. [`aggregate_allowances`] - capped allowance total
//! 3. net taxable income = income - effective personal deduction - allowances
//! 4. [`compute_progressive_tax`] - total tax plus per-bracket breakdown
//! 5. [`resolve_result`] - tax payable or refund after withholding
//!
//! [`calculate`] runs stages 2-5 for an already validated request.

pub mod allowances;
pub mod brackets;
pub mod resolver;
pub mod validator;

pub use allowances::aggregate_allowances;
pub use brackets::{ProgressiveTax, TAX_BRACKETS, TaxBracket, compute_progressive_tax};
pub use resolver::resolve_result;
pub use validator::{ValidationError, validate};

use rust_decimal::Decimal;

use crate::domain::entities::{DeductionConfig, TaxResult, ValidatedRequest};

/// Income left after the personal deduction and allowances. May be negative.
pub fn net_taxable_income(request: &ValidatedRequest, config: &DeductionConfig) -> Decimal {
    request.total_income()
        - config.effective_personal_deduction()
        - aggregate_allowances(request.allowances(), config.k_receipt_max)
}

/// Computes the final result for a validated request.
pub fn calculate(request: &ValidatedRequest, config: &DeductionConfig) -> TaxResult {
    let net_income = net_taxable_income(request, config);
    let ProgressiveTax { total, levels } = compute_progressive_tax(net_income);

    TaxResult {
        gross_tax: total,
        settlement: resolve_result(total, request.wht()),
        levels,
    }
}
