//! Core domain entities representing the tax calculation data model.
//!
//! Entities are plain value objects, constructed fresh per request and never
//! shared between calculations.
//!
//! # Entity Types
//!
//! - [`TaxRequest`] / [`ValidatedRequest`] - A calculation request before and after validation
//! - [`RawAllowance`] / [`Allowance`] - Allowance entries, untyped and typed
//! - [`DeductionConfig`] / [`DeductionSettings`] - Administrator-configured parameters
//! - [`TaxResult`], [`TaxLevel`], [`Settlement`] - Calculation outputs
//! - [`TaxRecord`] / [`BatchTaxResult`] - One row of a batch upload and its outcome

pub mod allowance;
pub mod deduction;
pub mod tax_request;
pub mod tax_result;

pub use allowance::{Allowance, AllowanceKind, CapPolicy, DONATION_CAP, RawAllowance};
pub use deduction::{
    AmountError, DeductionConfig, DeductionSettings, MAX_CONFIGURED_AMOUNT,
    PERSONAL_DEDUCTION_FLOOR, check_configured_amount,
};
pub use tax_request::{TaxRecord, TaxRequest, ValidatedRequest};
pub use tax_result::{BatchTaxResult, Settlement, TaxLevel, TaxResult};
