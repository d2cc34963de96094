//! Tax calculation request, raw and validated.

use rust_decimal::Decimal;

use super::allowance::{Allowance, RawAllowance};

/// A calculation request as received from a client.
///
/// Nothing about it is trusted yet; see [`crate::domain::tax::validate`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaxRequest {
    pub total_income: Decimal,
    pub wht: Decimal,
    pub allowances: Vec<RawAllowance>,
}

/// A request that passed validation.
///
/// Income is strictly positive, withholding lies in `0..=total_income`, and
/// every allowance has a recognised category and a non-negative amount.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub(crate) total_income: Decimal,
    pub(crate) wht: Decimal,
    pub(crate) allowances: Vec<Allowance>,
}

impl ValidatedRequest {
    pub fn total_income(&self) -> Decimal {
        self.total_income
    }

    pub fn wht(&self) -> Decimal {
        self.wht
    }

    pub fn allowances(&self) -> &[Allowance] {
        &self.allowances
    }
}

/// One row of a batch upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxRecord {
    pub total_income: Decimal,
    pub wht: Decimal,
    pub donation: Decimal,
}

impl From<TaxRecord> for TaxRequest {
    fn from(record: TaxRecord) -> Self {
        TaxRequest {
            total_income: record.total_income,
            wht: record.wht,
            allowances: vec![RawAllowance {
                allowance_type: "donation".to_string(),
                amount: record.donation,
            }],
        }
    }
}
