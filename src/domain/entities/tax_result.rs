//! Calculation outputs.

use rust_decimal::Decimal;

/// Tax contributed by one bracket of the schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxLevel {
    pub label: &'static str,
    pub tax: Decimal,
}

/// Final position after crediting withholding.
///
/// At most one of `tax` and `refund` is non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    pub tax: Decimal,
    pub refund: Option<Decimal>,
}

impl Settlement {
    /// Signed position: positive when tax is owed, negative when refunded.
    pub fn net(&self) -> Decimal {
        self.tax - self.refund.unwrap_or(Decimal::ZERO)
    }
}

/// Outcome of a single calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxResult {
    /// Bracket tax before withholding is credited.
    pub gross_tax: Decimal,
    pub settlement: Settlement,
    /// One entry per bracket, in schedule order.
    pub levels: Vec<TaxLevel>,
}

impl TaxResult {
    pub fn tax(&self) -> Decimal {
        self.settlement.tax
    }

    pub fn refund(&self) -> Option<Decimal> {
        self.settlement.refund
    }
}

/// Outcome of one batch record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchTaxResult {
    pub total_income: Decimal,
    pub settlement: Settlement,
}
