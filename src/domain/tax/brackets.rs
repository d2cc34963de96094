//! Progressive tax schedule.
//!
//! Income is taxed as a marginal-rate ladder: each bracket's rate applies
//! only to the slice of income between the previous bracket's upper bound
//! and its own. No rate applies retroactively to income below its threshold.
//!
//! | Upper bound | Rate | Label |
//! |-------------|------|-------|
//! | 150,000     | 0%   | `0-150,000` |
//! | 500,000     | 10%  | `150,001-500,000` |
//! | 1,000,000   | 15%  | `500,001-1,000,000` |
//! | 2,000,000   | 20%  | `1,000,001-2,000,000` |
//! | unbounded   | 35%  | `2,000,001 and above` |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_service::domain::tax::compute_progressive_tax;
//!
//! let tax = compute_progressive_tax(dec!(440000));
//!
//! assert_eq!(tax.total, dec!(29000));
//! assert_eq!(tax.levels.len(), 5);
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::entities::TaxLevel;

/// One row of the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxBracket {
    /// Inclusive upper bound; `None` for the top bracket.
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
    pub label: &'static str,
}

/// The schedule, ordered by ascending upper bound.
pub static TAX_BRACKETS: [TaxBracket; 5] = [
    TaxBracket {
        upper_bound: Some(dec!(150000)),
        rate: dec!(0.00),
        label: "0-150,000",
    },
    TaxBracket {
        upper_bound: Some(dec!(500000)),
        rate: dec!(0.10),
        label: "150,001-500,000",
    },
    TaxBracket {
        upper_bound: Some(dec!(1000000)),
        rate: dec!(0.15),
        label: "500,001-1,000,000",
    },
    TaxBracket {
        upper_bound: Some(dec!(2000000)),
        rate: dec!(0.20),
        label: "1,000,001-2,000,000",
    },
    TaxBracket {
        upper_bound: None,
        rate: dec!(0.35),
        label: "2,000,001 and above",
    },
];

/// Total tax and its per-bracket breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressiveTax {
    pub total: Decimal,
    /// Always one entry per bracket of [`TAX_BRACKETS`], zeros included.
    pub levels: Vec<TaxLevel>,
}

/// Applies [`TAX_BRACKETS`] to a net taxable income.
///
/// Negative income is treated as zero. Every bracket is reported even when
/// income does not reach it, so the breakdown always has the same shape.
pub fn compute_progressive_tax(net_income: Decimal) -> ProgressiveTax {
    let income = net_income.max(Decimal::ZERO);

    let mut total = Decimal::ZERO;
    let mut levels = Vec::with_capacity(TAX_BRACKETS.len());
    let mut previous_bound = Decimal::ZERO;

    for bracket in &TAX_BRACKETS {
        let tax = if income > previous_bound {
            let ceiling = bracket.upper_bound.map_or(income, |bound| income.min(bound));
            (ceiling - previous_bound) * bracket.rate
        } else {
            Decimal::ZERO
        };

        total += tax;
        levels.push(TaxLevel {
            label: bracket.label,
            tax,
        });

        if let Some(bound) = bracket.upper_bound {
            previous_bound = bound;
        }
    }

    ProgressiveTax { total, levels }
}
