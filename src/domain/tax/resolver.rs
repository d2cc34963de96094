//! Crediting withholding against computed tax.

use rust_decimal::Decimal;

use crate::domain::entities::Settlement;

/// Nets `total_tax` against `withholding`.
///
/// A non-negative difference is tax payable; a negative one becomes a refund
/// and the reported tax is zero.
pub fn resolve_result(total_tax: Decimal, withholding: Decimal) -> Settlement {
    let net = total_tax - withholding;

    if net < Decimal::ZERO {
        Settlement {
            tax: Decimal::ZERO,
            refund: Some(-net),
        }
    } else {
        Settlement {
            tax: net,
            refund: None,
        }
    }
}
