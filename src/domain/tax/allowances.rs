//! Allowance aggregation.

use rust_decimal::Decimal;

use crate::domain::entities::Allowance;

/// Sums the deductible part of every allowance entry.
///
/// Each entry is limited by its category's [`crate::domain::entities::CapPolicy`];
/// `configured_max` is the administrator-set limit used by configured caps.
/// Caps apply per entry, so two donations of 80,000 deduct 160,000.
pub fn aggregate_allowances(entries: &[Allowance], configured_max: Decimal) -> Decimal {
    entries
        .iter()
        .map(|entry| {
            entry.kind.cap_policy().apply(entry.amount, configured_max)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::AllowanceKind;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_entries_sum_to_zero() {
        assert_eq!(aggregate_allowances(&[], dec!(50000)), dec!(0));
    }

    #[test]
    fn test_donation_above_cap_contributes_cap() {
        let entries = [Allowance::donation(dec!(200000))];

        assert_eq!(aggregate_allowances(&entries, dec!(50000)), dec!(100000));
    }

    #[test]
    fn test_donation_below_cap_contributes_amount() {
        let entries = [Allowance::donation(dec!(50000))];

        assert_eq!(aggregate_allowances(&entries, dec!(50000)), dec!(50000));
    }

    #[test]
    fn test_k_receipt_uses_configured_cap() {
        let entries = [Allowance::new(AllowanceKind::KReceipt, dec!(70000))];

        assert_eq!(aggregate_allowances(&entries, dec!(50000)), dec!(50000));
        assert_eq!(aggregate_allowances(&entries, dec!(90000)), dec!(70000));
    }

    #[test]
    fn test_mixed_entries_are_capped_independently() {
        let entries = [
            Allowance::donation(dec!(150000)),
            Allowance::new(AllowanceKind::KReceipt, dec!(60000)),
            Allowance::donation(dec!(0)),
            Allowance::donation(dec!(1000)),
        ];

        assert_eq!(aggregate_allowances(&entries, dec!(50000)), dec!(151000));
    }

    #[test]
    fn test_order_does_not_matter() {
        let mut entries = vec![
            Allowance::donation(dec!(120000)),
            Allowance::new(AllowanceKind::KReceipt, dec!(30000)),
            Allowance::donation(dec!(5000)),
        ];
        let forward = aggregate_allowances(&entries, dec!(20000));
        entries.reverse();

        assert_eq!(aggregate_allowances(&entries, dec!(20000)), forward);
        assert_eq!(forward, dec!(125000));
    }
}
