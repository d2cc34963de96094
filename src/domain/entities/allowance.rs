//! Allowance entries and their cap policies.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Maximum amount a single donation entry may deduct.
pub const DONATION_CAP: Decimal = dec!(100000);

/// Recognised allowance categories.
///
/// Adding a category means adding a variant here and giving it a
/// [`CapPolicy`] in [`AllowanceKind::cap_policy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AllowanceKind {
    Donation,
    KReceipt,
}

impl AllowanceKind {
    /// Every recognised category, in declaration order.
    pub const ALL: [AllowanceKind; 2] = [AllowanceKind::Donation, AllowanceKind::KReceipt];

    /// Parses a wire tag such as `"donation"` or `"k-receipt"`.
    ///
    /// Tags are matched exactly; `"Donation"` is not recognised.
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AllowanceKind::Donation => "donation",
            AllowanceKind::KReceipt => "k-receipt",
        }
    }

    /// How amounts of this category are limited before aggregation.
    pub fn cap_policy(self) -> CapPolicy {
        match self {
            AllowanceKind::Donation => CapPolicy::Fixed(DONATION_CAP),
            AllowanceKind::KReceipt => CapPolicy::Configured,
        }
    }
}

impl std::fmt::Display for AllowanceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Limit applied to a single allowance entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapPolicy {
    /// The raw amount is deductible.
    Uncapped,
    /// Deductible amount never exceeds the given constant.
    Fixed(Decimal),
    /// Deductible amount never exceeds the administrator-configured maximum.
    Configured,
}

impl CapPolicy {
    /// Returns the deductible part of `amount` under this policy.
    pub fn apply(self, amount: Decimal, configured_max: Decimal) -> Decimal {
        match self {
            CapPolicy::Uncapped => amount,
            CapPolicy::Fixed(cap) => amount.min(cap),
            CapPolicy::Configured => amount.min(configured_max),
        }
    }
}

/// An allowance entry as received from a client, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawAllowance {
    pub allowance_type: String,
    pub amount: Decimal,
}

/// A validated allowance entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allowance {
    pub kind: AllowanceKind,
    pub amount: Decimal,
}

impl Allowance {
    pub fn new(kind: AllowanceKind, amount: Decimal) -> Self {
        Self { kind, amount }
    }

    pub fn donation(amount: Decimal) -> Self {
        Self::new(AllowanceKind::Donation, amount)
    }
}
