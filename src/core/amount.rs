// Amount handling shared by the orchestrator and the PayPal client.
//
// Order amounts arrive in major units (10.50); payment requests carry cents
// (1050). Both are compared in Decimal so the historical 1e-5 tolerance holds
// without float drift.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::{AppError, Result};

/// Maximum absolute difference, in cents, for two amounts to be considered equal
pub const AMOUNT_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 5);

/// Scales a major-unit amount to cents
///
/// # Errors
/// `Validation` when the scaled amount does not fit a `Decimal`
pub fn to_cents(amount: Decimal) -> Result<Decimal> {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or_else(|| AppError::validation(format!("Amount {} is out of range", amount)))
}

/// Returns true when `requested` and `expected` (both in cents) are within tolerance
///
/// A difference too large to represent never matches.
pub fn amounts_match(requested: Decimal, expected: Decimal) -> bool {
    requested
        .checked_sub(expected)
        .is_some_and(|diff| diff.abs() <= AMOUNT_TOLERANCE)
}

/// Rounds a cents amount to a whole number of cents (banker's rounding)
pub fn whole_cents(cents: Decimal) -> Result<i64> {
    cents
        .round_dp(0)
        .to_i64()
        .ok_or_else(|| AppError::validation(format!("Amount {} is out of range", cents)))
}
