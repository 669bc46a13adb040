//! Decimal rescaling between assets of different precisions.
//!
//! Wrapped tokens keep a fixed precision (typically 18 decimals) while their
//! underlying assets expose whatever precision they were issued with. All
//! conversions are 1:1 in value, so moving between the two is a pure
//! power-of-ten rescale. Truncation policy: scaling down always floors;
//! nothing here ever rounds up.

/// Rescale `amount` from a `from_decimals` asset into a `to_decimals` asset.
///
/// Returns `None` when scaling up overflows `i128` (including absurd decimal
/// gaps where `10^diff` itself overflows). Scaling down uses floor division,
/// so dust below the coarser precision is dropped.
pub fn scale_amount(amount: i128, from_decimals: u32, to_decimals: u32) -> Option<i128> {
    if from_decimals == to_decimals {
        return Some(amount);
    }
    if from_decimals > to_decimals {
        let factor = pow10(from_decimals - to_decimals)?;
        Some(amount / factor)
    } else {
        let factor = pow10(to_decimals - from_decimals)?;
        amount.checked_mul(factor)
    }
}

fn pow10(exp: u32) -> Option<i128> {
    10i128.checked_pow(exp)
}
