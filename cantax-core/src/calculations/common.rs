//! Shared helpers for monetary arithmetic.
//!
//! Every monetary intermediate in this engine is rounded to two decimal
//! places at the point it is computed, using half-up rounding.

use rust_decimal::Decimal;

/// Rounds a value to two decimal places, midpoints away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use cantax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(4510.11625)), dec!(4510.12));
/// assert_eq!(round_half_up(dec!(7064.775)), dec!(7064.78));
/// assert_eq!(round_half_up(dec!(1741.554)), dec!(1741.55));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Floors a value at zero.
pub fn clamp_non_negative(value: Decimal) -> Decimal {
    if value > Decimal::ZERO {
        value
    } else {
        Decimal::ZERO
    }
}
