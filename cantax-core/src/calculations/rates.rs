//! Derived rate reporting.
//!
//! Rates coming out of the engine are percentages rounded to two decimal
//! places, ready for display; the bracket tables themselves hold fractions.

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;

/// Average (effective) rate: everything paid as a percentage of net income.
///
/// Returns zero when net income is zero, so a no-income year never divides
/// by zero.
pub fn effective_rate(total_tax_paid: Decimal, net_income: Decimal) -> Decimal {
    if net_income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    round_half_up(Decimal::ONE_HUNDRED * total_tax_paid / net_income)
}

/// Combined federal-plus-provincial marginal rate as a percentage.
///
/// The pension contribution is deliberately left out of this figure; it is
/// not an income tax.
pub fn combined_marginal_rate(federal_rate: Decimal, provincial_rate: Decimal) -> Decimal {
    round_half_up(Decimal::ONE_HUNDRED * (federal_rate + provincial_rate))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn effective_rate_is_zero_for_zero_net_income() {
        assert_eq!(effective_rate(dec!(1000.00), dec!(0)), dec!(0));
    }

    #[test]
    fn effective_rate_divides_paid_by_net_income() {
        // 11785.18 / 50000 = 23.57036% → 23.57
        assert_eq!(effective_rate(dec!(11785.18), dec!(50000.00)), dec!(23.57));
    }

    #[test]
    fn effective_rate_rounds_half_up() {
        // 125 / 1000 = 12.5%; 1.25 / 1000 = 0.125% → 0.13
        assert_eq!(effective_rate(dec!(1.25), dec!(1000.00)), dec!(0.13));
    }

    #[test]
    fn effective_rate_is_zero_when_nothing_paid() {
        assert_eq!(effective_rate(dec!(0), dec!(50000.00)), dec!(0.00));
    }

    #[test]
    fn combined_marginal_rate_adds_both_schedules() {
        assert_eq!(
            combined_marginal_rate(dec!(0.145), dec!(0.0505)),
            dec!(19.55)
        );
    }

    #[test]
    fn combined_marginal_rate_rounds_to_two_places() {
        assert_eq!(
            combined_marginal_rate(dec!(0.2575), dec!(0.0515)),
            dec!(30.90)
        );
    }
}
