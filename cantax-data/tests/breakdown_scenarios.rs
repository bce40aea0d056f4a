//! End-to-end breakdown scenarios over the built-in 2025 tables.

use cantax_core::{BreakdownCalculator, BreakdownError, Province};
use cantax_data::tables_2025;
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

#[test]
fn ontario_freelancer_with_expenses() {
    let calculator = BreakdownCalculator::new(tables_2025());

    let breakdown = calculator
        .calculate_for_code(dec!(60000.00), dec!(10000.00), "ON")
        .unwrap();

    assert_eq!(breakdown.gross_income, dec!(60000.00));
    assert_eq!(breakdown.deductible_expenses, dec!(10000.00));
    assert_eq!(breakdown.net_income, dec!(50000.00));
    // CPP base tier: (min(50000, 71300) - 3500) × 0.119
    assert_eq!(breakdown.pension_contribution, dec!(5533.50));
    assert_eq!(breakdown.pension_deduction, dec!(2766.75));
    assert_eq!(breakdown.taxable_income, dec!(47233.25));
    // Federal: (47233.25 - 16129) × 0.145 = 4510.11625 → 4510.12
    assert_eq!(breakdown.federal_tax, dec!(4510.12));
    // Ontario: (47233.25 - 12747) × 0.0505 = 1741.555625 → 1741.56
    assert_eq!(breakdown.provincial_tax, dec!(1741.56));
    assert_eq!(breakdown.total_income_tax, dec!(6251.68));
    assert_eq!(breakdown.total_remittance, dec!(11785.18));
    assert_eq!(breakdown.take_home_pay, dec!(38214.82));
    // 11785.18 / 50000 = 23.57036%
    assert_eq!(breakdown.average_tax_rate, dec!(23.57));
    // 14.5% federal + 5.05% Ontario on the next taxable dollar
    assert_eq!(breakdown.marginal_tax_rate, dec!(19.55));
}

#[test]
fn expenses_wiping_out_income_zero_the_breakdown() {
    let calculator = BreakdownCalculator::new(tables_2025());

    let breakdown = calculator
        .calculate_for_code(dec!(40000.00), dec!(45000.00), "ON")
        .unwrap();

    assert_eq!(breakdown.net_income, dec!(0));
    assert_eq!(breakdown.pension_contribution, dec!(0.00));
    assert_eq!(breakdown.taxable_income, dec!(0));
    assert_eq!(breakdown.federal_tax, dec!(0));
    assert_eq!(breakdown.provincial_tax, dec!(0));
    assert_eq!(breakdown.total_income_tax, dec!(0.00));
    assert_eq!(breakdown.total_remittance, dec!(0.00));
    assert_eq!(breakdown.take_home_pay, dec!(0.00));
    assert_eq!(breakdown.average_tax_rate, dec!(0));
    // The next dollar would still land in the lowest bands.
    assert_eq!(breakdown.marginal_tax_rate, dec!(19.55));
}

#[test]
fn income_past_both_pension_ceilings_engages_the_second_tier() {
    let calculator = BreakdownCalculator::new(tables_2025());

    let breakdown = calculator
        .calculate_for_code(dec!(90000.00), dec!(0), "ON")
        .unwrap();

    // Base tier (71300 - 3500) × 0.119 = 8068.20, plus the full second-tier
    // band (81200 - 71300) × 0.08 = 792.00.
    assert_eq!(breakdown.pension_contribution, dec!(8860.20));
    assert_eq!(breakdown.pension_deduction, dec!(4430.10));
    assert_eq!(breakdown.taxable_income, dec!(85569.90));
    assert_eq!(breakdown.federal_tax, dec!(11760.62));
    assert_eq!(breakdown.provincial_tax, dec!(5017.60));
    assert_eq!(breakdown.total_income_tax, dec!(16778.22));
    assert_eq!(breakdown.total_remittance, dec!(25638.42));
    assert_eq!(breakdown.take_home_pay, dec!(64361.58));
    assert_eq!(breakdown.average_tax_rate, dec!(28.49));
    // Second federal band (20.5%) plus second Ontario band (9.15%).
    assert_eq!(breakdown.marginal_tax_rate, dec!(29.65));
}

#[test]
fn unregistered_code_is_rejected_without_a_result() {
    let calculator = BreakdownCalculator::new(tables_2025());

    let result = calculator.calculate_for_code(dec!(50000.00), dec!(0), "XX");

    assert_eq!(
        result,
        Err(BreakdownError::UnknownProvince("XX".to_string()))
    );
}

#[test]
fn every_registered_jurisdiction_produces_a_breakdown() {
    let calculator = BreakdownCalculator::new(tables_2025());

    for province in Province::ALL {
        let breakdown = calculator
            .calculate(dec!(75000.00), dec!(5000.00), province)
            .unwrap();

        assert_eq!(breakdown.net_income, dec!(70000.00));
        assert!(breakdown.total_income_tax > dec!(0), "no tax for {province}");
        assert!(
            breakdown.marginal_tax_rate > dec!(14.5),
            "marginal rate missing the provincial share for {province}"
        );
    }
}

#[test]
fn identical_inputs_give_identical_records() {
    let calculator = BreakdownCalculator::new(tables_2025());

    let first = calculator
        .calculate_for_code(dec!(60000.00), dec!(10000.00), "ON")
        .unwrap();
    let second = calculator
        .calculate_for_code(dec!(60000.00), dec!(10000.00), "ON")
        .unwrap();

    assert_eq!(first, second);
}
