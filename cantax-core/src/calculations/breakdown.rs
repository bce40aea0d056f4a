//! Breakdown orchestration: one call in, one flat result record out.
//!
//! Sequences the pension and income-tax engines over a set of reference
//! tables: net income, pension contribution, the employer-equivalent
//! deduction, federal then provincial tax, totals and derived rates. Pure
//! over immutable reference data; identical inputs always produce an
//! identical record.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::calculations::common::{clamp_non_negative, round_half_up};
use crate::calculations::pension::PensionCalculator;
use crate::calculations::rates;
use crate::calculations::schedule::TaxSchedule;
use crate::models::{PensionParametersError, Province, TaxBreakdown, TaxTables};

/// Errors that can occur when computing a breakdown.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BreakdownError {
    /// Gross income must be non-negative; the engine rejects rather than
    /// clamps raw inputs.
    #[error("gross income must be non-negative, got {0}")]
    NegativeGrossIncome(Decimal),

    /// Deductible expenses must be non-negative.
    #[error("deductible expenses must be non-negative, got {0}")]
    NegativeExpenses(Decimal),

    /// The code is not a known province/territory, or the supplied tables
    /// carry no profile for it.
    #[error("unknown province or territory code '{0}'")]
    UnknownProvince(String),

    /// The pension constants in the supplied tables are invalid.
    #[error(transparent)]
    InvalidPensionParameters(#[from] PensionParametersError),
}

/// Orchestrator over one set of [`TaxTables`].
///
/// Holds no state of its own; every call allocates only locals, so one
/// instance can serve any number of callers.
#[derive(Debug, Clone)]
pub struct BreakdownCalculator<'a> {
    tables: &'a TaxTables,
}

impl<'a> BreakdownCalculator<'a> {
    pub fn new(tables: &'a TaxTables) -> Self {
        Self { tables }
    }

    /// Computes the full breakdown for a raw jurisdiction code.
    ///
    /// # Errors
    ///
    /// [`BreakdownError::UnknownProvince`] when `code` does not name a
    /// registered jurisdiction, plus everything [`calculate`]
    /// can return.
    ///
    /// [`calculate`]: BreakdownCalculator::calculate
    pub fn calculate_for_code(
        &self,
        gross_income: Decimal,
        deductible_expenses: Decimal,
        code: &str,
    ) -> Result<TaxBreakdown, BreakdownError> {
        let province = Province::parse(code)
            .ok_or_else(|| BreakdownError::UnknownProvince(code.to_string()))?;
        self.calculate(gross_income, deductible_expenses, province)
    }

    /// Computes the full breakdown for one province or territory.
    ///
    /// Inputs are rounded to two decimal places up front; every monetary
    /// intermediate is rounded at the point it is computed, which keeps
    /// repeated calls bit-for-bit reproducible.
    ///
    /// # Errors
    ///
    /// Returns [`BreakdownError`] on negative inputs, a province absent from
    /// the tables, or invalid pension constants. No partial result is ever
    /// produced.
    pub fn calculate(
        &self,
        gross_income: Decimal,
        deductible_expenses: Decimal,
        province: Province,
    ) -> Result<TaxBreakdown, BreakdownError> {
        let gross_income = round_half_up(gross_income);
        if gross_income < Decimal::ZERO {
            return Err(BreakdownError::NegativeGrossIncome(gross_income));
        }
        let deductible_expenses = round_half_up(deductible_expenses);
        if deductible_expenses < Decimal::ZERO {
            return Err(BreakdownError::NegativeExpenses(deductible_expenses));
        }

        let profile = self
            .tables
            .province(province)
            .ok_or_else(|| BreakdownError::UnknownProvince(province.as_str().to_string()))?;
        let pension = PensionCalculator::new(self.tables.pension.clone())?;

        let net_income = round_half_up(clamp_non_negative(gross_income - deductible_expenses));

        let pension_contribution = pension.contribution(net_income);
        // The employer-equivalent half of the contribution is deductible
        // before income tax.
        let deductible_share = Decimal::new(50, 2);
        let pension_deduction = round_half_up(pension_contribution * deductible_share);
        let taxable_income = round_half_up(clamp_non_negative(net_income - pension_deduction));

        let federal = TaxSchedule::new(&self.tables.federal.brackets);
        let provincial = TaxSchedule::new(&profile.brackets);

        let federal_tax =
            federal.tax_payable(taxable_income, self.tables.federal.basic_personal_amount);
        let provincial_tax = provincial.tax_payable(taxable_income, profile.basic_personal_amount);

        let total_income_tax = round_half_up(federal_tax + provincial_tax);
        let total_remittance = round_half_up(total_income_tax + pension_contribution);
        let take_home_pay = round_half_up(net_income - total_remittance);

        // Tax plus contributions over net income; the marginal figure is
        // income tax only, at the taxable-income level.
        let average_tax_rate = rates::effective_rate(total_remittance, net_income);
        let marginal_tax_rate = rates::combined_marginal_rate(
            federal.marginal_rate(taxable_income),
            provincial.marginal_rate(taxable_income),
        );

        Ok(TaxBreakdown {
            gross_income,
            deductible_expenses,
            net_income,
            pension_contribution,
            pension_deduction,
            taxable_income,
            federal_tax,
            provincial_tax,
            total_income_tax,
            total_remittance,
            take_home_pay,
            average_tax_rate,
            marginal_tax_rate,
        })
    }
}
