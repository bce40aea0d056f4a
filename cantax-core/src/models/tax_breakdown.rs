use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The flat result record of one breakdown calculation.
///
/// All monetary fields are rounded to two decimal places and non-negative,
/// except [`take_home_pay`](TaxBreakdown::take_home_pay), which goes negative when
/// liabilities exceed net income. The two rates are percentages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// Gross self-employment income, as supplied (rounded).
    pub gross_income: Decimal,

    /// Total deductible business expenses, as supplied (rounded).
    pub deductible_expenses: Decimal,

    /// Gross income minus expenses, floored at zero.
    pub net_income: Decimal,

    /// Self-employed pension contribution (both tiers).
    pub pension_contribution: Decimal,

    /// Employer-equivalent half of the contribution, deducted before tax.
    pub pension_deduction: Decimal,

    /// Net income after the pension deduction; the base the brackets tax.
    pub taxable_income: Decimal,

    /// Federal income tax after the basic personal amount credit.
    pub federal_tax: Decimal,

    /// Provincial or territorial income tax after its credit.
    pub provincial_tax: Decimal,

    /// Federal plus provincial income tax.
    pub total_income_tax: Decimal,

    /// Income tax plus pension contribution.
    pub total_remittance: Decimal,

    /// Net income minus the total remittance. May be negative.
    pub take_home_pay: Decimal,

    /// Total remittance as a percentage of net income; zero when net income
    /// is zero.
    pub average_tax_rate: Decimal,

    /// Combined federal-plus-provincial rate on the next dollar of taxable
    /// income, as a percentage. Excludes the pension contribution.
    pub marginal_tax_rate: Decimal,
}
