//! Progressive marginal tax computation for one bracket schedule.
//!
//! Tax payable is accumulated band by band over a [`BracketTable`], then
//! reduced by the basic-personal-amount credit. The credit is non-refundable
//! and valued at the schedule's lowest marginal rate, a fixed policy that does
//! not track the taxpayer's own marginal rate.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use cantax_core::calculations::TaxSchedule;
//! use cantax_core::models::{BracketTable, TaxBracket};
//!
//! let table = BracketTable::new(vec![
//!     TaxBracket { upper_bound: Some(dec!(57375)), rate: dec!(0.145) },
//!     TaxBracket { upper_bound: None, rate: dec!(0.205) },
//! ])
//! .unwrap();
//!
//! let schedule = TaxSchedule::new(&table);
//!
//! // (47233.25 - 16129) × 0.145 = 4510.12 after rounding
//! assert_eq!(schedule.tax_payable(dec!(47233.25), dec!(16129)), dec!(4510.12));
//! assert_eq!(schedule.marginal_rate(dec!(47233.25)), dec!(0.145));
//! ```

use rust_decimal::Decimal;
use tracing::warn;

use crate::calculations::common::{clamp_non_negative, round_half_up};
use crate::models::BracketTable;

/// Calculator for one progressive bracket schedule.
///
/// Borrows a validated [`BracketTable`]; the same instance serves federal and
/// provincial schedules alike.
#[derive(Debug, Clone)]
pub struct TaxSchedule<'a> {
    brackets: &'a BracketTable,
}

impl<'a> TaxSchedule<'a> {
    pub fn new(brackets: &'a BracketTable) -> Self {
        Self { brackets }
    }

    /// Tax payable on `taxable_income` after the basic-personal-amount
    /// credit, rounded to two decimal places and floored at zero.
    ///
    /// Zero or negative taxable income yields zero regardless of the credit.
    /// A table with a single open-ended band degenerates to a flat tax minus
    /// the credit.
    pub fn tax_payable(
        &self,
        taxable_income: Decimal,
        basic_personal_amount: Decimal,
    ) -> Decimal {
        if taxable_income <= Decimal::ZERO {
            if taxable_income < Decimal::ZERO {
                warn!(
                    taxable_income = %taxable_income,
                    "taxable income is negative; treating as zero"
                );
            }
            return Decimal::ZERO;
        }

        let gross_tax = self.tax_before_credit(taxable_income);
        let credit = self.credit_value(basic_personal_amount);

        round_half_up(clamp_non_negative(gross_tax - credit))
    }

    /// The marginal rate applicable to the next dollar at `income`.
    ///
    /// Income exactly on a band's upper bound reports the rate of the band
    /// ending there; see [`BracketTable::bracket_for`].
    pub fn marginal_rate(&self, income: Decimal) -> Decimal {
        self.brackets.bracket_for(income).rate
    }

    /// Walks the bands in threshold order, accumulating `width × rate` and
    /// stopping once all income is accounted for. Band amounts stay
    /// unrounded; the caller rounds once after the credit.
    fn tax_before_credit(&self, taxable_income: Decimal) -> Decimal {
        let mut total_tax = Decimal::ZERO;
        let mut previous_bound = Decimal::ZERO;
        let mut remaining = taxable_income;

        for bracket in self.brackets.brackets() {
            let band_width = match bracket.upper_bound {
                Some(bound) => remaining.min(bound - previous_bound),
                None => remaining,
            };

            if band_width > Decimal::ZERO {
                total_tax += band_width * bracket.rate;
                remaining -= band_width;
            }

            if let Some(bound) = bracket.upper_bound {
                previous_bound = bound;
            }

            if remaining <= Decimal::ZERO {
                break;
            }
        }

        total_tax
    }

    /// Values the non-refundable credit at the lowest band's rate.
    fn credit_value(&self, basic_personal_amount: Decimal) -> Decimal {
        basic_personal_amount * self.brackets.lowest_rate()
    }
}
