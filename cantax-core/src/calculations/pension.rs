//! Two-tier self-employed pension contribution computation.
//!
//! The base tier applies between the basic exemption and the base earnings
//! ceiling; the additional tier applies only to earnings between the base and
//! additional ceilings. Net business income stands in for pensionable
//! earnings.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use cantax_core::calculations::PensionCalculator;
//! use cantax_core::models::PensionParameters;
//!
//! let calculator = PensionCalculator::new(PensionParameters {
//!     basic_exemption: dec!(3500.00),
//!     base_ceiling: dec!(71300.00),
//!     base_rate: dec!(0.119),
//!     additional_ceiling: dec!(81200.00),
//!     additional_rate: dec!(0.08),
//! })
//! .unwrap();
//!
//! // (50000 - 3500) × 0.119 = 5533.50; second tier not engaged
//! assert_eq!(calculator.contribution(dec!(50000.00)), dec!(5533.50));
//! ```

use rust_decimal::Decimal;
use tracing::warn;

use crate::calculations::common::{clamp_non_negative, round_half_up};
use crate::models::{PensionParameters, PensionParametersError};

/// Calculator for the self-employed pension contribution.
///
/// Parameters are validated once at construction;
/// [`contribution`](PensionCalculator::contribution) is then infallible.
#[derive(Debug, Clone)]
pub struct PensionCalculator {
    params: PensionParameters,
}

impl PensionCalculator {
    /// Creates a calculator after validating `params`.
    ///
    /// # Errors
    ///
    /// Returns [`PensionParametersError`] when the constants are out of
    /// range; see [`PensionParameters::validate`].
    pub fn new(params: PensionParameters) -> Result<Self, PensionParametersError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &PensionParameters {
        &self.params
    }

    /// Total contribution on `net_income`, rounded to two decimal places.
    ///
    /// Zero at or below the basic exemption, continuous at the base ceiling,
    /// monotone non-decreasing, and constant above the additional ceiling.
    /// Negative input is treated as zero.
    pub fn contribution(&self, net_income: Decimal) -> Decimal {
        if net_income < Decimal::ZERO {
            warn!(
                net_income = %net_income,
                "net income is negative; no pension contribution"
            );
            return Decimal::ZERO;
        }

        let base = self.base_contribution(net_income);
        let additional = self.additional_contribution(net_income);

        round_half_up(base + additional)
    }

    /// Base-tier contribution: earnings between the exemption and the base
    /// ceiling, at the base rate.
    fn base_contribution(&self, net_income: Decimal) -> Decimal {
        let pensionable = net_income.min(self.params.base_ceiling);
        let contributory = clamp_non_negative(pensionable - self.params.basic_exemption);
        contributory * self.params.base_rate
    }

    /// Additional-tier contribution: engaged only above the base ceiling, on
    /// the band up to the additional ceiling.
    fn additional_contribution(&self, net_income: Decimal) -> Decimal {
        if net_income <= self.params.base_ceiling {
            return Decimal::ZERO;
        }

        let band = net_income.min(self.params.additional_ceiling) - self.params.base_ceiling;
        band * self.params.additional_rate
    }
}
