use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when validating [`PensionParameters`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PensionParametersError {
    /// The basic exemption must be non-negative.
    #[error("basic exemption must be non-negative, got {0}")]
    InvalidBasicExemption(Decimal),

    /// The base earnings ceiling must be positive.
    #[error("base earnings ceiling must be positive, got {0}")]
    InvalidBaseCeiling(Decimal),

    /// The additional ceiling must sit strictly above the base ceiling.
    #[error("additional ceiling {additional} must exceed base ceiling {base}")]
    CeilingsOutOfOrder { base: Decimal, additional: Decimal },

    /// The base contribution rate must be between 0 and 1.
    #[error("base contribution rate must be between 0 and 1, got {0}")]
    InvalidBaseRate(Decimal),

    /// The additional contribution rate must be between 0 and 1.
    #[error("additional contribution rate must be between 0 and 1, got {0}")]
    InvalidAdditionalRate(Decimal),
}

/// Self-employed pension contribution constants for one year.
///
/// The contribution has two tiers: a base contribution on pensionable
/// earnings between the basic exemption and the base ceiling (CPP), and an
/// additional contribution on earnings between the base and additional
/// ceilings (CPP2). Rates are the combined employee-plus-employer
/// self-employed rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PensionParameters {
    /// Basic exemption amount; earnings at or below it carry no contribution.
    pub basic_exemption: Decimal,

    /// Year's maximum pensionable earnings for the base contribution.
    pub base_ceiling: Decimal,

    /// Self-employed rate on the base band.
    pub base_rate: Decimal,

    /// Year's additional maximum pensionable earnings for the second tier.
    pub additional_ceiling: Decimal,

    /// Self-employed rate on the band between the two ceilings.
    pub additional_rate: Decimal,
}

impl PensionParameters {
    /// Validates the constants.
    ///
    /// # Errors
    ///
    /// Returns [`PensionParametersError`] if:
    /// - `basic_exemption` is negative
    /// - `base_ceiling` is not positive
    /// - `additional_ceiling` does not exceed `base_ceiling`
    /// - either rate is outside `[0, 1]`
    pub fn validate(&self) -> Result<(), PensionParametersError> {
        if self.basic_exemption < Decimal::ZERO {
            return Err(PensionParametersError::InvalidBasicExemption(
                self.basic_exemption,
            ));
        }
        if self.base_ceiling <= Decimal::ZERO {
            return Err(PensionParametersError::InvalidBaseCeiling(
                self.base_ceiling,
            ));
        }
        if self.additional_ceiling <= self.base_ceiling {
            return Err(PensionParametersError::CeilingsOutOfOrder {
                base: self.base_ceiling,
                additional: self.additional_ceiling,
            });
        }
        if self.base_rate < Decimal::ZERO || self.base_rate > Decimal::ONE {
            return Err(PensionParametersError::InvalidBaseRate(self.base_rate));
        }
        if self.additional_rate < Decimal::ZERO || self.additional_rate > Decimal::ONE {
            return Err(PensionParametersError::InvalidAdditionalRate(
                self.additional_rate,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn params_2025() -> PensionParameters {
        PensionParameters {
            basic_exemption: dec!(3500.00),
            base_ceiling: dec!(71300.00),
            base_rate: dec!(0.119),
            additional_ceiling: dec!(81200.00),
            additional_rate: dec!(0.08),
        }
    }

    #[test]
    fn validate_accepts_2025_constants() {
        assert_eq!(params_2025().validate(), Ok(()));
    }

    #[test]
    fn validate_accepts_zero_exemption() {
        let params = PensionParameters {
            basic_exemption: dec!(0.00),
            ..params_2025()
        };

        assert_eq!(params.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_negative_exemption() {
        let params = PensionParameters {
            basic_exemption: dec!(-1.00),
            ..params_2025()
        };

        assert_eq!(
            params.validate(),
            Err(PensionParametersError::InvalidBasicExemption(dec!(-1.00)))
        );
    }

    #[test]
    fn validate_rejects_zero_base_ceiling() {
        let params = PensionParameters {
            base_ceiling: dec!(0.00),
            ..params_2025()
        };

        assert_eq!(
            params.validate(),
            Err(PensionParametersError::InvalidBaseCeiling(dec!(0.00)))
        );
    }

    #[test]
    fn validate_rejects_additional_ceiling_at_base_ceiling() {
        let params = PensionParameters {
            additional_ceiling: dec!(71300.00),
            ..params_2025()
        };

        assert_eq!(
            params.validate(),
            Err(PensionParametersError::CeilingsOutOfOrder {
                base: dec!(71300.00),
                additional: dec!(71300.00),
            })
        );
    }

    #[test]
    fn validate_rejects_base_rate_above_one() {
        let params = PensionParameters {
            base_rate: dec!(1.19),
            ..params_2025()
        };

        assert_eq!(
            params.validate(),
            Err(PensionParametersError::InvalidBaseRate(dec!(1.19)))
        );
    }

    #[test]
    fn validate_rejects_negative_additional_rate() {
        let params = PensionParameters {
            additional_rate: dec!(-0.08),
            ..params_2025()
        };

        assert_eq!(
            params.validate(),
            Err(PensionParametersError::InvalidAdditionalRate(dec!(-0.08)))
        );
    }
}
