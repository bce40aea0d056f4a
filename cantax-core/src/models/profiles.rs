use rust_decimal::Decimal;

use crate::models::{BracketTable, PensionParameters, Province};

/// The federal bracket schedule and its basic personal amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FederalProfile {
    pub brackets: BracketTable,
    pub basic_personal_amount: Decimal,
}

/// One province or territory's bracket schedule and basic personal amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvinceProfile {
    pub province: Province,
    pub brackets: BracketTable,
    pub basic_personal_amount: Decimal,
}

/// The full set of reference data one breakdown calculation needs.
///
/// Loaded once at startup and treated as immutable afterwards; the engine
/// only ever borrows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxTables {
    pub federal: FederalProfile,
    pub provinces: Vec<ProvinceProfile>,
    pub pension: PensionParameters,
}

impl TaxTables {
    /// Looks up the profile registered for `province`, if any.
    pub fn province(&self, province: Province) -> Option<&ProvinceProfile> {
        self.provinces
            .iter()
            .find(|profile| profile.province == province)
    }
}
