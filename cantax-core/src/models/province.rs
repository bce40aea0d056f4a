use serde::{Deserialize, Serialize};

/// Canadian provinces and territories, one variant per tax jurisdiction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Province {
    Alberta,
    BritishColumbia,
    Manitoba,
    NewBrunswick,
    NewfoundlandAndLabrador,
    NorthwestTerritories,
    NovaScotia,
    Nunavut,
    Ontario,
    PrinceEdwardIsland,
    Quebec,
    Saskatchewan,
    Yukon,
}

impl Province {
    /// All 13 jurisdictions, in code order.
    pub const ALL: [Province; 13] = [
        Self::Alberta,
        Self::BritishColumbia,
        Self::Manitoba,
        Self::NewBrunswick,
        Self::NewfoundlandAndLabrador,
        Self::NorthwestTerritories,
        Self::NovaScotia,
        Self::Nunavut,
        Self::Ontario,
        Self::PrinceEdwardIsland,
        Self::Quebec,
        Self::Saskatchewan,
        Self::Yukon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alberta => "AB",
            Self::BritishColumbia => "BC",
            Self::Manitoba => "MB",
            Self::NewBrunswick => "NB",
            Self::NewfoundlandAndLabrador => "NL",
            Self::NorthwestTerritories => "NT",
            Self::NovaScotia => "NS",
            Self::Nunavut => "NU",
            Self::Ontario => "ON",
            Self::PrinceEdwardIsland => "PE",
            Self::Quebec => "QC",
            Self::Saskatchewan => "SK",
            Self::Yukon => "YT",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Alberta => "Alberta",
            Self::BritishColumbia => "British Columbia",
            Self::Manitoba => "Manitoba",
            Self::NewBrunswick => "New Brunswick",
            Self::NewfoundlandAndLabrador => "Newfoundland and Labrador",
            Self::NorthwestTerritories => "Northwest Territories",
            Self::NovaScotia => "Nova Scotia",
            Self::Nunavut => "Nunavut",
            Self::Ontario => "Ontario",
            Self::PrinceEdwardIsland => "Prince Edward Island",
            Self::Quebec => "Quebec",
            Self::Saskatchewan => "Saskatchewan",
            Self::Yukon => "Yukon",
        }
    }

    /// Parses a two-letter postal code, e.g. `"ON"`. Case-sensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "AB" => Some(Self::Alberta),
            "BC" => Some(Self::BritishColumbia),
            "MB" => Some(Self::Manitoba),
            "NB" => Some(Self::NewBrunswick),
            "NL" => Some(Self::NewfoundlandAndLabrador),
            "NT" => Some(Self::NorthwestTerritories),
            "NS" => Some(Self::NovaScotia),
            "NU" => Some(Self::Nunavut),
            "ON" => Some(Self::Ontario),
            "PE" => Some(Self::PrinceEdwardIsland),
            "QC" => Some(Self::Quebec),
            "SK" => Some(Self::Saskatchewan),
            "YT" => Some(Self::Yukon),
            _ => None,
        }
    }
}

impl std::fmt::Display for Province {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_round_trips_every_code() {
        for province in Province::ALL {
            assert_eq!(Province::parse(province.as_str()), Some(province));
        }
    }

    #[test]
    fn parse_rejects_unknown_code() {
        assert_eq!(Province::parse("XX"), None);
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(Province::parse("on"), None);
    }

    #[test]
    fn all_covers_thirteen_jurisdictions() {
        assert_eq!(Province::ALL.len(), 13);
    }

    #[test]
    fn display_matches_postal_code() {
        assert_eq!(Province::Ontario.to_string(), "ON");
    }
}
