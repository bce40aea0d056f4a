//! Built-in 2025 reference tables.
//!
//! Bracket thresholds, basic personal amounts and pension constants for the
//! 2025 tax year: the federal schedule, all 13 provinces and territories, and
//! the self-employed CPP/CPP2 parameters. Constructed once on first use and
//! immutable afterwards.
//!
//! The BC and Nova Scotia basic personal amounts vary with income in the real
//! schedules; the flat base amounts are used here.

use std::sync::LazyLock;

use cantax_core::models::{
    BracketTable, FederalProfile, PensionParameters, Province, ProvinceProfile, TaxBracket,
    TaxTables,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

static TABLES_2025: LazyLock<TaxTables> = LazyLock::new(build_2025);

/// The 2025 tables, built once per process.
pub fn tables_2025() -> &'static TaxTables {
    &TABLES_2025
}

fn bracket(upper_bound: Decimal, rate: Decimal) -> TaxBracket {
    TaxBracket {
        upper_bound: Some(upper_bound),
        rate,
    }
}

fn top_bracket(rate: Decimal) -> TaxBracket {
    TaxBracket {
        upper_bound: None,
        rate,
    }
}

fn table(brackets: Vec<TaxBracket>) -> BracketTable {
    BracketTable::new(brackets).expect("built-in 2025 bracket table is valid")
}

fn profile(
    province: Province,
    basic_personal_amount: Decimal,
    brackets: Vec<TaxBracket>,
) -> ProvinceProfile {
    ProvinceProfile {
        province,
        brackets: table(brackets),
        basic_personal_amount,
    }
}

fn build_2025() -> TaxTables {
    TaxTables {
        federal: FederalProfile {
            // 14.5% effective rate on the lowest band for 2025.
            brackets: table(vec![
                bracket(dec!(57375), dec!(0.145)),
                bracket(dec!(114750), dec!(0.205)),
                bracket(dec!(177882), dec!(0.26)),
                bracket(dec!(253414), dec!(0.29)),
                top_bracket(dec!(0.33)),
            ]),
            basic_personal_amount: dec!(16129),
        },
        provinces: vec![
            // New 8% bottom bracket for 2025.
            profile(
                Province::Alberta,
                dec!(22323),
                vec![
                    bracket(dec!(60000), dec!(0.08)),
                    bracket(dec!(151234), dec!(0.10)),
                    bracket(dec!(181481), dec!(0.12)),
                    bracket(dec!(241974), dec!(0.13)),
                    bracket(dec!(362961), dec!(0.14)),
                    top_bracket(dec!(0.15)),
                ],
            ),
            profile(
                Province::BritishColumbia,
                dec!(12399),
                vec![
                    bracket(dec!(49279), dec!(0.0506)),
                    bracket(dec!(98560), dec!(0.077)),
                    bracket(dec!(113158), dec!(0.105)),
                    bracket(dec!(137407), dec!(0.1229)),
                    bracket(dec!(186306), dec!(0.147)),
                    bracket(dec!(259829), dec!(0.168)),
                    top_bracket(dec!(0.205)),
                ],
            ),
            profile(
                Province::Manitoba,
                dec!(15969),
                vec![
                    bracket(dec!(47564), dec!(0.108)),
                    bracket(dec!(101200), dec!(0.1275)),
                    top_bracket(dec!(0.174)),
                ],
            ),
            profile(
                Province::NewBrunswick,
                dec!(13396),
                vec![
                    bracket(dec!(51306), dec!(0.094)),
                    bracket(dec!(102614), dec!(0.14)),
                    bracket(dec!(190060), dec!(0.16)),
                    top_bracket(dec!(0.195)),
                ],
            ),
            profile(
                Province::NewfoundlandAndLabrador,
                dec!(10818),
                vec![
                    bracket(dec!(44192), dec!(0.087)),
                    bracket(dec!(88382), dec!(0.145)),
                    bracket(dec!(157792), dec!(0.158)),
                    bracket(dec!(220910), dec!(0.178)),
                    bracket(dec!(282214), dec!(0.198)),
                    bracket(dec!(564429), dec!(0.208)),
                    bracket(dec!(1128858), dec!(0.213)),
                    top_bracket(dec!(0.218)),
                ],
            ),
            profile(
                Province::NorthwestTerritories,
                dec!(17842),
                vec![
                    bracket(dec!(51964), dec!(0.059)),
                    bracket(dec!(103930), dec!(0.086)),
                    bracket(dec!(168967), dec!(0.122)),
                    top_bracket(dec!(0.1405)),
                ],
            ),
            profile(
                Province::NovaScotia,
                dec!(11744),
                vec![
                    bracket(dec!(30507), dec!(0.0879)),
                    bracket(dec!(61015), dec!(0.1495)),
                    bracket(dec!(95883), dec!(0.1667)),
                    bracket(dec!(154650), dec!(0.175)),
                    top_bracket(dec!(0.21)),
                ],
            ),
            profile(
                Province::Nunavut,
                dec!(19274),
                vec![
                    bracket(dec!(54707), dec!(0.04)),
                    bracket(dec!(109413), dec!(0.07)),
                    bracket(dec!(177881), dec!(0.09)),
                    top_bracket(dec!(0.115)),
                ],
            ),
            profile(
                Province::Ontario,
                dec!(12747),
                vec![
                    bracket(dec!(52886), dec!(0.0505)),
                    bracket(dec!(105775), dec!(0.0915)),
                    bracket(dec!(150000), dec!(0.1116)),
                    bracket(dec!(220000), dec!(0.1216)),
                    top_bracket(dec!(0.1316)),
                ],
            ),
            profile(
                Province::PrinceEdwardIsland,
                dec!(14250),
                vec![
                    bracket(dec!(33328), dec!(0.095)),
                    bracket(dec!(64656), dec!(0.1347)),
                    bracket(dec!(105000), dec!(0.166)),
                    bracket(dec!(140000), dec!(0.1762)),
                    top_bracket(dec!(0.19)),
                ],
            ),
            // Quebec runs its own parallel pension plan; the CPP constants
            // below are applied uniformly.
            profile(
                Province::Quebec,
                dec!(18055),
                vec![
                    bracket(dec!(53255), dec!(0.14)),
                    bracket(dec!(106495), dec!(0.19)),
                    bracket(dec!(129590), dec!(0.24)),
                    top_bracket(dec!(0.2575)),
                ],
            ),
            profile(
                Province::Saskatchewan,
                dec!(18991),
                vec![
                    bracket(dec!(53463), dec!(0.105)),
                    bracket(dec!(152750), dec!(0.125)),
                    top_bracket(dec!(0.145)),
                ],
            ),
            profile(
                Province::Yukon,
                dec!(16129),
                vec![
                    bracket(dec!(57375), dec!(0.064)),
                    bracket(dec!(114750), dec!(0.09)),
                    bracket(dec!(177882), dec!(0.109)),
                    bracket(dec!(500000), dec!(0.128)),
                    top_bracket(dec!(0.15)),
                ],
            ),
        ],
        pension: PensionParameters {
            basic_exemption: dec!(3500.00),
            base_ceiling: dec!(71300.00),
            base_rate: dec!(0.119),
            additional_ceiling: dec!(81200.00),
            additional_rate: dec!(0.08),
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn every_jurisdiction_is_registered() {
        let tables = tables_2025();

        for province in Province::ALL {
            assert!(
                tables.province(province).is_some(),
                "missing profile for {province}"
            );
        }
        assert_eq!(tables.provinces.len(), 13);
    }

    #[test]
    fn federal_schedule_matches_2025_figures() {
        let tables = tables_2025();

        assert_eq!(tables.federal.basic_personal_amount, dec!(16129));
        assert_eq!(tables.federal.brackets.lowest_rate(), dec!(0.145));
        assert_eq!(tables.federal.brackets.brackets().len(), 5);
        assert_eq!(
            tables.federal.brackets.brackets()[0].upper_bound,
            Some(dec!(57375))
        );
    }

    #[test]
    fn ontario_schedule_matches_2025_figures() {
        let tables = tables_2025();

        let ontario = tables.province(Province::Ontario).unwrap();

        assert_eq!(ontario.basic_personal_amount, dec!(12747));
        assert_eq!(ontario.brackets.lowest_rate(), dec!(0.0505));
        assert_eq!(ontario.brackets.brackets().len(), 5);
    }

    #[test]
    fn pension_constants_match_2025_figures() {
        let pension = &tables_2025().pension;

        assert_eq!(pension.basic_exemption, dec!(3500.00));
        assert_eq!(pension.base_ceiling, dec!(71300.00));
        assert_eq!(pension.base_rate, dec!(0.119));
        assert_eq!(pension.additional_ceiling, dec!(81200.00));
        assert_eq!(pension.additional_rate, dec!(0.08));
        assert_eq!(pension.validate(), Ok(()));
    }

    #[test]
    fn tables_are_shared_across_calls() {
        assert!(std::ptr::eq(tables_2025(), tables_2025()));
    }
}
