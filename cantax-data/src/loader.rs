//! CSV loader for provincial bracket tables.
//!
//! Lets a caller swap in bracket data for a different year without
//! recompiling. One row per band:
//!
//! ```csv
//! province,upper_bound,rate,basic_personal_amount
//! ON,52886,0.0505,12747
//! ON,105775,0.0915,12747
//! ON,,0.1316,12747
//! ```
//!
//! - `province`: two-letter postal code
//! - `upper_bound`: band ceiling; leave the cell empty for the open-ended
//!   top band
//! - `rate`: marginal rate as a fraction (`0.0505` for 5.05%)
//! - `basic_personal_amount`: repeated on every row of a province and
//!   required to be consistent
//!
//! Rows belonging to one province must appear in band order; provinces may
//! otherwise be interleaved. Each group is validated into a
//! [`ProvinceProfile`] through the same constructor the built-in tables use.

use std::io::Read;

use cantax_core::models::{
    BracketTable, BracketTableError, Province, ProvinceProfile, TaxBracket, TaxTables,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading bracket-table CSV data.
#[derive(Debug, Error)]
pub enum TableLoadError {
    /// The underlying CSV deserialisation failed (bad structure, missing
    /// required column, type mismatch, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A `province` cell is not a recognised postal code. `row` is 1-based
    /// over the data rows.
    #[error("unrecognised province code '{code}' on row {row}")]
    InvalidProvince { code: String, row: usize },

    /// A province's rows disagree on the basic personal amount.
    #[error("conflicting basic personal amount for {province} on row {row}")]
    ConflictingBasicPersonalAmount { province: Province, row: usize },

    /// A province's rows do not form a valid bracket table.
    #[error("invalid bracket table for {province}: {source}")]
    InvalidTable {
        province: Province,
        source: BracketTableError,
    },

    /// The file parsed but contained no data rows.
    #[error("no bracket rows found")]
    NoRows,
}

/// A single row of the bracket-table CSV.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProvinceTableRecord {
    pub province: String,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
    pub basic_personal_amount: Decimal,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for provincial bracket tables from CSV data.
pub struct ProvinceTableLoader;

impl ProvinceTableLoader {
    /// Parses raw records from any reader.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<ProvinceTableRecord>, TableLoadError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();
        for record in csv_reader.deserialize() {
            records.push(record?);
        }
        Ok(records)
    }

    /// Parses and groups records into validated profiles.
    ///
    /// # Errors
    ///
    /// Returns [`TableLoadError`] on malformed CSV, an unknown province
    /// code, an inconsistent basic personal amount, a group that fails
    /// bracket-table validation, or an empty file.
    pub fn load_profiles<R: Read>(reader: R) -> Result<Vec<ProvinceProfile>, TableLoadError> {
        let records = Self::parse(reader)?;
        if records.is_empty() {
            return Err(TableLoadError::NoRows);
        }

        // Accumulate bands per province, preserving first-seen order.
        let mut groups: Vec<(Province, Decimal, Vec<TaxBracket>)> = Vec::new();
        for (index, record) in records.iter().enumerate() {
            let row = index + 1;
            let province = Province::parse(&record.province).ok_or_else(|| {
                TableLoadError::InvalidProvince {
                    code: record.province.clone(),
                    row,
                }
            })?;

            let bracket = TaxBracket {
                upper_bound: record.upper_bound,
                rate: record.rate,
            };

            match groups.iter_mut().find(|(p, _, _)| *p == province) {
                Some((_, basic_personal_amount, brackets)) => {
                    if *basic_personal_amount != record.basic_personal_amount {
                        return Err(TableLoadError::ConflictingBasicPersonalAmount {
                            province,
                            row,
                        });
                    }
                    brackets.push(bracket);
                }
                None => groups.push((province, record.basic_personal_amount, vec![bracket])),
            }
        }

        groups
            .into_iter()
            .map(|(province, basic_personal_amount, brackets)| {
                let brackets = BracketTable::new(brackets)
                    .map_err(|source| TableLoadError::InvalidTable { province, source })?;
                Ok(ProvinceProfile {
                    province,
                    brackets,
                    basic_personal_amount,
                })
            })
            .collect()
    }
}

/// Replaces the matching profiles in `tables` with `overrides`, appending
/// any province not yet registered.
pub fn merge_profiles(tables: &mut TaxTables, overrides: Vec<ProvinceProfile>) {
    for profile in overrides {
        match tables
            .provinces
            .iter_mut()
            .find(|existing| existing.province == profile.province)
        {
            Some(existing) => *existing = profile,
            None => tables.provinces.push(profile),
        }
    }
}
