//! Optional settings file.
//!
//! `cantax.toml` in the working directory (or a path given with `--config`)
//! can carry defaults so repeat runs only need the income figures:
//!
//! ```toml
//! default_province = "ON"
//! tables = "brackets-2026.csv"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Province code used when `--province` is not given.
    pub default_province: Option<String>,

    /// Bracket-table CSV applied on top of the built-in tables.
    pub tables: Option<PathBuf>,
}

impl Config {
    pub const FILE_NAME: &'static str = "cantax.toml";

    /// Loads an explicit settings file, or `cantax.toml` from the working
    /// directory when present, or the defaults.
    ///
    /// An explicitly given path must exist; the well-known fallback is
    /// optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::read(path),
            None => {
                let fallback = Path::new(Self::FILE_NAME);
                if fallback.exists() {
                    Self::read(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file: {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse settings file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn full_settings_file_parses() {
        let config: Config = toml::from_str(
            r#"
            default_province = "ON"
            tables = "brackets-2026.csv"
            "#,
        )
        .unwrap();

        assert_eq!(config.default_province.as_deref(), Some("ON"));
        assert_eq!(config.tables, Some(PathBuf::from("brackets-2026.csv")));
    }

    #[test]
    fn empty_settings_file_parses_to_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<Config, _> = toml::from_str("provnice = \"ON\"");

        assert!(result.is_err());
    }

    #[test]
    fn load_without_explicit_path_falls_back_to_defaults() {
        // The test working directory carries no cantax.toml.
        let config = Config::load(None).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_missing_explicit_path_fails() {
        let result = Config::load(Some(Path::new("does-not-exist.toml")));

        assert!(result.is_err());
    }
}
