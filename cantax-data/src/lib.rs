pub mod loader;
pub mod tables;

pub use loader::{ProvinceTableLoader, ProvinceTableRecord, TableLoadError, merge_profiles};
pub use tables::tables_2025;
