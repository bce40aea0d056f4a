pub mod calculations;
pub mod models;

pub use calculations::{BreakdownCalculator, BreakdownError, PensionCalculator, TaxSchedule};
pub use models::*;
