//! Calculation engines for the self-employed tax estimate.
//!
//! The orchestrator in [`breakdown`] sequences the pension engine, the
//! progressive schedule walk (federal, then provincial) and the rate
//! reporting into one flat result record.

pub mod breakdown;
pub mod common;
pub mod pension;
pub mod rates;
pub mod schedule;

pub use breakdown::{BreakdownCalculator, BreakdownError};
pub use pension::PensionCalculator;
pub use schedule::TaxSchedule;
