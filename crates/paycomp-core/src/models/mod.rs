//! Data models for compensation extraction.

pub mod compensation;
pub mod config;
pub mod input;

pub use compensation::{
    AmountForm, AmountToken, AnnualAmount, CompensationRecord, Currency, Locale,
    MagnitudeSuffix, PeriodAmount, PeriodAmounts, Periodicity,
};
pub use config::{ExtractionConfig, WorkTimeConvention};
pub use input::CompensationInput;
