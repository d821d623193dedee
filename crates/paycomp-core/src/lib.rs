//! Core library for multilingual compensation extraction.
//!
//! This crate provides:
//! - A locale pattern catalog for hourly, monthly and annual pay phrases
//! - Amount parsing with currency markers and K/M/万 magnitude suffixes
//! - Currency resolution with per-locale defaults
//! - Backfill between pay periods
//! - An annual mode listing every K-suffixed salary figure

pub mod compensation;
pub mod error;
pub mod models;

pub use compensation::rules::{backfill, canonical_form, normalize_amount, resolve_currency};
pub use compensation::{CompensationExtractor, CompensationParser, DEFAULT_CURRENCY};
pub use error::{CompensationError, ExtractionError, Result};
pub use models::compensation::{
    AmountToken, AnnualAmount, CompensationRecord, Currency, Locale, PeriodAmount,
    PeriodAmounts, Periodicity,
};
pub use models::config::{ExtractionConfig, WorkTimeConvention};
pub use models::input::CompensationInput;

use lazy_static::lazy_static;
use serde_json::Value;

lazy_static! {
    static ref DEFAULT_PARSER: CompensationParser = CompensationParser::new();
}

/// Shared parser with default settings.
pub fn default_parser() -> &'static CompensationParser {
    &DEFAULT_PARSER
}

/// Extract hourly and monthly compensation from a JSON string or `{"text": ...}` object.
///
/// ```
/// use paycomp_core::{parse_compensation, Currency};
/// use serde_json::json;
///
/// let record = parse_compensation(&json!("salaire horaire : 10€")).unwrap();
/// assert_eq!(record.hourly.value, 10.0);
/// assert_eq!(record.monthly.value, 1600.0);
/// assert_eq!(record.monthly.currency, Currency::Eur);
/// ```
pub fn parse_compensation(input: &Value) -> Result<CompensationRecord> {
    default_parser().parse_input(input)
}

/// List every annual salary figure written in thousands.
///
/// ```
/// use paycomp_core::parse_compensation_annual;
/// use serde_json::json;
///
/// let amounts = parse_compensation_annual(&json!({"text": "Salary: $80K"})).unwrap();
/// assert_eq!(amounts[0].yearly, 80_000.0);
/// ```
pub fn parse_compensation_annual(input: &Value) -> Result<Vec<AnnualAmount>> {
    default_parser().parse_annual_input(input)
}

/// Hourly, monthly and annual amounts from plain text.
pub fn extract(text: &str) -> PeriodAmounts {
    default_parser().extract(text)
}

/// First amount span for a periodicity across every catalog locale.
pub fn match_period(text: &str, periodicity: Periodicity) -> Option<AmountToken> {
    default_parser().match_period(text, periodicity)
}
