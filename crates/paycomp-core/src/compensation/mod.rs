//! Compensation extraction module.

mod parser;
pub mod rules;

pub use parser::{CompensationParser, DEFAULT_CURRENCY};

use serde_json::Value;

use crate::error::Result;
use crate::models::compensation::{AnnualAmount, CompensationRecord, PeriodAmounts};
use crate::models::input::CompensationInput;

/// Trait for compensation extractors.
pub trait CompensationExtractor {
    /// Hourly and monthly amounts, each backfilled from the other when missing.
    fn parse(&self, text: &str) -> CompensationRecord;

    /// Every K-suffixed annual amount, in text order.
    fn parse_annual(&self, text: &str) -> Vec<AnnualAmount>;

    /// Hourly, monthly and annual amounts with backfill across all three.
    fn extract(&self, text: &str) -> PeriodAmounts;

    /// [`parse`](Self::parse) for a JSON string or `{"text": ...}` object.
    fn parse_input(&self, input: &Value) -> Result<CompensationRecord> {
        let input = CompensationInput::from_value(input)?;
        Ok(self.parse(input.text()))
    }

    /// [`parse_annual`](Self::parse_annual) for a JSON string or `{"text": ...}` object.
    fn parse_annual_input(&self, input: &Value) -> Result<Vec<AnnualAmount>> {
        let input = CompensationInput::from_value(input)?;
        Ok(self.parse_annual(input.text()))
    }
}
