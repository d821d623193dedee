//! Annual salary extraction: K-suffixed amounts, optionally after a salary label.

use tracing::{debug, trace};

use crate::models::compensation::{AnnualAmount, Locale};

use super::currency::resolve_currency;
use super::magnitude::parse_amount;
use super::patterns::ANNUAL_AMOUNT;
use super::{ExtractionMatch, FieldExtractor};

/// Annual amount extractor.
pub struct AnnualExtractor;

impl AnnualExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AnnualExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AnnualExtractor {
    type Output = ExtractionMatch<AnnualAmount>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for caps in ANNUAL_AMOUNT.captures_iter(text) {
            let Some(amount) = caps.name("amount") else {
                continue;
            };
            let Ok(parsed) = parse_amount(amount.as_str()) else {
                continue;
            };

            // "$1K" or "$1500K" are not salaries written in thousands.
            if parsed.bare <= 1.0 || parsed.bare >= 1000.0 {
                trace!("Skipping annual amount {:?} outside (1, 1000)", amount.as_str());
                continue;
            }

            // The K suffix is mandatory here, so a marker is always present.
            let currency = resolve_currency(amount.as_str(), Locale::Unknown);
            let scale = if currency.is_thousand_scaled() { 1000.0 } else { 1.0 };
            let yearly = parsed.bare * 1000.0 * scale;

            if let Some(full_match) = caps.get(0) {
                results.push(
                    ExtractionMatch::new(AnnualAmount { currency, yearly }, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                );
            }
        }

        debug!("Found {} annual amounts", results.len());
        results
    }
}

/// Extract every annual amount from text.
pub fn extract_annual(text: &str) -> Vec<AnnualAmount> {
    AnnualExtractor::new()
        .extract_all(text)
        .into_iter()
        .map(|m| m.value)
        .collect()
}
