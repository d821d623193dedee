//! Rule-based extractors for compensation amounts.

pub mod annual;
pub mod backfill;
pub mod catalog;
pub mod currency;
pub mod magnitude;
pub mod patterns;
pub mod periods;

pub use annual::{extract_annual, AnnualExtractor};
pub use backfill::{backfill, backfill_periods, backfill_with};
pub use catalog::{LocaleEntry, PeriodVocabulary, CATALOG, CATALOG_VERSION};
pub use currency::{find_currency, resolve_currency};
pub use magnitude::{
    apply_bare_thousands, canonical_form, normalize_amount, parse_amount, try_normalize_amount,
    ParsedAmount,
};
pub use periods::PeriodMatcher;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all non-overlapping occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A value together with where it was found.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte span in source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}
