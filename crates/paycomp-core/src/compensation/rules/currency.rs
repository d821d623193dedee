//! Currency resolution for matched amounts.

use crate::models::compensation::{Currency, Locale};

use super::patterns::CURRENCY_MARKER;
use super::ExtractionMatch;

/// Find the first currency marker in text.
pub fn find_currency(text: &str) -> Option<ExtractionMatch<Currency>> {
    let marker = CURRENCY_MARKER.find(text)?;
    let currency = Currency::from_marker(marker.as_str())?;

    Some(ExtractionMatch::new(currency, marker.as_str()).with_position(marker.start(), marker.end()))
}

/// Resolve the currency of an amount.
///
/// The leftmost marker in `amount_text` wins. Without a marker the locale's
/// default applies (en: USD, fr: EUR, ja: JPY, anything else: USD).
pub fn resolve_currency(amount_text: &str, locale: Locale) -> Currency {
    find_currency(amount_text)
        .map(|m| m.value)
        .unwrap_or_else(|| locale.default_currency())
}
