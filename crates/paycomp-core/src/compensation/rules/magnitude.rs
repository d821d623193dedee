//! Magnitude normalization: numeric literal plus suffix to a plain value.

use tracing::trace;

use crate::error::ExtractionError;
use crate::models::compensation::{Currency, MagnitudeSuffix};

use super::patterns::{AMOUNT_VALUE, CURRENCY_MARKER};

/// Numeric literal and suffix read from an amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedAmount {
    /// Literal value before scaling.
    pub bare: f64,
    pub suffix: MagnitudeSuffix,
}

impl ParsedAmount {
    /// Scaled value.
    pub fn value(&self) -> f64 {
        self.bare * self.suffix.multiplier()
    }
}

/// Read the first numeric literal and its adjacent suffix.
///
/// "," and " " inside the literal are decimal points: "12,5" is 12.5 and
/// "10 000" is 10.
pub fn parse_amount(amount_text: &str) -> Result<ParsedAmount, ExtractionError> {
    let caps = AMOUNT_VALUE
        .captures(amount_text)
        .ok_or(ExtractionError::NoMatch)?;

    let literal = caps["number"]
        .trim_end_matches([',', '.', ' '])
        .replace([',', ' '], ".");

    let bare: f64 = literal
        .parse()
        .map_err(|_| ExtractionError::UnparsableNumber {
            value: literal.clone(),
        })?;
    if !bare.is_finite() || bare <= 0.0 {
        return Err(ExtractionError::UnparsableNumber { value: literal });
    }

    // A K/M glued to more letters is the start of a word, not a suffix,
    // unless those letters are a currency code ("4kEUR").
    let suffix = match (caps.name("suffix"), caps.name("tail")) {
        (Some(suffix), None) => MagnitudeSuffix::parse(suffix.as_str()),
        (Some(suffix), Some(_)) if suffix.as_str() == "万" => MagnitudeSuffix::TenThousand,
        (Some(suffix), Some(_)) if starts_with_marker(&amount_text[suffix.end()..]) => {
            MagnitudeSuffix::parse(suffix.as_str())
        }
        _ => MagnitudeSuffix::None,
    };

    Ok(ParsedAmount { bare, suffix })
}

fn starts_with_marker(text: &str) -> bool {
    CURRENCY_MARKER.find(text).is_some_and(|marker| marker.start() == 0)
}

/// Normalize an amount to a plain value.
pub fn try_normalize_amount(amount_text: &str) -> Result<f64, ExtractionError> {
    parse_amount(amount_text).map(|parsed| parsed.value())
}

/// Normalize an amount to a plain value; 0 when nothing usable is found.
pub fn normalize_amount(amount_text: &str) -> f64 {
    match try_normalize_amount(amount_text) {
        Ok(value) => value,
        Err(e) => {
            trace!("Rejected amount {:?}: {}", amount_text, e);
            0.0
        }
    }
}

/// Scale bare JPY/RUB amounts written in thousands.
///
/// Applies only without an explicit suffix and when the literal lies
/// strictly between 1 and 1000.
pub fn apply_bare_thousands(parsed: ParsedAmount, currency: Currency) -> f64 {
    if parsed.suffix == MagnitudeSuffix::None
        && currency.is_thousand_scaled()
        && parsed.bare > 1.0
        && parsed.bare < 1000.0
    {
        parsed.bare * 1000.0
    } else {
        parsed.value()
    }
}

/// Render a value as `<mantissa><suffix>` so that normalizing it gives the value back.
///
/// Integral mantissas are preferred, largest suffix first: 4000 renders as
/// "4K", 2500000 as "2500K".
pub fn canonical_form(value: f64) -> String {
    const SUFFIXES: [MagnitudeSuffix; 3] = [
        MagnitudeSuffix::Million,
        MagnitudeSuffix::Thousand,
        MagnitudeSuffix::None,
    ];

    let fits = |mantissa: f64| (1.0..10_000.0).contains(&mantissa);

    for suffix in SUFFIXES {
        let mantissa = value / suffix.multiplier();
        if fits(mantissa) && mantissa.fract() == 0.0 {
            return format!("{}{}", mantissa, suffix.as_str());
        }
    }
    for suffix in SUFFIXES {
        let mantissa = value / suffix.multiplier();
        let scaled = mantissa * 1000.0;
        if fits(mantissa) && (scaled - scaled.round()).abs() < 1e-6 {
            return format!("{}{}", scaled.round() / 1000.0, suffix.as_str());
        }
    }

    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hourly_values() {
        assert_eq!(normalize_amount("10€/hour"), 10.0);
        assert_eq!(normalize_amount("£15 per hour"), 15.0);
        assert_eq!(normalize_amount("hourly rate: $25"), 25.0);
        assert_eq!(normalize_amount("£30/h"), 30.0);
        assert_eq!(normalize_amount("15€ de l'heure"), 15.0);
        assert_eq!(normalize_amount("$25 / hour"), 25.0);
    }

    #[test]
    fn test_monthly_values() {
        assert_eq!(normalize_amount("2500€/month"), 2500.0);
        assert_eq!(normalize_amount("2k€ per month"), 2000.0);
        assert_eq!(normalize_amount("$4000 / month"), 4000.0);
        assert_eq!(normalize_amount("£5000/mo"), 5000.0);
        assert_eq!(normalize_amount("2k€ par mois"), 2000.0);
        assert_eq!(normalize_amount("£5000 par mois"), 5000.0);
    }

    #[test]
    fn test_suffixes() {
        assert_eq!(normalize_amount("£10k"), 10_000.0);
        assert_eq!(normalize_amount("300K円"), 300_000.0);
        assert_eq!(normalize_amount("$1.5M"), 1_500_000.0);
        assert_eq!(normalize_amount("30万円"), 300_000.0);
        assert_eq!(normalize_amount("4 k€"), 4000.0);
    }

    #[test]
    fn test_suffix_letter_starting_a_word_is_ignored() {
        assert_eq!(normalize_amount("$4000 month"), 4000.0);
        assert_eq!(normalize_amount("2500 monthly"), 2500.0);
        assert_eq!(normalize_amount("$30 kilo"), 30.0);
    }

    #[test]
    fn test_suffix_glued_to_currency_code() {
        assert_eq!(normalize_amount("4kEUR"), 4000.0);
        assert_eq!(normalize_amount("4KUSD"), 4000.0);
        assert_eq!(normalize_amount("2mRUB"), 2_000_000.0);
        assert_eq!(normalize_amount("2MMXN"), 2_000_000.0);
        // The "M" of "MXN" belongs to the code.
        assert_eq!(normalize_amount("2MXN"), 2.0);
        assert_eq!(normalize_amount("2500 mxn"), 2500.0);
    }

    #[test]
    fn test_separators_are_decimal_points() {
        assert_eq!(normalize_amount("12,5€"), 12.5);
        assert_eq!(normalize_amount("10 000€"), 10.0);
        assert_eq!(normalize_amount("1.5k$"), 1500.0);
        assert_eq!(normalize_amount("$25."), 25.0);
    }

    #[test]
    fn test_rejects_missing_amounts() {
        assert_eq!(normalize_amount(""), 0.0);
        assert_eq!(normalize_amount("great team culture"), 0.0);
        assert_eq!(normalize_amount("$0"), 0.0);
        assert_eq!(parse_amount("n/a"), Err(ExtractionError::NoMatch));
    }

    #[test]
    fn test_parsed_amount_keeps_suffix() {
        let parsed = parse_amount("$80K").unwrap();
        assert_eq!(parsed.bare, 80.0);
        assert_eq!(parsed.suffix, MagnitudeSuffix::Thousand);
        assert_eq!(parsed.value(), 80_000.0);
    }

    #[test]
    fn test_bare_thousands() {
        let parsed = parse_amount("300円").unwrap();
        assert_eq!(apply_bare_thousands(parsed, Currency::Jpy), 300_000.0);
        assert_eq!(apply_bare_thousands(parsed, Currency::Eur), 300.0);

        let parsed = parse_amount("300K円").unwrap();
        assert_eq!(apply_bare_thousands(parsed, Currency::Jpy), 300_000.0);

        let parsed = parse_amount("1500₽").unwrap();
        assert_eq!(apply_bare_thousands(parsed, Currency::Rub), 1500.0);

        let parsed = parse_amount("1₽").unwrap();
        assert_eq!(apply_bare_thousands(parsed, Currency::Rub), 1.0);
    }

    #[test]
    fn test_canonical_form() {
        assert_eq!(canonical_form(4000.0), "4K");
        assert_eq!(canonical_form(2_000_000.0), "2M");
        assert_eq!(canonical_form(2_500_000.0), "2500K");
        assert_eq!(canonical_form(25.0), "25");
        assert_eq!(canonical_form(12.5), "12.5");
        assert_eq!(canonical_form(1500.0), "1500");
        assert_eq!(canonical_form(normalize_amount("1.005K")), "1.005K");
        assert_eq!(canonical_form(2_675_000.0), "2675K");
    }

    #[test]
    fn test_canonical_form_is_idempotent() {
        for text in ["4k€", "£10k", "300K円", "$1.5M", "30万円", "25$", "12,5€", "9999 €"] {
            let value = normalize_amount(text);
            assert_eq!(normalize_amount(&canonical_form(value)), value, "{text}");
        }
    }
}
