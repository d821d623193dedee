//! Compensation parser combining the period matchers, resolvers and backfill.

use tracing::{debug, info};

use crate::error::Result;
use crate::models::compensation::{
    AmountToken, AnnualAmount, CompensationRecord, Currency, PeriodAmount,
    PeriodAmounts, Periodicity,
};
use crate::models::config::ExtractionConfig;

use super::rules::{
    annual::extract_annual,
    backfill::{backfill_periods, backfill_with},
    currency::resolve_currency,
    magnitude::{apply_bare_thousands, parse_amount},
    periods::PeriodMatcher,
    FieldExtractor,
};
use super::CompensationExtractor;

/// Currency attached to records where nothing was found.
pub const DEFAULT_CURRENCY: Currency = Currency::Usd;

/// Compensation parser with its matchers compiled for the configured locales.
///
/// Immutable after construction; share it freely across threads.
#[derive(Debug, Clone)]
pub struct CompensationParser {
    config: ExtractionConfig,
    hourly: PeriodMatcher,
    monthly: PeriodMatcher,
    annual: PeriodMatcher,
}

impl CompensationParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self::build(ExtractionConfig::default())
    }

    /// Create a parser from a configuration, validating it first.
    pub fn with_config(config: ExtractionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: ExtractionConfig) -> Self {
        let locales = &config.locales;
        Self {
            hourly: PeriodMatcher::new(Periodicity::Hourly, locales),
            monthly: PeriodMatcher::new(Periodicity::Monthly, locales),
            annual: PeriodMatcher::new(Periodicity::Annual, locales),
            config,
        }
    }

    /// Set the JPY/RUB bare-thousands heuristic.
    pub fn with_legacy_bare_thousands(mut self, enabled: bool) -> Self {
        self.config.legacy_bare_thousands = enabled;
        self
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Matcher for one periodicity.
    pub fn matcher(&self, periodicity: Periodicity) -> &PeriodMatcher {
        match periodicity {
            Periodicity::Hourly => &self.hourly,
            Periodicity::Monthly => &self.monthly,
            Periodicity::Annual => &self.annual,
        }
    }

    /// First amount for a periodicity.
    pub fn match_period(&self, text: &str, periodicity: Periodicity) -> Option<AmountToken> {
        self.matcher(periodicity).extract(text)
    }

    /// All non-overlapping amounts for a periodicity.
    pub fn match_all(&self, text: &str, periodicity: Periodicity) -> Vec<AmountToken> {
        self.matcher(periodicity).extract_all(text)
    }

    /// Resolve currency and value of a matched token.
    ///
    /// A missing token gives zero in USD. An unusable number gives zero in
    /// the currency resolved for the token.
    pub fn resolve(&self, token: Option<&AmountToken>) -> PeriodAmount {
        let Some(token) = token else {
            return PeriodAmount::missing(DEFAULT_CURRENCY);
        };

        let currency = resolve_currency(&token.raw_text, token.locale);
        let value = match parse_amount(&token.raw_text) {
            Ok(parsed) if self.config.legacy_bare_thousands => apply_bare_thousands(parsed, currency),
            Ok(parsed) => parsed.value(),
            Err(e) => {
                debug!("Discarding {} amount {:?}: {}", token.periodicity, token.raw_text, e);
                0.0
            }
        };

        PeriodAmount::new(value, currency)
    }

    fn resolve_period(&self, text: &str, periodicity: Periodicity) -> PeriodAmount {
        let token = self.match_period(text, periodicity);
        self.resolve(token.as_ref())
    }
}

impl Default for CompensationParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CompensationExtractor for CompensationParser {
    fn parse(&self, text: &str) -> CompensationRecord {
        info!("Parsing compensation from {} characters of text", text.len());

        let hourly = self.resolve_period(text, Periodicity::Hourly);
        let monthly = self.resolve_period(text, Periodicity::Monthly);
        let (hourly, monthly) = backfill_with(hourly, monthly, &self.config.work_time);

        CompensationRecord { hourly, monthly }
    }

    fn parse_annual(&self, text: &str) -> Vec<AnnualAmount> {
        info!("Parsing annual compensation from {} characters of text", text.len());
        extract_annual(text)
    }

    fn extract(&self, text: &str) -> PeriodAmounts {
        info!("Extracting compensation from {} characters of text", text.len());

        let mut amounts = PeriodAmounts::default();
        for periodicity in Periodicity::ALL {
            *amounts.get_mut(periodicity) = self.resolve_period(text, periodicity);
        }
        backfill_periods(&mut amounts, &self.config.work_time);

        amounts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::error::CompensationError;
    use crate::models::compensation::Locale;

    fn record(hourly: f64, monthly: f64, currency: Currency) -> CompensationRecord {
        CompensationRecord {
            hourly: PeriodAmount::new(hourly, currency),
            monthly: PeriodAmount::new(monthly, currency),
        }
    }

    #[test]
    fn test_hourly_rate_backfills_monthly() {
        let parser = CompensationParser::new();
        assert_eq!(parser.parse("hourly rate: $25"), record(25.0, 4000.0, Currency::Usd));
    }

    #[test]
    fn test_monthly_suffix_amount() {
        let parser = CompensationParser::new();
        assert_eq!(parser.parse("4k€ per month"), record(25.0, 4000.0, Currency::Eur));
    }

    #[test]
    fn test_japanese_monthly() {
        let parser = CompensationParser::new();
        let result = parser.parse("月給 300K円");
        assert_eq!(result.monthly, PeriodAmount::new(300_000.0, Currency::Jpy));
        assert_eq!(result.hourly, PeriodAmount::new(1875.0, Currency::Jpy));
    }

    #[test]
    fn test_no_amount() {
        let parser = CompensationParser::new();
        assert_eq!(
            parser.parse("great team culture"),
            record(0.0, 0.0, DEFAULT_CURRENCY)
        );
    }

    #[test]
    fn test_both_periods_found() {
        let parser = CompensationParser::new();
        let result = parser.parse("hourly: $20 and monthly salary: $3000");
        assert_eq!(result, record(20.0, 3000.0, Currency::Usd));
    }

    #[test]
    fn test_legacy_bare_thousands() {
        let text = "月給 300円";

        let parser = CompensationParser::new();
        assert_eq!(parser.parse(text).monthly.value, 300.0);

        let parser = CompensationParser::new().with_legacy_bare_thousands(true);
        assert_eq!(parser.parse(text).monthly.value, 300_000.0);
        assert_eq!(parser.parse("月給 300K円").monthly.value, 300_000.0);
    }

    #[test]
    fn test_resolve_missing_token() {
        let parser = CompensationParser::new();
        assert_eq!(parser.resolve(None), PeriodAmount::missing(Currency::Usd));
    }

    #[test]
    fn test_parse_input() {
        let parser = CompensationParser::new();

        let result = parser.parse_input(&json!({"text": "salaire horaire : 10€"})).unwrap();
        assert_eq!(result, record(10.0, 1600.0, Currency::Eur));

        let result = parser.parse_input(&json!("20€ de l'heure")).unwrap();
        assert_eq!(result, record(20.0, 3200.0, Currency::Eur));

        let err = parser.parse_input(&json!(null)).unwrap_err();
        assert!(matches!(err, CompensationError::InvalidInputKind { .. }));
    }

    #[test]
    fn test_parse_annual() {
        let parser = CompensationParser::new();
        let amounts = parser.parse_annual_input(&json!({"text": "$80K"})).unwrap();
        assert_eq!(
            amounts,
            vec![AnnualAmount {
                currency: Currency::Usd,
                yearly: 80_000.0
            }]
        );
        assert!(parser.parse_annual_input(&json!([1])).is_err());
    }

    #[test]
    fn test_extract_unified() {
        let parser = CompensationParser::new();

        let amounts = parser.extract("annual salary: $48k");
        assert_eq!(amounts.annual, PeriodAmount::new(48_000.0, Currency::Usd));
        assert_eq!(amounts.monthly, PeriodAmount::new(4000.0, Currency::Usd));
        assert_eq!(amounts.hourly, PeriodAmount::new(25.0, Currency::Usd));

        let amounts = parser.extract("hourly rate: $25");
        assert_eq!(amounts.annual, PeriodAmount::new(48_000.0, Currency::Usd));
    }

    #[test]
    fn test_with_config() {
        let config = ExtractionConfig {
            locales: vec![Locale::Fr],
            ..Default::default()
        };
        let parser = CompensationParser::with_config(config).unwrap();
        assert_eq!(parser.parse("hourly rate: $25"), record(0.0, 0.0, DEFAULT_CURRENCY));
        assert_eq!(parser.parse("salaire : 14€/heure").hourly.value, 14.0);

        let invalid = ExtractionConfig {
            locales: Vec::new(),
            ..Default::default()
        };
        assert!(CompensationParser::with_config(invalid).is_err());
    }

    #[test]
    fn test_parser_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CompensationParser>();
    }

    #[test]
    fn test_match_period_tags_locale() {
        let parser = CompensationParser::new();
        let token = parser
            .match_period("salaire mensuel : 2500€", Periodicity::Monthly)
            .unwrap();
        assert_eq!(token.locale, Locale::Fr);
        assert_eq!(token.raw_text, "2500€");
        assert_eq!(parser.match_all("no pay here", Periodicity::Hourly), Vec::new());
    }
}
