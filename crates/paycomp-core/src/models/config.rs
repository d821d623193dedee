//! Configuration structures for the extraction engine.

use serde::{Deserialize, Serialize};

use crate::error::{CompensationError, Result};
use crate::models::compensation::Locale;

/// Main configuration for compensation extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Scale bare JPY/RUB amounts between 1 and 1000 by 1000.
    ///
    /// Postings in these currencies often write "300円" meaning 300 000.
    /// Only applied when the amount carries no explicit magnitude suffix.
    pub legacy_bare_thousands: bool,

    /// Working-time convention used when backfilling missing periods.
    pub work_time: WorkTimeConvention,

    /// Catalog locales to compile, in precedence order.
    pub locales: Vec<Locale>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            legacy_bare_thousands: false,
            work_time: WorkTimeConvention::default(),
            locales: Locale::ALL.to_vec(),
        }
    }
}

/// Fixed work-time ratios between periods.
///
/// The defaults (8-hour day, 20-day month, 12-month year) are applied
/// regardless of the locale an amount was found in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkTimeConvention {
    pub hours_per_day: f64,
    pub days_per_month: f64,
    pub months_per_year: f64,
}

impl Default for WorkTimeConvention {
    fn default() -> Self {
        Self {
            hours_per_day: 8.0,
            days_per_month: 20.0,
            months_per_year: 12.0,
        }
    }
}

impl WorkTimeConvention {
    /// Working hours in one month.
    pub fn hours_per_month(&self) -> f64 {
        self.days_per_month * self.hours_per_day
    }
}

impl ExtractionConfig {
    /// Parse configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the configuration can drive an extractor.
    pub fn validate(&self) -> Result<()> {
        let factors = [
            ("hours_per_day", self.work_time.hours_per_day),
            ("days_per_month", self.work_time.days_per_month),
            ("months_per_year", self.work_time.months_per_year),
        ];
        for (name, factor) in factors {
            if !factor.is_finite() || factor <= 0.0 {
                return Err(CompensationError::Config(format!(
                    "{} must be a positive number, got {}",
                    name, factor
                )));
            }
        }

        if self.locales.is_empty() {
            return Err(CompensationError::Config(
                "at least one locale must be enabled".to_string(),
            ));
        }
        if self.locales.contains(&Locale::Unknown) {
            return Err(CompensationError::Config(
                "locale 'unknown' has no catalog entry".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.work_time.hours_per_month(), 160.0);
        assert_eq!(config.locales.len(), 8);
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = ExtractionConfig::from_json(r#"{"legacy_bare_thousands": true}"#).unwrap();
        assert!(config.legacy_bare_thousands);
        assert_eq!(config.work_time, WorkTimeConvention::default());
    }

    #[test]
    fn test_from_json_locales() {
        let config = ExtractionConfig::from_json(r#"{"locales": ["fr", "ja"]}"#).unwrap();
        assert_eq!(config.locales, vec![Locale::Fr, Locale::Ja]);
    }

    #[test]
    fn test_rejects_zero_work_time() {
        let result = ExtractionConfig::from_json(r#"{"work_time": {"hours_per_day": 0}}"#);
        assert!(matches!(result, Err(CompensationError::Config(_))));
    }

    #[test]
    fn test_rejects_empty_locales() {
        let result = ExtractionConfig::from_json(r#"{"locales": []}"#);
        assert!(matches!(result, Err(CompensationError::Config(_))));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let result = ExtractionConfig::from_json("{");
        assert!(matches!(result, Err(CompensationError::Json(_))));
    }

    #[test]
    fn test_round_trip_json() {
        let config = ExtractionConfig {
            legacy_bare_thousands: true,
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(ExtractionConfig::from_json(&json).unwrap(), config);
    }
}
