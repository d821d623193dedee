//! Periodicity matcher: finds amount spans for one pay period.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::models::compensation::{AmountForm, AmountToken, Locale, Periodicity};

use super::catalog::{LocaleEntry, CATALOG};
use super::patterns::{amount, SEPARATOR};
use super::FieldExtractor;

/// One compiled catalog pattern.
#[derive(Debug)]
pub struct CompiledEntry {
    pub locale: Locale,
    word_bounded: bool,
    pub periodicity: Periodicity,
    pub form: AmountForm,
    regex: Regex,
}

lazy_static! {
    // Every (locale, periodicity, form) pattern, in catalog order.
    static ref COMPILED_CATALOG: Vec<CompiledEntry> = CATALOG
        .iter()
        .flat_map(|entry| {
            Periodicity::ALL.into_iter().flat_map(move |periodicity| {
                [AmountForm::TriggerFirst, AmountForm::AmountFirst]
                    .into_iter()
                    .map(move |form| CompiledEntry {
                        locale: entry.locale,
                        word_bounded: entry.word_bounded,
                        periodicity,
                        form,
                        regex: Regex::new(&entry_pattern(entry, periodicity, form)).unwrap(),
                    })
            })
        })
        .collect();
}

fn entry_pattern(entry: &LocaleEntry, periodicity: Periodicity, form: AmountForm) -> String {
    let vocabulary = entry.vocabulary(periodicity);
    let boundary = if entry.word_bounded { r"\b" } else { "" };

    match form {
        AmountForm::TriggerFirst => format!(
            r"(?i){}(?:{}){}(?P<amount>{})",
            boundary,
            vocabulary.triggers.join("|"),
            SEPARATOR,
            amount()
        ),
        AmountForm::AmountFirst => format!(
            r"(?i)(?P<amount>{})\s*(?:{}){}",
            amount(),
            vocabulary.units.join("|"),
            boundary
        ),
    }
}

/// Whether a Latin currency code at `end` runs on into more letters ("1500 rubles").
///
/// Cyrillic "руб" is left alone: it is the usual prefix of "рублей".
fn ends_mid_word(text: &str, end: usize) -> bool {
    let before = text[..end].chars().next_back();
    let after = text[end..].chars().next();

    matches!(
        (before, after),
        (Some(b), Some(a)) if b.is_ascii_alphabetic() && a.is_ascii_alphabetic()
    )
}

/// Matcher for one periodicity over a set of locales.
#[derive(Debug, Clone)]
pub struct PeriodMatcher {
    periodicity: Periodicity,
    entries: Vec<&'static CompiledEntry>,
}

impl PeriodMatcher {
    /// Build a matcher using the catalog entries of `locales`, in that order.
    pub fn new(periodicity: Periodicity, locales: &[Locale]) -> Self {
        let entries = locales
            .iter()
            .flat_map(|locale| {
                COMPILED_CATALOG
                    .iter()
                    .filter(move |e| e.locale == *locale && e.periodicity == periodicity)
            })
            .collect();

        Self {
            periodicity,
            entries,
        }
    }

    pub fn periodicity(&self) -> Periodicity {
        self.periodicity
    }

    fn token(
        &self,
        entry: &CompiledEntry,
        caps: &regex::Captures<'_>,
        text: &str,
    ) -> Option<AmountToken> {
        let whole = caps.get(0)?;
        let amount = caps.name("amount")?;

        if entry.word_bounded && ends_mid_word(text, amount.end()) {
            trace!("Skipping amount {:?} glued to a word", amount.as_str());
            return None;
        }

        Some(AmountToken {
            periodicity: self.periodicity,
            locale: entry.locale,
            form: entry.form,
            raw_text: amount.as_str().trim().to_string(),
            span: (whole.start(), whole.end()),
        })
    }
}

impl FieldExtractor for PeriodMatcher {
    type Output = AmountToken;

    /// Leftmost match over all entries; ties go to the earlier entry.
    fn extract(&self, text: &str) -> Option<Self::Output> {
        let token = self
            .entries
            .iter()
            .filter_map(|entry| {
                entry
                    .regex
                    .captures_iter(text)
                    .find_map(|caps| self.token(entry, &caps, text))
            })
            .min_by_key(|token| token.span.0);

        if let Some(token) = &token {
            debug!(
                "Matched {} amount {:?} ({}, {:?})",
                self.periodicity, token.raw_text, token.locale, token.form
            );
        }

        token
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut candidates: Vec<(usize, AmountToken)> = Vec::new();

        for (order, entry) in self.entries.iter().enumerate() {
            for caps in entry.regex.captures_iter(text) {
                if let Some(token) = self.token(entry, &caps, text) {
                    candidates.push((order, token));
                }
            }
        }

        candidates.sort_by_key(|(order, token)| (token.span.0, *order));

        let mut results: Vec<AmountToken> = Vec::new();
        for (_, token) in candidates {
            let overlaps = results
                .last()
                .is_some_and(|last| token.span.0 < last.span.1);
            if !overlaps {
                results.push(token);
            }
        }

        debug!("Found {} {} amounts", results.len(), self.periodicity);
        results
    }
}
