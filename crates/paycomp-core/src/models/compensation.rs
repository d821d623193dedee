//! Compensation data models: currencies, locales, periods and output records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical currency codes the engine normalizes every marker into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US dollar ($, USD, US$).
    #[default]
    Usd,
    /// Pound sterling (£, GBP).
    Gbp,
    /// Euro (€, EUR).
    Eur,
    /// Chinese yuan (CNY, RMB, 元, 人民币).
    Cny,
    /// Japanese yen (円, ¥, JPY).
    Jpy,
    /// Russian ruble (₽, RUB, руб).
    Rub,
    /// Mexican peso (Mex$, MX$, MXN).
    Mxn,
    /// Brazilian real (R$, BRL).
    Brl,
}

impl Currency {
    /// All currencies, in marker resolution order.
    pub const ALL: [Currency; 8] = [
        Currency::Usd,
        Currency::Gbp,
        Currency::Eur,
        Currency::Cny,
        Currency::Jpy,
        Currency::Rub,
        Currency::Mxn,
        Currency::Brl,
    ];

    /// ISO-like code, e.g. `"EUR"`.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
            Currency::Eur => "EUR",
            Currency::Cny => "CNY",
            Currency::Jpy => "JPY",
            Currency::Rub => "RUB",
            Currency::Mxn => "MXN",
            Currency::Brl => "BRL",
        }
    }

    /// Textual markers (symbols and codes) that denote this currency.
    pub fn markers(&self) -> &'static [&'static str] {
        match self {
            Currency::Usd => &["$", "USD", "US$"],
            Currency::Gbp => &["£", "GBP"],
            Currency::Eur => &["€", "EUR"],
            Currency::Cny => &["CNY", "RMB", "元", "人民币"],
            Currency::Jpy => &["円", "¥", "￥", "JPY"],
            Currency::Rub => &["₽", "RUB", "руб", "руб."],
            Currency::Mxn => &["Mex$", "MX$", "MXN"],
            Currency::Brl => &["BRL", "R$"],
        }
    }

    /// Map a matched marker back to its currency (case-insensitive).
    pub fn from_marker(marker: &str) -> Option<Self> {
        let marker = marker.trim().to_lowercase();
        Self::ALL.into_iter().find(|currency| {
            currency
                .markers()
                .iter()
                .any(|m| m.to_lowercase() == marker)
        })
    }

    /// Whether amounts in this currency are conventionally written in thousands.
    pub fn is_thousand_scaled(&self) -> bool {
        matches!(self, Currency::Jpy | Currency::Rub)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Language a catalog entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Fr,
    Ja,
    Zh,
    Ar,
    Ru,
    Es,
    Pt,
    #[default]
    Unknown,
}

impl Locale {
    /// Locales that have catalog entries, in precedence order.
    pub const ALL: [Locale; 8] = [
        Locale::En,
        Locale::Fr,
        Locale::Ja,
        Locale::Zh,
        Locale::Ar,
        Locale::Ru,
        Locale::Es,
        Locale::Pt,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
            Locale::Ja => "ja",
            Locale::Zh => "zh",
            Locale::Ar => "ar",
            Locale::Ru => "ru",
            Locale::Es => "es",
            Locale::Pt => "pt",
            Locale::Unknown => "unknown",
        }
    }

    /// Currency assumed when an amount carries no marker.
    pub fn default_currency(&self) -> Currency {
        match self {
            Locale::Fr => Currency::Eur,
            Locale::Ja => Currency::Jpy,
            _ => Currency::Usd,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Pay interval a figure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Periodicity {
    Hourly,
    Monthly,
    Annual,
}

impl Periodicity {
    pub const ALL: [Periodicity; 3] = [
        Periodicity::Hourly,
        Periodicity::Monthly,
        Periodicity::Annual,
    ];
}

impl fmt::Display for Periodicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Periodicity::Hourly => "hourly",
            Periodicity::Monthly => "monthly",
            Periodicity::Annual => "annual",
        };
        f.write_str(name)
    }
}

/// Textual multiplier following a numeric literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MagnitudeSuffix {
    #[default]
    None,
    /// K / k
    Thousand,
    /// M / m
    Million,
    /// 万
    TenThousand,
}

impl MagnitudeSuffix {
    /// Parse suffix text. Unknown text is treated as no suffix.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "K" | "k" => MagnitudeSuffix::Thousand,
            "M" | "m" => MagnitudeSuffix::Million,
            "万" => MagnitudeSuffix::TenThousand,
            _ => MagnitudeSuffix::None,
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            MagnitudeSuffix::None => 1.0,
            MagnitudeSuffix::Thousand => 1_000.0,
            MagnitudeSuffix::Million => 1_000_000.0,
            MagnitudeSuffix::TenThousand => 10_000.0,
        }
    }

    /// Canonical spelling used when rendering values.
    pub fn as_str(&self) -> &'static str {
        match self {
            MagnitudeSuffix::None => "",
            MagnitudeSuffix::Thousand => "K",
            MagnitudeSuffix::Million => "M",
            MagnitudeSuffix::TenThousand => "万",
        }
    }
}

/// How the amount was anchored in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountForm {
    /// Trigger phrase first: "hourly wage: $25".
    TriggerFirst,
    /// Amount first, unit after: "25€ de l'heure".
    AmountFirst,
}

/// Raw amount span found by the periodicity matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountToken {
    /// Period class the span was matched for.
    pub periodicity: Periodicity,
    /// Locale of the catalog entry that matched.
    pub locale: Locale,
    /// Ordering of trigger and amount.
    pub form: AmountForm,
    /// Matched amount text (marker, literal and suffix).
    pub raw_text: String,
    /// Byte span of the whole match (trigger or unit included).
    pub span: (usize, usize),
}

/// Normalized amount for one periodicity. A value of 0 means "not found".
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PeriodAmount {
    pub value: f64,
    pub currency: Currency,
}

impl PeriodAmount {
    pub fn new(value: f64, currency: Currency) -> Self {
        Self { value, currency }
    }

    /// Amount that denotes "no match" in the given currency.
    pub fn missing(currency: Currency) -> Self {
        Self {
            value: 0.0,
            currency,
        }
    }

    pub fn is_found(&self) -> bool {
        self.value != 0.0
    }
}

/// Output of the hourly/monthly extraction mode.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CompensationRecord {
    pub hourly: PeriodAmount,
    pub monthly: PeriodAmount,
}

/// One amount found by the annual extraction mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnualAmount {
    pub currency: Currency,
    pub yearly: f64,
}

/// Output of the unified extraction mode, one amount per periodicity.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PeriodAmounts {
    pub hourly: PeriodAmount,
    pub monthly: PeriodAmount,
    pub annual: PeriodAmount,
}

impl PeriodAmounts {
    pub fn get(&self, periodicity: Periodicity) -> &PeriodAmount {
        match periodicity {
            Periodicity::Hourly => &self.hourly,
            Periodicity::Monthly => &self.monthly,
            Periodicity::Annual => &self.annual,
        }
    }

    pub fn get_mut(&mut self, periodicity: Periodicity) -> &mut PeriodAmount {
        match periodicity {
            Periodicity::Hourly => &mut self.hourly,
            Periodicity::Monthly => &mut self.monthly,
            Periodicity::Annual => &mut self.annual,
        }
    }

    /// Iterate over (periodicity, amount) pairs in `Periodicity::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Periodicity, &PeriodAmount)> {
        Periodicity::ALL.into_iter().map(move |p| (p, self.get(p)))
    }
}

impl From<PeriodAmounts> for CompensationRecord {
    fn from(amounts: PeriodAmounts) -> Self {
        Self {
            hourly: amounts.hourly,
            monthly: amounts.monthly,
        }
    }
}
