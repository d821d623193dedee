//! Locale pattern catalog: trigger phrases and unit tokens per locale and period.
//!
//! Entries are regex fragments. Within a list, longer phrases come first so
//! that "monthly salary" is preferred over "monthly" at the same position.
//! Across locales, the order of [`CATALOG`] breaks ties between entries that
//! match at the same position.

use crate::models::compensation::{Locale, Periodicity};

/// Bumped whenever an entry changes in a way that alters extraction results.
pub const CATALOG_VERSION: u32 = 3;

/// Vocabulary for one periodicity in one locale.
#[derive(Debug)]
pub struct PeriodVocabulary {
    /// Phrases written before the amount: "hourly wage: $25".
    pub triggers: &'static [&'static str],
    /// Tokens written after the amount: "25€ de l'heure".
    pub units: &'static [&'static str],
}

/// Catalog entry for one locale.
#[derive(Debug)]
pub struct LocaleEntry {
    pub locale: Locale,
    /// Whether triggers and units must sit on word boundaries. True for
    /// space-delimited scripts, false for CJK and Arabic.
    pub word_bounded: bool,
    pub hourly: PeriodVocabulary,
    pub monthly: PeriodVocabulary,
    pub annual: PeriodVocabulary,
}

impl LocaleEntry {
    pub fn vocabulary(&self, periodicity: Periodicity) -> &PeriodVocabulary {
        match periodicity {
            Periodicity::Hourly => &self.hourly,
            Periodicity::Monthly => &self.monthly,
            Periodicity::Annual => &self.annual,
        }
    }
}

pub static CATALOG: [LocaleEntry; 8] = [
    LocaleEntry {
        locale: Locale::En,
        word_bounded: true,
        hourly: PeriodVocabulary {
            triggers: &[
                r"hourly\s+pay",
                r"hourly\s+wage",
                r"hourly\s+compensation",
                r"hourly\s+gratification",
                r"hourly\s+salary",
                r"hourly\s+rate",
                r"rate\s+per\s+hour",
                r"pay\s+per\s+hour",
                r"hourly",
            ],
            units: &[
                r"/\s?hour",
                r"/\s?hr",
                r"/\s?h",
                r"per\s?hour",
                r"an\s+hour",
                r"hourly",
                r"hour",
                r"hr",
            ],
        },
        monthly: PeriodVocabulary {
            triggers: &[
                r"monthly\s+pay",
                r"monthly\s+wage",
                r"monthly\s+compensation",
                r"monthly\s+gratification",
                r"monthly\s+salary",
                r"monthly\s+rate",
                r"monthly",
            ],
            units: &[
                r"/\s?month",
                r"/\s?mo",
                r"/\s?m",
                r"per\s?month",
                r"a\s+month",
                r"monthly",
                r"month",
                r"mo",
            ],
        },
        annual: PeriodVocabulary {
            triggers: &[
                r"annual\s+salary",
                r"annual\s+pay",
                r"annual\s+compensation",
                r"yearly\s+salary",
                r"yearly\s+pay",
                r"annual",
                r"yearly",
            ],
            units: &[
                r"/\s?year",
                r"/\s?yr",
                r"per\s?year",
                r"per\s+annum",
                r"a\s+year",
                r"annually",
                r"yearly",
                r"year",
                r"yr",
            ],
        },
    },
    LocaleEntry {
        locale: Locale::Fr,
        word_bounded: true,
        hourly: PeriodVocabulary {
            triggers: &[
                r"(?:salaire|gratification|rémunération)\s(?:horaire|par\s+heure|de\s+l'heure)",
                r"taux\s+horaire",
            ],
            units: &[
                r"de\s?l(?:'|’|\s)?heure",
                r"par\s?heure",
                r"/\s?heure",
                r"heure",
            ],
        },
        monthly: PeriodVocabulary {
            triggers: &[
                r"salaire\s+brut\s+mensuel",
                r"salaire\s+mensuel",
                r"rémunération\s+mensuelle",
                r"gratification\s+mensuelle",
            ],
            units: &[
                r"par\s?mois",
                r"/\s?mois",
                r"mensuels?",
                r"mois",
            ],
        },
        annual: PeriodVocabulary {
            triggers: &[
                r"salaire\s+brut\s+annuel",
                r"salaire\s+annuel",
                r"rémunération\s+annuelle",
            ],
            units: &[
                r"par\s?an",
                r"/\s?an",
                r"annuels?",
                r"brut\s+annuel",
            ],
        },
    },
    LocaleEntry {
        locale: Locale::Ja,
        word_bounded: false,
        hourly: PeriodVocabulary {
            triggers: &[r"時給"],
            units: &[r"/\s?時間", r"/\s?時", r"時給"],
        },
        monthly: PeriodVocabulary {
            triggers: &[r"月給", r"月収"],
            units: &[r"/\s?月", r"月給"],
        },
        annual: PeriodVocabulary {
            triggers: &[r"年収", r"年俸"],
            units: &[r"/\s?年", r"年収"],
        },
    },
    LocaleEntry {
        locale: Locale::Zh,
        word_bounded: false,
        hourly: PeriodVocabulary {
            triggers: &[r"每小时工资", r"时薪", r"時薪"],
            units: &[r"每小时", r"/\s?小时", r"一小时"],
        },
        monthly: PeriodVocabulary {
            triggers: &[r"每月工资", r"月工资", r"月薪"],
            units: &[r"每月", r"/\s?月", r"一个月"],
        },
        annual: PeriodVocabulary {
            triggers: &[r"年薪"],
            units: &[r"每年", r"/\s?年"],
        },
    },
    LocaleEntry {
        locale: Locale::Ar,
        word_bounded: false,
        hourly: PeriodVocabulary {
            triggers: &[r"الأجر\s+بالساعة", r"الراتب\s+بالساعة", r"أجر\s+الساعة"],
            units: &[r"في\s+الساعة", r"للساعة", r"/\s?ساعة", r"بالساعة"],
        },
        monthly: PeriodVocabulary {
            triggers: &[r"الأجر\s+الشهري", r"الراتب\s+الشهري"],
            units: &[r"في\s+الشهر", r"شهريا", r"/\s?شهر"],
        },
        annual: PeriodVocabulary {
            triggers: &[r"الراتب\s+السنوي", r"الأجر\s+السنوي"],
            units: &[r"في\s+السنة", r"سنويا", r"/\s?سنة"],
        },
    },
    LocaleEntry {
        locale: Locale::Ru,
        word_bounded: true,
        hourly: PeriodVocabulary {
            triggers: &[
                r"почасовая\s+оплата",
                r"оплата\s+за\s+час",
                r"ставка\s+в\s+час",
            ],
            units: &[r"в\s+час", r"за\s+час", r"/\s?час"],
        },
        monthly: PeriodVocabulary {
            triggers: &[
                r"ежемесячная\s+зарплата",
                r"зарплата\s+в\s+месяц",
                r"оклад",
            ],
            units: &[r"в\s+месяц", r"в\s+мес", r"/\s?мес(?:яц)?"],
        },
        annual: PeriodVocabulary {
            triggers: &[r"годовая\s+зарплата", r"годовой\s+доход"],
            units: &[r"в\s+год", r"/\s?год"],
        },
    },
    LocaleEntry {
        locale: Locale::Es,
        word_bounded: true,
        hourly: PeriodVocabulary {
            triggers: &[
                r"salario\s+por\s+hora",
                r"pago\s+por\s+hora",
                r"tarifa\s+por\s+hora",
            ],
            units: &[r"por\s+hora", r"la\s+hora", r"/\s?hora"],
        },
        monthly: PeriodVocabulary {
            triggers: &[r"salario\s+mensual", r"sueldo\s+mensual"],
            units: &[r"al\s+mes", r"por\s+mes", r"/\s?mes", r"mensuales"],
        },
        annual: PeriodVocabulary {
            triggers: &[r"salario\s+anual", r"sueldo\s+anual"],
            units: &[r"al\s+año", r"por\s+año", r"/\s?año", r"anuales"],
        },
    },
    LocaleEntry {
        locale: Locale::Pt,
        word_bounded: true,
        hourly: PeriodVocabulary {
            triggers: &[r"salário\s+por\s+hora", r"valor\s+por\s+hora"],
            units: &[r"por\s+hora", r"/\s?hora"],
        },
        monthly: PeriodVocabulary {
            triggers: &[r"salário\s+mensal", r"remuneração\s+mensal"],
            units: &[r"por\s+mês", r"ao\s+mês", r"/\s?mês", r"mensais"],
        },
        annual: PeriodVocabulary {
            triggers: &[r"salário\s+anual", r"remuneração\s+anual"],
            units: &[r"por\s+ano", r"ao\s+ano", r"/\s?ano", r"anuais"],
        },
    },
];

/// Catalog entry for a locale.
pub fn entry(locale: Locale) -> Option<&'static LocaleEntry> {
    CATALOG.iter().find(|entry| entry.locale == locale)
}

/// Vocabulary for a locale and periodicity.
pub fn vocabulary(locale: Locale, periodicity: Periodicity) -> Option<&'static PeriodVocabulary> {
    entry(locale).map(|entry| entry.vocabulary(periodicity))
}
