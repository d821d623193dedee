//! Amount grammar shared by every locale, plus the compiled helper patterns.
//!
//! An amount is a currency marker and a numeric literal in either order,
//! with an optional magnitude suffix:
//!
//! - symbol-left: `$25`, `£ 10k`, `R$ 3.500`
//! - symbol-right: `25€`, `300K円`, `30万円`, `1500 руб.`

use lazy_static::lazy_static;
use regex::Regex;

/// Filler allowed between a trigger and an amount, and between a marker and a literal.
pub const SEPARATOR: &str = r"(?:\t|\s|①|②|:){0,3}";

/// Leading digit 1-9, up to three more digits, one optional separator and up to three digits.
pub const NUMERIC_VALUE: &str = r"[1-9][0-9]{0,3}(?:[., ][0-9]{0,3})?";

/// Magnitude suffix: thousand, million, ten-thousand.
pub const MAGNITUDE: &str = r"(?:k|m|万)";

/// Markers written before the number.
pub const CURRENCY_LEFT: &str =
    r"(?:US\$|R\$|Mex\$|MX\$|\$|£|¥|￥|USD|GBP|JPY|BRL|RMB|人民币)";

/// Markers written after the number.
pub const CURRENCY_RIGHT: &str =
    r"(?:円|元|人民币|€|₽|руб\.?|Mex\$|MX\$|R\$|US\$|\$|CNY|RMB|EUR|RUB|MXN|USD|GBP|JPY|BRL)";

/// Every marker the currency resolver recognizes.
pub const CURRENCY_ANY: &str =
    r"(?:US\$|Mex\$|MX\$|R\$|\$|USD|£|GBP|€|EUR|CNY|RMB|元|人民币|円|¥|￥|JPY|₽|RUB|руб|MXN|BRL)";

/// Symbol-left amount. A K/M suffix must end a word so "$4000 month" keeps its "m".
pub fn amount_left() -> String {
    format!(
        r"{}{}{}(?:\s?(?:[km]\b|万))?",
        CURRENCY_LEFT, SEPARATOR, NUMERIC_VALUE
    )
}

/// Symbol-right amount.
pub fn amount_right() -> String {
    format!(
        r"{}(?:\s?{})?\s?{}",
        NUMERIC_VALUE, MAGNITUDE, CURRENCY_RIGHT
    )
}

/// Either amount ordering, without a capture group.
pub fn amount() -> String {
    format!("(?:{}|{})", amount_left(), amount_right())
}

/// Amount whose magnitude suffix is a mandatory thousand marker.
pub fn thousands_amount() -> String {
    format!(
        r"(?:{}{}{}\s?k\b|{}\s?k\s?{})",
        CURRENCY_LEFT, SEPARATOR, NUMERIC_VALUE, NUMERIC_VALUE, CURRENCY_RIGHT
    )
}

/// Labels that introduce a salary figure in the annual extraction mode.
pub const SALARY_LABELS: &[&str] = &[
    r"annual\s+salary",
    r"yearly\s+salary",
    r"salary",
    r"compensation",
    r"wage",
    r"pay",
    r"salaire\s+annuel",
    r"salaire",
    r"rémunération",
    r"年収",
    r"年俸",
    r"年薪",
    r"薪资",
    r"الراتب",
    r"зарплата",
    r"salario",
    r"salário",
];

lazy_static! {
    // First currency marker in an amount; leftmost occurrence wins.
    pub static ref CURRENCY_MARKER: Regex = Regex::new(
        &format!("(?i){}", CURRENCY_ANY)
    ).unwrap();

    // Numeric literal with its adjacent suffix. `tail` catches a letter glued
    // to a K/M suffix: either a word ("4000 month") or a currency code ("4kEUR").
    pub static ref AMOUNT_VALUE: Regex = Regex::new(
        &format!(
            r"(?i)(?P<number>{})(?:\s?(?P<suffix>{})(?P<tail>[a-z])?)?",
            NUMERIC_VALUE, MAGNITUDE
        )
    ).unwrap();

    // Optional salary label directly followed by a K-suffixed amount.
    pub static ref ANNUAL_AMOUNT: Regex = Regex::new(
        &format!(
            r"(?i)(?:(?P<label>{}){})?(?P<amount>{})",
            SALARY_LABELS.join("|"),
            SEPARATOR,
            thousands_amount()
        )
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_match(pattern: &str, text: &str) -> bool {
        Regex::new(&format!("(?i)^(?:{})$", pattern))
            .unwrap()
            .is_match(text)
    }

    #[test]
    fn test_numeric_value() {
        for literal in ["1", "25", "2500", "12,5", "1.500", "10 000", "9999.999"] {
            assert!(full_match(NUMERIC_VALUE, literal), "{literal}");
        }
        for literal in ["0", "012", "12345", "1,2,3"] {
            assert!(!full_match(NUMERIC_VALUE, literal), "{literal}");
        }
    }

    #[test]
    fn test_amount_left() {
        for amount in ["$25", "£10k", "$ 4k", "R$ 3.500", "JPY 300", "¥30万", "USD 80K"] {
            assert!(full_match(&amount_left(), amount), "{amount}");
        }
        assert!(!full_match(&amount_left(), "25€"));
    }

    #[test]
    fn test_amount_right() {
        for amount in ["25€", "300K円", "30万円", "4k€", "1500 руб.", "20 EUR", "8000元"] {
            assert!(full_match(&amount_right(), amount), "{amount}");
        }
        assert!(!full_match(&amount_right(), "$25"));
    }

    #[test]
    fn test_left_suffix_needs_word_end() {
        let re = Regex::new(&format!("(?i){}", amount_left())).unwrap();
        assert_eq!(re.find("$4000 month").unwrap().as_str(), "$4000 ");
        assert_eq!(re.find("$4k per month").unwrap().as_str(), "$4k");
    }

    #[test]
    fn test_currency_marker_leftmost() {
        assert_eq!(CURRENCY_MARKER.find("R$ 100").unwrap().as_str(), "R$");
        assert_eq!(CURRENCY_MARKER.find("Mex$100").unwrap().as_str(), "Mex$");
        assert_eq!(CURRENCY_MARKER.find("100 eur").unwrap().as_str(), "eur");
    }

    #[test]
    fn test_amount_value_tail() {
        let caps = AMOUNT_VALUE.captures("4000 month").unwrap();
        assert_eq!(&caps["suffix"], "m");
        assert!(caps.name("tail").is_some());

        let caps = AMOUNT_VALUE.captures("4k€").unwrap();
        assert_eq!(&caps["number"], "4");
        assert_eq!(&caps["suffix"], "k");
        assert!(caps.name("tail").is_none());
    }

    #[test]
    fn test_annual_amount() {
        let caps = ANNUAL_AMOUNT.captures("Salary: $80K plus equity").unwrap();
        assert_eq!(&caps["label"], "Salary");
        assert_eq!(&caps["amount"], "$80K");

        let caps = ANNUAL_AMOUNT.captures("$120k").unwrap();
        assert!(caps.name("label").is_none());

        assert!(ANNUAL_AMOUNT.captures("salary: $80,000").is_none());
    }
}
