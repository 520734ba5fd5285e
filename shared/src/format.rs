// Locale-aware rendering of amounts, plain numbers and dates.
//
// Formatting is a pluggable capability: callers hold a `LocaleFormatter`,
// and `Formatter` is the data-driven implementation for the built-in locales.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

use crate::utils::{group_digits, parse_decimal_or_zero, round_half_away};

pub const DEFAULT_LOCALE: &str = "ar-EG";
pub const DEFAULT_CURRENCY: &str = "EGP";

const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];
const ASCII_DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Unsupported locale: {0}")]
    UnknownLocale(String),

    #[error("Invalid currency code '{0}': expected three ASCII letters")]
    InvalidCurrency(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    Prefix,
    Suffix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    DayMonthYear,
    MonthDayYear,
}

/// Number, currency and short-date conventions of one locale.
#[derive(Debug, Clone, PartialEq)]
pub struct Locale {
    pub tag: &'static str,
    digits: [char; 10],
    group_separator: &'static str,
    decimal_separator: &'static str,
    minus_sign: &'static str,
    nan_symbol: &'static str,
    infinity_symbol: &'static str,
    /// Wraps the whole rendered currency string, e.g. a right-to-left mark.
    currency_lead: &'static str,
    currency_code: &'static str,
    currency_symbol: &'static str,
    placement: SymbolPlacement,
    date_order: DateOrder,
    date_separator: &'static str,
}

impl Locale {
    pub fn arabic_egypt() -> Self {
        Self {
            tag: "ar-EG",
            digits: ARABIC_INDIC_DIGITS,
            group_separator: "٬",
            decimal_separator: "٫",
            minus_sign: "\u{61c}-",
            nan_symbol: "ليس رقمًا",
            infinity_symbol: "∞",
            currency_lead: "\u{200f}",
            currency_code: "EGP",
            currency_symbol: "\u{a0}ج.م.\u{200f}",
            placement: SymbolPlacement::Suffix,
            date_order: DateOrder::DayMonthYear,
            date_separator: "\u{200f}/",
        }
    }

    pub fn english_us() -> Self {
        Self {
            tag: "en-US",
            digits: ASCII_DIGITS,
            group_separator: ",",
            decimal_separator: ".",
            minus_sign: "-",
            nan_symbol: "NaN",
            infinity_symbol: "∞",
            currency_lead: "",
            currency_code: "USD",
            currency_symbol: "$",
            placement: SymbolPlacement::Prefix,
            date_order: DateOrder::MonthDayYear,
            date_separator: "/",
        }
    }

    pub fn from_tag(tag: &str) -> Result<Self, FormatError> {
        match tag {
            "ar-EG" | "ar_EG" => Ok(Self::arabic_egypt()),
            "en-US" | "en_US" => Ok(Self::english_us()),
            other => Err(FormatError::UnknownLocale(other.to_string())),
        }
    }

    fn localize_digits(&self, ascii: &str) -> String {
        ascii
            .chars()
            .map(|c| match c.to_digit(10) {
                Some(d) => self.digits[d as usize],
                None => c,
            })
            .collect()
    }

    /// Renders `|value|` with grouping and exactly `min..=max` fraction digits.
    fn magnitude(&self, value: f64, min_fraction: usize, max_fraction: usize) -> String {
        if value.is_nan() {
            return self.nan_symbol.to_string();
        }
        if value.is_infinite() {
            return self.infinity_symbol.to_string();
        }
        let (int_digits, mut frac_digits) = round_half_away(value, max_fraction);
        while frac_digits.len() > min_fraction && frac_digits.ends_with('0') {
            frac_digits.pop();
        }
        let mut out = group_digits(&self.localize_digits(&int_digits), self.group_separator);
        if !frac_digits.is_empty() {
            out.push_str(self.decimal_separator);
            out.push_str(&self.localize_digits(&frac_digits));
        }
        out
    }

    fn is_negative(value: f64, max_fraction: usize) -> bool {
        // A value that rounds to zero is rendered without a sign.
        if value >= 0.0 || value.is_nan() {
            return false;
        }
        if value.is_infinite() {
            return true;
        }
        let (int_digits, frac_digits) = round_half_away(value, max_fraction);
        int_digits.chars().chain(frac_digits.chars()).any(|c| c != '0')
    }
}

/// Pluggable locale/currency formatting capability.
pub trait LocaleFormatter: Send + Sync {
    fn format_currency(&self, amount: f64) -> String;
    fn format_number(&self, number: f64) -> String;
    fn format_date(&self, date: &DateLike) -> String;
}

/// A locale plus the currency it renders amounts in.
#[derive(Debug, Clone, PartialEq)]
pub struct Formatter {
    locale: Locale,
    currency: String,
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            locale: Locale::arabic_egypt(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl Formatter {
    pub fn new(locale_tag: &str, currency: &str) -> Result<Self, FormatError> {
        let locale = Locale::from_tag(locale_tag)?;
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(FormatError::InvalidCurrency(currency.to_string()));
        }
        Ok(Self {
            locale,
            currency: currency.to_ascii_uppercase(),
        })
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}

impl LocaleFormatter for Formatter {
    fn format_currency(&self, amount: f64) -> String {
        let l = &self.locale;
        let sign = if Locale::is_negative(amount, 2) { l.minus_sign } else { "" };
        let body = l.magnitude(amount, 2, 2);

        if self.currency == l.currency_code {
            match l.placement {
                SymbolPlacement::Prefix => format!("{}{}{}{}", l.currency_lead, sign, l.currency_symbol, body),
                SymbolPlacement::Suffix => format!("{}{}{}{}", l.currency_lead, sign, body, l.currency_symbol),
            }
        } else {
            // Foreign currencies fall back to the ISO code.
            format!("{}{}{}\u{a0}{}", l.currency_lead, sign, self.currency, body)
        }
    }

    fn format_number(&self, number: f64) -> String {
        let l = &self.locale;
        let sign = if Locale::is_negative(number, 3) { l.minus_sign } else { "" };
        format!("{}{}", sign, l.magnitude(number, 0, 3))
    }

    fn format_date(&self, date: &DateLike) -> String {
        let Some(day) = date.to_naive_date() else {
            tracing::debug!(input = ?date, "Unparseable date rendered as empty string");
            return String::new();
        };
        use chrono::Datelike;
        let l = &self.locale;
        let (first, second) = match l.date_order {
            DateOrder::DayMonthYear => (day.day(), day.month()),
            DateOrder::MonthDayYear => (day.month(), day.day()),
        };
        let ascii = format!("{}{sep}{}{sep}{}", first, second, day.year(), sep = "\u{0}");
        l.localize_digits(&ascii).replace('\u{0}', l.date_separator)
    }
}

/// Anything a caller may hand to the date formatter.
#[derive(Debug, Clone, PartialEq)]
pub enum DateLike {
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
    Text(String),
}

impl DateLike {
    /// Calendar day of the value; timestamps are taken in UTC.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        match self {
            DateLike::Date(d) => Some(*d),
            DateLike::DateTime(dt) => Some(dt.date_naive()),
            DateLike::Text(text) => parse_date_text(text.trim()),
        }
    }
}

fn parse_date_text(text: &str) -> Option<NaiveDate> {
    if let Ok(d) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(text, "%Y/%m/%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|dt| dt.date())
}

impl From<NaiveDate> for DateLike {
    fn from(d: NaiveDate) -> Self {
        DateLike::Date(d)
    }
}

impl From<DateTime<Utc>> for DateLike {
    fn from(dt: DateTime<Utc>) -> Self {
        DateLike::DateTime(dt)
    }
}

impl From<&str> for DateLike {
    fn from(s: &str) -> Self {
        DateLike::Text(s.to_string())
    }
}

impl From<String> for DateLike {
    fn from(s: String) -> Self {
        DateLike::Text(s)
    }
}

/// A value that may be summed: raw input text or an already numeric value.
#[derive(Debug, Clone, PartialEq)]
pub enum Numeric {
    Text(String),
    Number(f64),
}

impl Numeric {
    pub fn value_or_zero(&self) -> f64 {
        match self {
            Numeric::Text(s) => parse_decimal_or_zero(s),
            Numeric::Number(n) => crate::utils::number_or_zero(*n),
        }
    }
}

impl From<f64> for Numeric {
    fn from(n: f64) -> Self {
        Numeric::Number(n)
    }
}

impl From<&str> for Numeric {
    fn from(s: &str) -> Self {
        Numeric::Text(s.to_string())
    }
}

impl From<String> for Numeric {
    fn from(s: String) -> Self {
        Numeric::Text(s)
    }
}

/// Sums `values`; entries that do not parse contribute zero.
pub fn calculate_total<I>(values: I) -> f64
where
    I: IntoIterator,
    I::Item: Into<Numeric>,
{
    values
        .into_iter()
        .map(|v| v.into().value_or_zero())
        .fold(0.0, |acc, v| acc + v)
}

/// Renders `amount` in the default locale and currency (ar-EG, EGP).
pub fn format_currency(amount: f64) -> String {
    Formatter::default().format_currency(amount)
}

/// Grouped-digit rendering in the default locale.
pub fn format_number(number: f64) -> String {
    Formatter::default().format_number(number)
}

/// Short date in the default locale; unparseable input renders as `""`.
pub fn format_date(date: impl Into<DateLike>) -> String {
    Formatter::default().format_date(&date.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en() -> Formatter {
        Formatter::new("en-US", "USD").unwrap()
    }

    #[test]
    fn test_calculate_total_skips_unparseable() {
        assert_eq!(calculate_total(["10", "abc", "5.5"]), 15.5);
        assert_eq!(calculate_total(Vec::<f64>::new()), 0.0);
        assert_eq!(calculate_total([2.5, f64::NAN, 1.0]), 3.5);
    }

    #[test]
    fn test_calculate_total_mixed_inputs() {
        let values = vec![Numeric::from("3"), Numeric::from(4.0), Numeric::from(String::from("x1"))];
        assert_eq!(calculate_total(values), 7.0);
    }

    #[test]
    fn test_format_currency_en_us() {
        let f = en();
        assert_eq!(f.format_currency(25.0), "$25.00");
        assert_eq!(f.format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(f.format_currency(-2.5), "-$2.50");
        assert_eq!(f.format_currency(-0.001), "$0.00");
        assert_eq!(f.format_currency(f64::NAN), "$NaN");
    }

    #[test]
    fn test_format_currency_rounds_shortest_decimal() {
        let f = en();
        assert_eq!(f.format_currency(1.005), "$1.01");
        assert_eq!(f.format_currency(2.675), "$2.68");
        assert_eq!(f.format_currency(-2.675), "-$2.68");
        assert_eq!(f.format_currency(1e21), "$1,000,000,000,000,000,000,000.00");
        assert_eq!(f.format_currency(f64::NEG_INFINITY), "-$∞");
    }

    #[test]
    fn test_format_currency_foreign_code() {
        let f = Formatter::new("en-US", "egp").unwrap();
        assert_eq!(f.currency(), "EGP");
        assert_eq!(f.format_currency(27.5), "EGP\u{a0}27.50");
    }

    #[test]
    fn test_format_currency_arabic_default() {
        assert_eq!(format_currency(27.5), "\u{200f}٢٧٫٥٠\u{a0}ج.م.\u{200f}");
        assert_eq!(format_currency(1000.0), "\u{200f}١٬٠٠٠٫٠٠\u{a0}ج.م.\u{200f}");
    }

    #[test]
    fn test_format_number() {
        let f = en();
        assert_eq!(f.format_number(1234.5), "1,234.5");
        assert_eq!(f.format_number(0.1 + 0.2), "0.3");
        assert_eq!(f.format_number(-1000.0), "-1,000");
        assert_eq!(f.format_number(f64::INFINITY), "∞");
        assert_eq!(format_number(1234.5), "١٬٢٣٤٫٥");
    }

    #[test]
    fn test_format_date() {
        let f = en();
        let day = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(f.format_date(&day.into()), "3/7/2024");
        assert_eq!(f.format_date(&"2024-03-07".into()), "3/7/2024");
        assert_eq!(f.format_date(&"2024-03-07T23:10:00Z".into()), "3/7/2024");
        assert_eq!(format_date("2024-03-07"), "٧\u{200f}/٣\u{200f}/٢٠٢٤");
    }

    #[test]
    fn test_format_date_unparseable_is_empty() {
        assert_eq!(en().format_date(&"not a date".into()), "");
        assert_eq!(format_date("2024-13-40"), "");
    }

    #[test]
    fn test_unknown_locale_and_bad_currency() {
        assert_eq!(
            Formatter::new("fr-FR", "EUR"),
            Err(FormatError::UnknownLocale("fr-FR".to_string()))
        );
        assert!(matches!(Formatter::new("en-US", "DOLLARS"), Err(FormatError::InvalidCurrency(_))));
    }
}
