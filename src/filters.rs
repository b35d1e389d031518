//! Money formatting and sign classification shared by every report view.
//!
//! Format: optional minus sign + currency symbol + absolute value with
//! thousands separators and exactly two decimals. Positive amounts carry no
//! `+` prefix.
//!
//! Color coding:
//! - Positive amounts (> 0): green
//! - Negative amounts (< 0): red
//! - Zero, NaN and infinities: neutral text color

use serde::{Deserialize, Serialize};

/// Locales that write `1.234,56` instead of `1,234.56`.
const COMMA_DECIMAL_LOCALES: &[&str] = &[
    "de-DE", "de-AT", "de-CH", "fr-FR", "fr-BE", "fr-CA", "es-ES", "es-AR", "it-IT", "pt-BR",
    "pt-PT", "nl-NL", "nl-BE", "pl-PL", "ru-RU", "tr-TR", "da-DK", "nb-NO", "sv-SE", "fi-FI",
];

/// Sign classification of a monetary figure, used to pick its display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountClass {
    Positive,
    Negative,
    Neutral,
}

impl AmountClass {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Positive => "text-green-600 dark:text-green-400",
            Self::Negative => "text-red-600 dark:text-red-400",
            Self::Neutral => "text-gray-900 dark:text-gray-100",
        }
    }
}

/// Classify an amount as strictly positive, strictly negative or neutral.
/// Non-finite input is neutral.
pub fn classify(amount: f64) -> AmountClass {
    let n = sanitize(amount);
    if n > 0.0 {
        AmountClass::Positive
    } else if n < 0.0 {
        AmountClass::Negative
    } else {
        AmountClass::Neutral
    }
}

/// Currency and locale used to render amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoneyFormat {
    pub currency: String,
    pub locale: String,
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self {
            currency: "USD".into(),
            locale: "en-US".into(),
        }
    }
}

impl MoneyFormat {
    pub fn new(currency: &str, locale: &str) -> Self {
        Self {
            currency: currency.to_string(),
            locale: locale.to_string(),
        }
    }

    /// Format with two decimals, e.g. `-$1,234.50`.
    ///
    /// Cents are exact up to 2^53; larger amounts keep their magnitude but
    /// lose precision in the low digits.
    pub fn format(&self, amount: f64) -> String {
        let n = sanitize(amount);
        let cents = (n.abs() * 100.0).round();
        let fractional = cents % 100.0;
        let whole = (cents - fractional) / 100.0;
        let (thousands_sep, decimal_sep) = locale_separators(&self.locale);

        format!(
            "{}{}{}{}{:02}",
            sign_prefix(n),
            currency_symbol(&self.currency),
            format_with_thousands(whole, thousands_sep),
            decimal_sep,
            fractional as u8
        )
    }

    /// Format rounded to whole units, e.g. `-$1,235`. Used for axis labels.
    pub fn format_whole(&self, amount: f64) -> String {
        let rounded = sanitize(amount).round();
        let (thousands_sep, _) = locale_separators(&self.locale);

        format!(
            "{}{}{}",
            sign_prefix(rounded),
            currency_symbol(&self.currency),
            format_with_thousands(rounded.abs(), thousands_sep)
        )
    }
}

/// Format an amount in US dollars, e.g. `$1,500.00` or `-$65.00`.
///
/// Never panics: NaN and infinities render as `$0.00`, and negative zero
/// renders like zero.
pub fn format_amount(amount: f64) -> String {
    MoneyFormat::default().format(amount)
}

/// Format an amount in whole US dollars, e.g. `$1,500` or `-$65`.
pub fn format_whole_amount(amount: f64) -> String {
    MoneyFormat::default().format_whole(amount)
}

/// Format a percentage change with one decimal and an explicit `+` for
/// increases. A missing percentage (zero baseline) renders as an em dash.
pub fn format_percent_delta(pct: Option<f64>) -> String {
    match pct {
        Some(p) if p.is_finite() => {
            // Sign follows the displayed value; + 0.0 folds -0.0 into 0.0
            let rounded = (p * 10.0).round() / 10.0 + 0.0;
            let sign = if rounded > 0.0 { "+" } else { "" };
            format!("{}{:.1}%", sign, rounded)
        }
        _ => "\u{2014}".to_string(),
    }
}

/// Format a share of a total, e.g. `12.5%`.
pub fn format_share(pct: f64) -> String {
    format!("{:.1}%", sanitize(pct))
}

/// Escape a user-supplied label for embedding in markup.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Treat NaN and infinities as zero.
pub(crate) fn sanitize(amount: f64) -> f64 {
    if amount.is_finite() {
        amount
    } else {
        0.0
    }
}

fn sign_prefix(n: f64) -> &'static str {
    if n < 0.0 {
        "-"
    } else {
        ""
    }
}

/// Get thousands and decimal separators based on locale.
fn locale_separators(locale: &str) -> (char, char) {
    if COMMA_DECIMAL_LOCALES.contains(&locale) {
        ('.', ',')
    } else {
        (',', '.')
    }
}

/// Format a non-negative whole number with thousands separators.
fn format_with_thousands(n: f64, sep: char) -> String {
    let digits = format!("{:.0}", n);
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }

    out
}

fn currency_symbol(currency: &str) -> &'static str {
    match currency.to_uppercase().as_str() {
        "EUR" => "\u{20ac}",
        "GBP" => "\u{00a3}",
        "JPY" | "CNY" => "\u{00a5}",
        "CAD" => "C$",
        "AUD" => "A$",
        "CHF" => "CHF\u{00a0}",
        "INR" => "\u{20b9}",
        "BRL" => "R$",
        "MXN" => "MX$",
        "SEK" | "NOK" | "DKK" => "kr\u{00a0}",
        "NZD" => "NZ$",
        _ => "$",
    }
}
