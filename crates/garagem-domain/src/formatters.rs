//! Display formatters for plates, currency and dates
//!
//! Every formatter degrades to a sentinel (`""` or [`INVALID_DATE`]) instead of
//! failing, so callers can render the result directly.

use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

use crate::dates::{matches_iso_shape, parse_calendar_date};
use crate::plate::PlateKind;
use crate::value::FieldValue;

/// Rendered in place of a date that cannot be displayed
pub const INVALID_DATE: &str = "Data inválida";

/// Separators users type inside a plate
static PLATE_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-\s]").unwrap());

/// Leading numeric prefix accepted by a lenient float parse
static FLOAT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?").unwrap()
});

/// Normalize a plate typed by the user: trimmed, upper-cased, with spaces and
/// hyphens removed. Empty input yields an empty string.
///
/// ```
/// use garagem_domain::normalize_plate;
/// assert_eq!(normalize_plate(" abc-1d23 "), "ABC1D23");
/// ```
pub fn normalize_plate(input: &str) -> String {
    let upper = input.trim().to_uppercase();
    PLATE_SEPARATORS.replace_all(&upper, "").into_owned()
}

/// Format a normalized plate for display.
///
/// Legacy plates get a hyphen after the third character, Mercosul plates are
/// returned as-is. Anything else is returned unchanged and logged.
pub fn format_plate_for_display(normalized: &str) -> String {
    if normalized.is_empty() {
        return String::new();
    }

    match PlateKind::detect(normalized) {
        Some(PlateKind::Legacy) => format!("{}-{}", &normalized[..3], &normalized[3..]),
        Some(PlateKind::Mercosul) => normalized.to_string(),
        None => {
            warn!(plate = normalized, "formatting plate with unknown pattern");
            normalized.to_string()
        }
    }
}

/// Parse a number written with Brazilian separators ("1.234,56").
///
/// Dots are dropped as thousands separators and the first comma becomes the
/// decimal point. Like a lenient float parse, trailing garbage after a numeric
/// prefix is ignored ("12,5kg" -> 12.5).
pub fn parse_brl_decimal(text: &str) -> Option<f64> {
    let converted = text.replace('.', "").replacen(',', ".", 1);
    let trimmed = converted.trim_start();
    let prefix = FLOAT_PREFIX.find(trimmed)?;
    prefix.as_str().parse::<f64>().ok()
}

/// Format a monetary value as Brazilian reais ("R$ 1.234,56").
///
/// Accepts a number or text in Brazilian notation. Null, empty or
/// non-numeric values yield an empty string.
pub fn format_currency_brl<'a>(value: impl Into<FieldValue<'a>>) -> String {
    let amount = match value.into() {
        FieldValue::Null | FieldValue::Text("") => return String::new(),
        FieldValue::Number(n) => n,
        FieldValue::Text(text) => match parse_brl_decimal(text) {
            Some(n) => n,
            None => return String::new(),
        },
    };

    if !amount.is_finite() {
        return String::new();
    }

    format!("R$ {}", format_pt_br(amount))
}

/// Group a number with pt-BR separators and exactly two fraction digits.
///
/// Rounding works on the shortest decimal form of the value with halves away
/// from zero, so 10.125 becomes "10,13" rather than the binary "10,12".
fn format_pt_br(amount: f64) -> String {
    let (integer, fraction) = round_to_cents(amount.abs());

    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}{},{}", sign, grouped, fraction)
}

/// Split a non-negative finite value into integer digits and two rounded
/// fraction digits
fn round_to_cents(value: f64) -> (String, String) {
    // `Display` for f64 is the shortest round-trip form, never exponential
    let repr = value.to_string();
    let (integer, fraction) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = integer.bytes().collect();
    let mut kept = fraction.bytes().chain(std::iter::repeat(b'0'));
    digits.extend(kept.by_ref().take(2));
    let round_up = kept.next().is_some_and(|next| next >= b'5');

    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - 2;
    let fraction = String::from_utf8_lossy(&digits[split..]).into_owned();
    let integer = String::from_utf8_lossy(&digits[..split]).into_owned();
    (integer, fraction)
}

/// Format a `YYYY-MM-DD` date as `DD/MM/YYYY`.
///
/// Calendar fields are read directly from the date, never through a local
/// timezone, so the day cannot drift. Malformed or impossible dates yield
/// [`INVALID_DATE`].
pub fn format_date_display(date: &str) -> String {
    if !matches_iso_shape(date) {
        return INVALID_DATE.to_string();
    }

    match parse_calendar_date(date) {
        Some(parsed) => parsed.format("%d/%m/%Y").to_string(),
        None => {
            debug!(date, "date has the right shape but is not a calendar date");
            INVALID_DATE.to_string()
        }
    }
}
