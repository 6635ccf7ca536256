use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// Wire form of a date field
static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

pub(crate) const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) fn matches_iso_shape(date: &str) -> bool {
    ISO_DATE.is_match(date)
}

/// Parse a `YYYY-MM-DD` string into a calendar date.
///
/// The parsed date must serialize back to the exact input, so impossible
/// days such as `2023-02-30` never roll over into the next month.
pub(crate) fn parse_calendar_date(date: &str) -> Option<NaiveDate> {
    if !matches_iso_shape(date) {
        return None;
    }
    let parsed = NaiveDate::parse_from_str(date, ISO_DATE_FORMAT).ok()?;
    (parsed.format(ISO_DATE_FORMAT).to_string() == date).then_some(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_calendar_date() {
        assert_eq!(
            parse_calendar_date("2024-02-29"),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(parse_calendar_date("2023-02-29"), None);
        assert_eq!(parse_calendar_date("2024-13-01"), None);
        assert_eq!(parse_calendar_date("2024-1-01"), None);
        assert_eq!(parse_calendar_date("2024-01-01T00:00"), None);
    }

    #[test]
    fn test_shape_is_ascii_only() {
        // Arabic-Indic digits are Unicode \d but not part of the wire form
        assert!(!matches_iso_shape("٢٠٢٤-01-01"));
        assert!(matches_iso_shape("0000-00-00"));
    }
}
