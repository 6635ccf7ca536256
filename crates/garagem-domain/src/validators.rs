//! Predicates gating form input

use chrono::{Datelike, Local, NaiveDate, Utc};

use crate::dates::parse_calendar_date;
use crate::plate::PlateKind;
use crate::value::FieldValue;

/// True iff a normalized plate is a legacy or Mercosul plate
pub fn is_valid_plate_format(normalized: &str) -> bool {
    PlateKind::detect(normalized).is_some()
}

/// True iff `date` is `YYYY-MM-DD` and names a real calendar day
pub fn is_valid_date_string(date: &str) -> bool {
    parse_calendar_date(date).is_some()
}

/// The current calendar day in UTC, the reference for "today" everywhere
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// True iff `date` is valid and falls on today (UTC) or later
pub fn is_today_or_future(date: &str) -> bool {
    is_on_or_after(date, today_utc())
}

/// True iff `date` is valid and is not before `today`
pub fn is_on_or_after(date: &str, today: NaiveDate) -> bool {
    parse_calendar_date(date).is_some_and(|selected| selected >= today)
}

/// Accepted range of vehicle model years
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    /// Oldest accepted year
    pub min_year: i32,
    /// How many years past the current one are accepted
    pub max_year_offset: i32,
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            min_year: 1900,
            max_year_offset: 1,
        }
    }
}

impl YearRange {
    pub fn new(min_year: i32, max_year_offset: i32) -> Self {
        Self {
            min_year,
            max_year_offset,
        }
    }

    pub fn max_year(&self, current_year: i32) -> i32 {
        current_year + self.max_year_offset
    }

    pub fn contains(&self, year: i64, current_year: i32) -> bool {
        year >= i64::from(self.min_year) && year <= i64::from(self.max_year(current_year))
    }
}

/// Validate a vehicle year against the default range (1900 to next year)
pub fn is_valid_vehicle_year<'a>(year: impl Into<FieldValue<'a>>) -> bool {
    is_valid_vehicle_year_in(year, YearRange::default(), Local::now().year())
}

/// Validate a vehicle year against an explicit range and current year.
///
/// The value must be present and coerce to an integer; "2000" and 2000.0 are
/// accepted, "2000.5" and "abc" are not.
pub fn is_valid_vehicle_year_in<'a>(
    year: impl Into<FieldValue<'a>>,
    range: YearRange,
    current_year: i32,
) -> bool {
    let number = match year.into() {
        FieldValue::Null | FieldValue::Text("") => return false,
        FieldValue::Number(n) => n,
        FieldValue::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                match trimmed.parse::<f64>() {
                    Ok(n) => n,
                    Err(_) => return false,
                }
            }
        }
    };

    if !number.is_finite() || number.fract() != 0.0 {
        return false;
    }

    range.contains(number as i64, current_year)
}
