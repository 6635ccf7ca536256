//! Domain layer for garagem: record models plus the pure formatters and
//! validators applied to form input before it is persisted.

pub mod formatters;
pub mod model;
pub mod plate;
pub mod validators;
pub mod value;

mod dates;

pub use formatters::{
    format_currency_brl, format_date_display, format_plate_for_display, normalize_plate,
    parse_brl_decimal, INVALID_DATE,
};
pub use model::{Maintenance, Vehicle};
pub use plate::PlateKind;
pub use validators::{
    is_on_or_after, is_today_or_future, is_valid_date_string, is_valid_plate_format,
    is_valid_vehicle_year, is_valid_vehicle_year_in, today_utc, YearRange,
};
pub use value::FieldValue;
