//! Event dates in `yyyy-MMM-dd` form (e.g. `2016-Jul-28`)

use chrono::NaiveDate;
use thiserror::Error;

/// chrono pattern for `yyyy-MMM-dd`
pub const DATE_FORMAT: &str = "%Y-%b-%d";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid date '{input}': expected yyyy-MMM-dd (e.g. 2016-Jul-28)")]
pub struct DateError {
    pub input: String,
}

/// Parses a `yyyy-MMM-dd` date. Month names match case-insensitively.
///
/// The shape is checked before chrono sees the input: a four-digit year, a
/// three-letter month abbreviation and a two-digit day. Surrounding
/// whitespace and full month names (`2016-July-28`) are rejected.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateError> {
    let invalid = || DateError {
        input: input.to_string(),
    };

    if !has_date_shape(input) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| invalid())
}

fn has_date_shape(input: &str) -> bool {
    let mut parts = input.split('-');
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    year.len() == 4
        && year.bytes().all(|b| b.is_ascii_digit())
        && month.len() == 3
        && month.bytes().all(|b| b.is_ascii_alphabetic())
        && day.len() == 2
        && day.bytes().all(|b| b.is_ascii_digit())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Today's local date, formatted for use as an event date
pub fn today() -> String {
    format_date(chrono::Local::now().date_naive())
}
