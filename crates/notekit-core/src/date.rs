//! ISO 8601 date parsing and rendering for date-named notes.
//!
//! Accepted forms (extended and basic):
//! - calendar dates: `YYYY-MM-DD`, `YYYYMMDD`
//! - week dates: `YYYY-Www-D`, `YYYYWwwD` (weekday 1 = Monday .. 7 = Sunday)

use chrono::{NaiveDate, Weekday};

/// Length of an extended ISO date (`YYYY-MM-DD` / `YYYY-Www-D`).
pub const EXTENDED_LEN: usize = 10;

/// Length of a basic ISO date (`YYYYMMDD` / `YYYYWwwD`).
pub const BASIC_LEN: usize = 8;

/// The canonical ISO separator.
pub const ISO_SEPARATOR: char = '-';

/// Parse an ISO calendar or week date.
///
/// Returns `None` for anything that is not one of the accepted forms or
/// that names a day that does not exist (month 13, February 30, week 54).
#[must_use]
pub fn parse_iso_date(input: &str) -> Option<NaiveDate> {
    if !input.is_ascii() {
        return None;
    }
    let bytes = input.as_bytes();

    match bytes.len() {
        EXTENDED_LEN if bytes[4] == b'-' && bytes[5] == b'W' && bytes[8] == b'-' => {
            week_date(&input[0..4], &input[6..8], &input[9..10])
        }
        EXTENDED_LEN if bytes[4] == b'-' && bytes[7] == b'-' => {
            calendar_date(&input[0..4], &input[5..7], &input[8..10])
        }
        BASIC_LEN if bytes[4] == b'W' => week_date(&input[0..4], &input[5..7], &input[7..8]),
        BASIC_LEN => calendar_date(&input[0..4], &input[4..6], &input[6..8]),
        _ => None,
    }
}

/// Whether the pieces of a split extended date have ISO-worthy lengths:
/// `{4}{2}{2}` for calendar dates or `{4}{3}{1}` for week dates.
#[must_use]
pub fn proper_length_parts(parts: &[&str]) -> bool {
    let [year, middle, last] = parts else {
        return false;
    };
    let lengths = (
        year.chars().count(),
        middle.chars().count(),
        last.chars().count(),
    );
    matches!(lengths, (4, 2, 2) | (4, 3, 1))
}

/// Render `date` as `YYYY-MM-DD` with `-` replaced by `separator`, or
/// removed entirely when there is no separator.
#[must_use]
pub fn format_iso_date(date: NaiveDate, separator: Option<char>) -> String {
    let iso = date.format("%Y-%m-%d").to_string();
    match separator {
        Some(ISO_SEPARATOR) => iso,
        Some(sep) => iso.replace(ISO_SEPARATOR, &sep.to_string()),
        None => iso.replace(ISO_SEPARATOR, ""),
    }
}

fn calendar_date(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let year = year_number(year)?;
    NaiveDate::from_ymd_opt(year, digits(month)?, digits(day)?)
}

fn week_date(year: &str, week: &str, weekday: &str) -> Option<NaiveDate> {
    let year = year_number(year)?;
    let weekday = match digits(weekday)? {
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        6 => Weekday::Sat,
        7 => Weekday::Sun,
        _ => return None,
    };
    NaiveDate::from_isoywd_opt(year, digits(week)?, weekday)
}

fn year_number(year: &str) -> Option<i32> {
    let year = i32::try_from(digits(year)?).ok()?;
    (year >= 1).then_some(year)
}

fn digits(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
