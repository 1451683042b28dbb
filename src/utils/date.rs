//! Calendar-date utility functions
//!
//! This module provides functions for parsing, formatting, and validating the
//! `YYYY-MM-DD` date strings exchanged with the SistemaPerito back-end, and
//! for computing the inclusive day counts used by the report forms.

use chrono::{Datelike, NaiveDate};

/// Standard date format exchanged with the back-end
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
///
/// A `NaiveDate` carries no timezone, so a parsed date can never shift to the
/// previous or next calendar day when formatted back.
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// * `Result<NaiveDate, chrono::ParseError>` - Parsed date or parse error
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT)
}

/// Format a date string in Spanish long form
///
/// `"2025-03-12"` becomes `"12 de marzo de 2025"`. Malformed input is
/// returned unchanged rather than signalling an error.
pub fn format_long_date(date_str: &str) -> String {
    let date = match parse_date(date_str) {
        Ok(date) => date,
        Err(_) => {
            log::warn!("format_long_date: unparseable date '{}'", date_str);
            return date_str.to_string();
        }
    };

    format!("{} de {} de {}", date.day(), month_name(date.month()), date.year())
}

/// Calculate the inclusive number of days between two dates
///
/// Identical start and end dates count as 1 day, not 0. If `end_str` precedes
/// `start_str` the result is zero or negative; the arithmetic is not guarded.
/// Malformed input yields 0.
///
/// # Arguments
/// * `start_str` - Start date in YYYY-MM-DD format
/// * `end_str` - End date in YYYY-MM-DD format
pub fn days_between(start_str: &str, end_str: &str) -> i64 {
    match (parse_date(start_str), parse_date(end_str)) {
        (Ok(start), Ok(end)) => (end - start).num_days() + 1,
        _ => {
            log::warn!("days_between: unparseable range '{}'..'{}'", start_str, end_str);
            0
        }
    }
}

/// Check that a string is a strictly formatted, real calendar date
///
/// The string must match the exact `YYYY-MM-DD` shape (zero-padded, ASCII
/// digits) and name a date that exists on the calendar: `2025-02-30` and
/// `2025-13-01` are both rejected.
pub fn is_valid_date(date_str: &str) -> bool {
    has_date_shape(date_str) && parse_date(date_str).is_ok()
}

/// Check that `end_str` is on or after `start_str`
///
/// Malformed input on either side yields false.
pub fn is_date_range_valid(start_str: &str, end_str: &str) -> bool {
    match (parse_date(start_str), parse_date(end_str)) {
        (Ok(start), Ok(end)) => end >= start,
        _ => {
            log::warn!("is_date_range_valid: unparseable range '{}'..'{}'", start_str, end_str);
            false
        }
    }
}

/// Check the exact `YYYY-MM-DD` shape: chrono accepts unpadded fields, so the
/// strict pattern is enforced separately
fn has_date_shape(date_str: &str) -> bool {
    let bytes = date_str.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit())
}

/// Get the lowercase Spanish month name
fn month_name(month: u32) -> &'static str {
    match month {
        1 => "enero",
        2 => "febrero",
        3 => "marzo",
        4 => "abril",
        5 => "mayo",
        6 => "junio",
        7 => "julio",
        8 => "agosto",
        9 => "septiembre",
        10 => "octubre",
        11 => "noviembre",
        _ => "diciembre",
    }
}
