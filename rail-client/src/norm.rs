//! Normalizers for the API's ad-hoc textual field encodings.
//!
//! The railwayapi.com server returns timestamps as bare "HH:MM" clock
//! strings, dates in two different textual layouts depending on the
//! endpoint, elapsed times as "H:MM", and booleans as "Y"/"N". These
//! functions convert one raw string into the matching chrono value,
//! tolerating absence: an empty (or wrong-length) source string means the
//! API simply had no data for that field.
//!
//! All functions here are pure; callers attach field names when turning an
//! [`InvalidValue`] into a decode error.

use chrono::{Duration, NaiveDate, NaiveTime};

/// Error returned when a present field value does not match its encoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value: {reason}")]
pub struct InvalidValue {
    reason: &'static str,
}

impl InvalidValue {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Which textual date layout an endpoint uses.
///
/// The layout is decided by the decoder for each field, never detected from
/// the string itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLayout {
    /// Day-month-year with dashes, e.g. "05-04-2018" or "5-4-2018".
    ///
    /// Used by the PNR, fare, seat-availability and rescheduled endpoints.
    /// Both zero-padded and unpadded day/month digits occur in responses.
    Numeric,
    /// Day, abbreviated month name, year, e.g. "5 Apr 2018".
    ///
    /// Used by the live-status, route and cancelled-trains endpoints.
    AbbrevMonth,
}

impl DateLayout {
    fn pattern(self) -> &'static str {
        match self {
            DateLayout::Numeric => "%d-%m-%Y",
            DateLayout::AbbrevMonth => "%d %b %Y",
        }
    }
}

/// Parse a "HH:MM" clock time with no associated date.
///
/// Any string that is not exactly 5 characters (including the empty string
/// the API sends for stops a train has not reached yet) is treated as
/// absent, not as an error. A 5-character string must parse strictly as a
/// 24-hour time.
pub fn clock_time(s: &str) -> Result<Option<NaiveTime>, InvalidValue> {
    if s.len() != 5 {
        return Ok(None);
    }
    NaiveTime::parse_from_str(s, "%H:%M")
        .map(Some)
        .map_err(|_| InvalidValue::new("expected HH:MM clock time"))
}

/// Parse a calendar date against the given layout.
///
/// The empty string is treated as absent; any other value must match the
/// layout exactly.
pub fn calendar_date(s: &str, layout: DateLayout) -> Result<Option<NaiveDate>, InvalidValue> {
    if s.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(s, layout.pattern())
        .map(Some)
        .map_err(|_| match layout {
            DateLayout::Numeric => InvalidValue::new("expected DD-MM-YYYY date"),
            DateLayout::AbbrevMonth => InvalidValue::new("expected 'D Mon YYYY' date"),
        })
}

/// Parse an "H:MM" elapsed time, e.g. a journey duration of "02:30".
///
/// The colon here separates hours from minutes of a *duration*, unlike
/// [`clock_time`] where it separates components of a time of day. Strings
/// that are not exactly 5 characters are treated as absent. Minutes beyond
/// 59 are accepted and carried into the hour count, matching the upstream
/// producer's loose format.
pub fn travel_duration(s: &str) -> Result<Option<Duration>, InvalidValue> {
    if s.len() != 5 {
        return Ok(None);
    }
    let (hours, minutes) = s
        .split_once(':')
        .ok_or_else(|| InvalidValue::new("expected H:MM duration"))?;
    let hours: i64 = hours
        .parse()
        .map_err(|_| InvalidValue::new("invalid duration hours"))?;
    let minutes: i64 = minutes
        .parse()
        .map_err(|_| InvalidValue::new("invalid duration minutes"))?;
    if hours < 0 || minutes < 0 {
        return Err(InvalidValue::new("duration must not be negative"));
    }
    Ok(Some(Duration::minutes(hours * 60 + minutes)))
}

/// Normalize a "Y"/"N" flag. Total: anything other than "Y" is false.
pub fn yes_no(s: &str) -> bool {
    s == "Y"
}
