//! Date coercion: the single choke point that turns loosely-typed inputs
//! into canonical `DateTime<FixedOffset>` values.
//!
//! Every operation that accepts a timestamp or date string funnels through
//! [`to_date`]; none of them re-implement the classification rules.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::error::{DateError, Result};

/// A flexible date input: epoch seconds, date-like text, or an
/// already-canonical date value.
///
/// Functions take `impl Into<DateInput>` so callers can pass an `i64`, a
/// `&str`, or any chrono `DateTime` directly.
#[derive(Debug, Clone, Copy)]
pub enum DateInput<'a> {
    /// Whole seconds since the Unix epoch.
    Timestamp(i64),
    /// Date text in one of the recognized layouts (see [`to_date`]).
    Text(&'a str),
    /// A canonical date value, passed through unchanged.
    Value(DateTime<FixedOffset>),
}

impl From<i64> for DateInput<'_> {
    fn from(secs: i64) -> Self {
        DateInput::Timestamp(secs)
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(text: &'a str) -> Self {
        DateInput::Text(text)
    }
}

impl From<DateTime<FixedOffset>> for DateInput<'_> {
    fn from(value: DateTime<FixedOffset>) -> Self {
        DateInput::Value(value)
    }
}

impl From<DateTime<Utc>> for DateInput<'_> {
    fn from(value: DateTime<Utc>) -> Self {
        DateInput::Value(value.fixed_offset())
    }
}

impl From<DateTime<Local>> for DateInput<'_> {
    fn from(value: DateTime<Local>) -> Self {
        DateInput::Value(value.fixed_offset())
    }
}

/// Convert a flexible input into a canonical date.
///
/// Numeric input is whole seconds since the epoch. Canonical values pass
/// through unchanged. Text is classified strictly by character length, in
/// priority order:
///
/// | Length | Layout |
/// |---|---|
/// | 10 | `YYYY-MM-DD` (midnight assumed) |
/// | 16 | `YYYY-MM-DD HH:MM` (space or `T`) |
/// | 19 | `YYYY-MM-DD HH:MM:SS` (space or `T`) |
/// | >19 with `.` at position 19 | fractional seconds, truncated to 19 |
/// | 24 | offset-qualified, parsed as a complete instant |
///
/// Timezone-less layouts are interpreted as UTC when `utc` is true, and in
/// host-local time otherwise; the returned value keeps the offset it was
/// interpreted with. Anything else fails with
/// [`DateError::InvalidInput`] naming the offending string.
pub fn to_date<'a>(d: impl Into<DateInput<'a>>, utc: bool) -> Result<DateTime<FixedOffset>> {
    match d.into() {
        DateInput::Timestamp(secs) => Utc
            .timestamp_opt(secs, 0)
            .single()
            .map(|dt| dt.fixed_offset())
            .ok_or_else(|| DateError::InvalidInput(format!("timestamp out of range: {secs}"))),
        DateInput::Value(value) => Ok(value),
        DateInput::Text(text) => from_text(text, utc),
    }
}

/// Classify and parse date text. See [`to_date`] for the layout table.
fn from_text(text: &str, utc: bool) -> Result<DateTime<FixedOffset>> {
    let invalid = || DateError::InvalidInput(text.to_string());

    let naive = match text.len() {
        10 => {
            log::trace!("parsing {text:?} as date-only");
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .map_err(|_| invalid())?
                .and_time(NaiveTime::MIN)
        }
        16 => {
            log::trace!("parsing {text:?} as date + minutes");
            NaiveDateTime::parse_from_str(&text.replacen(' ', "T", 1), "%Y-%m-%dT%H:%M")
                .map_err(|_| invalid())?
        }
        19 => {
            log::trace!("parsing {text:?} as date + seconds");
            parse_seconds(text).ok_or_else(invalid)?
        }
        // Fractional seconds: truncate and fall back to the 19-char rule.
        // Checked before the 24-char rule so `....SS.mmmZ` strings land here.
        len if len > 19 && text.as_bytes()[19] == b'.' => {
            log::trace!("parsing {text:?} as fractional seconds");
            parse_seconds(&text[..19]).ok_or_else(invalid)?
        }
        24 => {
            log::trace!("parsing {text:?} as offset-qualified instant");
            return DateTime::parse_from_rfc3339(text)
                .or_else(|_| DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%z"))
                .map_err(|_| invalid());
        }
        _ => return Err(invalid()),
    };

    if utc {
        Ok(Utc.from_utc_datetime(&naive).fixed_offset())
    } else {
        Ok(localize(naive))
    }
}

fn parse_seconds(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(&text.replacen(' ', "T", 1), "%Y-%m-%dT%H:%M:%S").ok()
}

/// Anchor a naive datetime in the host-local timezone.
///
/// Ambiguous or nonexistent local times (DST transitions) fall back to the
/// UTC interpretation rather than failing.
pub(crate) fn localize(naive: NaiveDateTime) -> DateTime<FixedOffset> {
    Local
        .from_local_datetime(&naive)
        .single()
        .unwrap_or_else(|| Local.from_utc_datetime(&naive))
        .fixed_offset()
}
