//! Calendar arithmetic: ages, day increments, today checks, and timeframe
//! windows.

use chrono::{
    DateTime, Datelike, Days, Duration, FixedOffset, Local, Months, NaiveDate, NaiveTime,
    TimeZone, Utc,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::convert::{localize, to_date, DateInput};
use crate::error::{DateError, Result};
use crate::format::iso;

/// Current age in whole years for a date of birth.
///
/// Deliberately simpler than [`to_date`]: numeric input is epoch seconds,
/// 10-character text is taken as local midnight, and anything else goes to
/// the general instant parsers. The year count is derived by treating the
/// millisecond delta between now and the birth date as itself a point in
/// time since the epoch, so it is not calendar-aware: it does not check
/// whether the birthday has passed yet this year. Callers depend on that
/// output; keep it.
pub fn age<'a>(d: impl Into<DateInput<'a>>) -> Result<u32> {
    let birth = match d.into() {
        DateInput::Timestamp(secs) => Utc
            .timestamp_opt(secs, 0)
            .single()
            .map(|dt| dt.fixed_offset())
            .ok_or_else(|| DateError::InvalidInput(format!("timestamp out of range: {secs}")))?,
        DateInput::Value(value) => value,
        DateInput::Text(text) => {
            if text.len() == 10 {
                let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")
                    .map_err(|_| DateError::InvalidInput(text.to_string()))?;
                localize(date.and_time(NaiveTime::MIN))
            } else {
                DateTime::parse_from_rfc3339(text)
                    .ok()
                    .or_else(|| {
                        chrono::NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
                            .ok()
                            .map(localize)
                    })
                    .ok_or_else(|| DateError::InvalidInput(text.to_string()))?
            }
        }
    };

    let delta_ms = Utc::now().timestamp_millis() - birth.timestamp_millis();
    let as_instant = Utc
        .timestamp_millis_opt(delta_ms)
        .single()
        .ok_or_else(|| DateError::InvalidArgument(format!("birth date out of range: {birth}")))?;

    Ok(as_instant.year().abs_diff(1970))
}

/// A date advanced (or, with negative `days`, moved back) by whole calendar
/// days, with native month/year rollover.
///
/// `from` defaults to the current moment, anchored per the `utc` flag.
pub fn increment<'a>(
    days: i64,
    from: Option<DateInput<'a>>,
    utc: bool,
) -> Result<DateTime<FixedOffset>> {
    let base = match from {
        Some(d) => to_date(d, utc)?,
        None if utc => Utc::now().fixed_offset(),
        None => Local::now().fixed_offset(),
    };

    let stepped = if days >= 0 {
        base.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        base.checked_sub_days(Days::new(days.unsigned_abs()))
    };

    stepped.ok_or_else(|| DateError::InvalidArgument(format!("increment out of range: {days} days")))
}

/// Whether the given date falls on the current local day.
pub fn is_today<'a>(d: impl Into<DateInput<'a>>, utc: bool) -> Result<bool> {
    let local = to_date(d, utc)?.with_timezone(&Local);
    let now = Local::now();

    Ok(local.day() == now.day() && local.month() == now.month() && local.year() == now.year())
}

/// The unit a [`timeframe`] counts back by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeframeUnit {
    #[serde(alias = "days")]
    Day,
    #[serde(alias = "weeks")]
    Week,
    #[serde(alias = "months")]
    Month,
    #[serde(alias = "years")]
    Year,
}

impl FromStr for TimeframeUnit {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "day" | "days" => Ok(TimeframeUnit::Day),
            "week" | "weeks" => Ok(TimeframeUnit::Week),
            "month" | "months" => Ok(TimeframeUnit::Month),
            "year" | "years" => Ok(TimeframeUnit::Year),
            _ => Err(DateError::InvalidArgument(format!(
                "timeframe type must be one of 'day', 'week', 'month', or 'year', received: {s}"
            ))),
        }
    }
}

/// How [`timeframe`] renders its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeframeFormat {
    #[default]
    Date,
    DateTime,
    Timestamp,
}

impl FromStr for TimeframeFormat {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "date" => Ok(TimeframeFormat::Date),
            "datetime" => Ok(TimeframeFormat::DateTime),
            "timestamp" => Ok(TimeframeFormat::Timestamp),
            _ => Err(DateError::InvalidArgument(format!(
                "timeframe format must be one of 'date', 'datetime', or 'timestamp', received: {s}"
            ))),
        }
    }
}

/// A `[start, end]` pair produced by [`timeframe`], rendered per the
/// requested [`TimeframeFormat`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeframeBounds {
    Date([String; 2]),
    DateTime([String; 2]),
    Timestamp([i64; 2]),
}

/// The window reaching back `count` units from today.
///
/// The end bound is today at 23:59:59 local, the start bound today at
/// 00:00:00 local minus `count` units: days and weeks as whole days,
/// months and years as calendar-field subtraction (clamping to the end of
/// shorter months).
pub fn timeframe(
    count: u32,
    unit: TimeframeUnit,
    format: TimeframeFormat,
) -> Result<TimeframeBounds> {
    let today_start = Local::now().date_naive().and_time(NaiveTime::MIN);
    let today_end = today_start + Duration::seconds(86_399);

    let start_naive = match unit {
        TimeframeUnit::Day => today_start.checked_sub_days(Days::new(u64::from(count))),
        TimeframeUnit::Week => today_start.checked_sub_days(Days::new(u64::from(count) * 7)),
        TimeframeUnit::Month => today_start.checked_sub_months(Months::new(count)),
        TimeframeUnit::Year => count
            .checked_mul(12)
            .and_then(|months| today_start.checked_sub_months(Months::new(months))),
    }
    .ok_or_else(|| DateError::InvalidArgument(format!("timeframe count out of range: {count}")))?;

    let start = localize(start_naive);
    let end = localize(today_end);
    log::debug!("timeframe of {count} {unit:?}: {start} .. {end}");

    match format {
        TimeframeFormat::Date => Ok(TimeframeBounds::Date([
            iso(start, false, true, false)?,
            iso(end, false, true, false)?,
        ])),
        TimeframeFormat::DateTime => Ok(TimeframeBounds::DateTime([
            iso(start, true, true, false)?,
            iso(end, true, true, false)?,
        ])),
        TimeframeFormat::Timestamp => {
            Ok(TimeframeBounds::Timestamp([start.timestamp(), end.timestamp()]))
        }
    }
}
