//! Day-of-week lookups relative to today.
//!
//! All three functions work from local midnight and do their arithmetic in
//! whole-day units, so behavior across a DST transition is the naive
//! fixed-offset result rather than a calendar-corrected one.

use chrono::{DateTime, Datelike, Duration, FixedOffset, Local, NaiveDateTime, NaiveTime};

use crate::convert::localize;
use crate::error::{DateError, Result};

/// Days 0 (Sunday) through 6 (Saturday).
const DOW_RANGE: std::ops::RangeInclusive<i32> = 0..=6;

/// Midnight today in the local timezone, as a naive datetime.
fn today_midnight() -> NaiveDateTime {
    Local::now().date_naive().and_time(NaiveTime::MIN)
}

fn check_dow(dow: i32, name: &str) -> Result<i64> {
    if !DOW_RANGE.contains(&dow) {
        return Err(DateError::InvalidArgument(format!(
            "{name} dow param can not be less than 0 or more than 6, received {dow}"
        )));
    }
    Ok(i64::from(dow))
}

fn check_weeks(weeks: u32, name: &str) -> Result<i64> {
    if weeks < 1 {
        return Err(DateError::InvalidArgument(format!(
            "{name} weeks param can not be less than 1"
        )));
    }
    Ok(i64::from(weeks))
}

/// Midnight of the requested day within the current Sunday-anchored week,
/// which may fall before or after today.
///
/// `dow` is 0 (Sunday) through 6 (Saturday).
pub fn day_of_week(dow: i32) -> Result<DateTime<FixedOffset>> {
    let dow = check_dow(dow, "day_of_week")?;

    let midnight = today_midnight();
    let diff = i64::from(midnight.weekday().num_days_from_sunday()) - dow;

    Ok(localize(midnight - Duration::days(diff)))
}

/// Midnight of the next occurrence of `dow` strictly after today, advanced
/// by `weeks - 1` additional full weeks.
pub fn next_day_of_week(dow: i32, weeks: u32) -> Result<DateTime<FixedOffset>> {
    let dow = check_dow(dow, "next_day_of_week")?;
    let weeks = check_weeks(weeks, "next_day_of_week")?;

    let midnight = today_midnight();
    let today = i64::from(midnight.weekday().num_days_from_sunday());
    let mut delta = (7 + dow - today) % 7;
    if delta == 0 {
        delta = 7;
    }

    Ok(localize(midnight + Duration::days(delta + 7 * (weeks - 1))))
}

/// Midnight of the previous occurrence of `dow` strictly before today,
/// moved back by `weeks - 1` additional full weeks.
pub fn previous_day_of_week(dow: i32, weeks: u32) -> Result<DateTime<FixedOffset>> {
    let dow = check_dow(dow, "previous_day_of_week")?;
    let weeks = check_weeks(weeks, "previous_day_of_week")?;

    let midnight = today_midnight();
    let today = i64::from(midnight.weekday().num_days_from_sunday());
    let mut delta = (7 + today - dow) % 7;
    if delta == 0 {
        delta = 7;
    }

    Ok(localize(midnight - Duration::days(delta + 7 * (weeks - 1))))
}
