//! Formatting: fixed ISO-style strings, locale-aware rendering, and
//! elapsed-duration text.

use chrono::{Datelike, Local, Locale, Timelike};
use serde::{Deserialize, Serialize};

use crate::calendar::is_today;
use crate::convert::{to_date, DateInput};
use crate::error::{DateError, Result};

/// Month/weekday name length for locale-aware formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameStyle {
    #[default]
    Long,
    Short,
}

/// ISO-style date string suitable for storage and most systems.
///
/// `YYYY-MM-DD`, plus ` HH:MM:SS` when `time` is set. With `numbers_only`
/// every separator is dropped, yielding a pure digit string such as
/// `20250211092213`. Month, day, hour, minute, and second are always two
/// digits; the year is unpadded.
pub fn iso<'a>(
    d: impl Into<DateInput<'a>>,
    time: bool,
    utc: bool,
    numbers_only: bool,
) -> Result<String> {
    let d = to_date(d, utc)?;

    let mut out = if numbers_only {
        format!("{}{:02}{:02}", d.year(), d.month(), d.day())
    } else {
        format!("{}-{:02}-{:02}", d.year(), d.month(), d.day())
    };

    if time {
        if !numbers_only {
            out.push(' ');
        }
        let sep = if numbers_only { "" } else { ":" };
        out.push_str(&format!(
            "{:02}{sep}{:02}{sep}{:02}",
            d.hour(),
            d.minute(),
            d.second()
        ));
    }

    Ok(out)
}

/// Locale-formatted date, optionally with the locale's clock rendering.
///
/// Renders weekday, month, day, and year with long or short names per
/// `text`. The exact output is locale-data-dependent.
pub fn nice<'a>(
    d: impl Into<DateInput<'a>>,
    locale: &str,
    text: NameStyle,
    time: bool,
    utc: bool,
) -> Result<String> {
    let d = to_date(d, utc)?;
    let locale = resolve_locale(locale)?;

    let pattern = match text {
        NameStyle::Long => "%A, %B %-d, %Y",
        NameStyle::Short => "%a, %b %-d, %Y",
    };
    let date = d.format_localized(pattern, locale).to_string();

    if !time {
        return Ok(date);
    }

    let clock = d.format_localized("%X", locale).to_string();
    Ok(format!("{date} {clock}"))
}

/// Date text relative to the current day.
///
/// Today's dates render as plain zero-padded 24-hour `HH:MM`; anything else
/// renders as locale-formatted month and day, with `, YEAR` appended only
/// when the year differs from the current one.
pub fn relative<'a>(
    d: impl Into<DateInput<'a>>,
    locale: &str,
    text: NameStyle,
    utc: bool,
) -> Result<String> {
    let d = to_date(d, utc)?;

    if is_today(d, true)? {
        return Ok(format!("{:02}:{:02}", d.hour(), d.minute()));
    }

    let locale = resolve_locale(locale)?;
    let pattern = match text {
        NameStyle::Long => "%B %-d",
        NameStyle::Short => "%b %-d",
    };
    let mut out = d.format_localized(pattern, locale).to_string();

    if d.year() != Local::now().year() {
        out.push_str(&format!(", {}", d.year()));
    }

    Ok(out)
}

/// Formatting flags for [`elapsed`]. Each field has an explicit default;
/// partially-specified options deserialize against them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElapsedOptions {
    /// Show the minutes field.
    pub show_minutes: bool,
    /// Show the seconds field. Seconds can only appear when minutes do.
    pub show_seconds: bool,
    /// Show a literal `0` hours field when there are no hours.
    pub show_zero_hours: bool,
    /// Show a literal `0` minutes field when there are neither hours nor
    /// minutes.
    pub show_zero_minutes: bool,
}

impl Default for ElapsedOptions {
    fn default() -> Self {
        Self {
            show_minutes: true,
            show_seconds: true,
            show_zero_hours: false,
            show_zero_minutes: false,
        }
    }
}

/// Seconds as human-readable `H:MM:SS`-style text, fields selected by
/// [`ElapsedOptions`].
///
/// Output has no fixed field count: it is exactly as wide as the flags and
/// magnitude dictate. The three branches pad differently on purpose; keep
/// them separate.
pub fn elapsed(seconds: u64, opts: ElapsedOptions) -> String {
    let (h, r) = divmod(seconds, 3600);
    let (m, s) = divmod(r, 60);

    let mut fields: Vec<String> = Vec::new();

    if h > 0 {
        fields.push(h.to_string());
        if opts.show_minutes {
            fields.push(format!("{m:02}"));
            if opts.show_seconds {
                fields.push(format!("{s:02}"));
            }
        }
    } else if m > 0 {
        if opts.show_zero_hours {
            fields.push("0".to_string());
        }
        if opts.show_minutes {
            if opts.show_zero_hours {
                fields.push(format!("{m:02}"));
            } else {
                fields.push(m.to_string());
            }
            if opts.show_seconds {
                fields.push(format!("{s:02}"));
            }
        }
    } else {
        if opts.show_zero_hours {
            fields.push("0".to_string());
            fields.push("00".to_string());
        } else if opts.show_zero_minutes {
            fields.push("0".to_string());
        }
        if opts.show_minutes && opts.show_seconds {
            if opts.show_zero_hours || opts.show_zero_minutes {
                fields.push(format!("{s:02}"));
            } else {
                fields.push(s.to_string());
            }
        }
    }

    fields.join(":")
}

/// Truncating quotient and remainder. All callers pass non-negative values,
/// so floor and truncation coincide.
fn divmod(dividend: u64, divisor: u64) -> (u64, u64) {
    (dividend / divisor, dividend % divisor)
}

/// Map a BCP-47 identifier such as `en-US` onto the chrono locale data.
fn resolve_locale(locale: &str) -> Result<Locale> {
    Locale::try_from(locale.replace('-', "_").as_str())
        .map_err(|_| DateError::InvalidArgument(format!("unknown locale: {locale}")))
}
