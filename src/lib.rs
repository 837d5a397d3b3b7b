//! Datewise - date and time utility functions
//!
//! This library provides a small set of pure helpers for working with
//! dates: coercing loosely-typed inputs (epoch seconds, common date-string
//! layouts, chrono values) into canonical dates, calendar arithmetic
//! (day-of-week lookups, increments, ages, timeframe windows), and
//! formatting for storage or display, including locale-aware and
//! relative-to-today strings.
//!
//! # Modules
//!
//! * [`convert`] - Coercion of flexible inputs into canonical dates
//! * [`weekday`] - Day-of-week lookups relative to today
//! * [`calendar`] - Ages, increments, today checks, and timeframes
//! * [`format`] - ISO, locale-aware, relative, and elapsed formatting
//! * [`clock`] - Current-timestamp access
//! * [`error`] - Error types
//!
//! Apart from reading the host clock, every function is a deterministic
//! transform from input to output; nothing holds state between calls.

/// Ages, increments, today checks, and timeframe windows
pub mod calendar;

/// Current-timestamp access
pub mod clock;

/// Coercion of flexible inputs into canonical dates
pub mod convert;

/// Error types for parsing and calendar operations
pub mod error;

/// ISO, locale-aware, relative, and elapsed formatting
pub mod format;

/// Day-of-week lookups relative to today
pub mod weekday;

// Re-export the function surface and its parameter types for convenient
// access.
pub use calendar::{
    age, increment, is_today, timeframe, TimeframeBounds, TimeframeFormat, TimeframeUnit,
};
pub use clock::timestamp;
pub use convert::{to_date, DateInput};
pub use error::{DateError, Result};
pub use format::{elapsed, iso, nice, relative, ElapsedOptions, NameStyle};
pub use weekday::{day_of_week, next_day_of_week, previous_day_of_week};
