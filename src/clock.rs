//! Clock access.

use chrono::Utc;

use crate::convert::{to_date, DateInput};
use crate::error::Result;

/// Epoch seconds (floored) for the given date, or for the current moment
/// when `d` is `None` (the `utc` flag is unused in that case).
pub fn timestamp<'a>(d: Option<DateInput<'a>>, utc: bool) -> Result<i64> {
    match d {
        None => Ok(Utc::now().timestamp()),
        Some(d) => Ok(to_date(d, utc)?.timestamp()),
    }
}
