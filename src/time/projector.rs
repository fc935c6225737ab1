/// Projection of a reference instant onto an exchange's wall clock
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{ClockError, Result};
use crate::utils::time::truncate_to_minute;

/// Wall-clock reading at an exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalClock {
    pub date: NaiveDate,
    /// Truncated to the minute
    pub time: NaiveTime,
    pub weekday: Weekday,
}

/// Resolve an IANA zone identifier such as "Europe/London"
pub fn resolve_time_zone(time_zone: &str) -> Result<Tz> {
    time_zone
        .trim()
        .parse::<Tz>()
        .map_err(|_| ClockError::InvalidTimeZone(time_zone.to_string()))
}

/// Local time and weekday in `tz` at `instant`.
///
/// The zone's offset in effect at `instant` is applied, DST included.
pub fn project_in(tz: Tz, instant: DateTime<Utc>) -> LocalClock {
    let local = instant.with_timezone(&tz);
    LocalClock {
        date: local.date_naive(),
        time: truncate_to_minute(local.time()),
        weekday: local.weekday(),
    }
}

pub fn project_local_time(time_zone: &str, instant: DateTime<Utc>) -> Result<LocalClock> {
    let tz = resolve_time_zone(time_zone)?;
    Ok(project_in(tz, instant))
}
