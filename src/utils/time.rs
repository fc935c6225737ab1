/// Wall-clock helpers shared by schedule parsing and session math
use chrono::{NaiveTime, Timelike};

use crate::error::{ClockError, Result};

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Parse a wall-clock time written as "HH:MM" or "HH:MM:SS".
///
/// Seconds are dropped; schedules carry minute resolution only.
pub fn parse_wall_time(value: &str) -> Result<NaiveTime> {
    let value = value.trim();
    let parsed = NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|e| ClockError::InvalidTime(format!("{:?}: {}", value, e)))?;
    Ok(truncate_to_minute(parsed))
}

/// Build a wall-clock time from hour and minute, rejecting out-of-range values
pub fn wall_time(hour: u32, minute: u32) -> Result<NaiveTime> {
    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| ClockError::InvalidTime(format!("{:02}:{:02} is not a time of day", hour, minute)))
}

pub fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    // hour() and minute() of a valid NaiveTime are always in range
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

/// Minutes elapsed since local midnight, in 0..1440
pub fn minute_of_day(time: NaiveTime) -> u16 {
    (time.hour() * 60 + time.minute()) as u16
}

/// Forward distance in minutes from `from` to `to` on a 24h dial, in 0..1440
pub fn minutes_forward(from: u16, to: u16) -> u16 {
    (to + MINUTES_PER_DAY - from) % MINUTES_PER_DAY
}
