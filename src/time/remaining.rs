/// Time remaining until the next open/close transition
use chrono::NaiveTime;
use serde::Serialize;
use std::fmt;

use crate::utils::time::{minute_of_day, minutes_forward, MINUTES_PER_DAY};

/// Whole minutes until the next transition, always in 0..1440
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RemainingTime(u16);

impl RemainingTime {
    /// `None` unless `minutes` is less than one day
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(RemainingTime(minutes))
    }

    pub fn minutes(&self) -> u16 {
        self.0
    }

    pub fn hours_part(&self) -> u16 {
        self.0 / 60
    }

    pub fn minutes_part(&self) -> u16 {
        self.0 % 60
    }
}

impl fmt::Display for RemainingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.hours_part(), self.minutes_part()) {
            (0, m) => write!(f, "{}m", m),
            (h, 0) => write!(f, "{}h", h),
            (h, m) => write!(f, "{}h {}m", h, m),
        }
    }
}

/// Minutes from `local_time` until closing (if open) or opening (if closed).
///
/// Arithmetic wraps through midnight, so an overnight session measured
/// before midnight counts the minutes left in the day plus the minutes up to
/// the closing time.
pub fn minutes_until_transition(
    local_time: NaiveTime,
    opening_time: NaiveTime,
    closing_time: NaiveTime,
    is_open: bool,
) -> RemainingTime {
    let now = minute_of_day(local_time);
    let target = if is_open {
        minute_of_day(closing_time)
    } else {
        minute_of_day(opening_time)
    };
    // minutes_forward stays within 0..1440
    RemainingTime(minutes_forward(now, target))
}

/// Render as "2h 30m", "6h" or "45m"
pub fn format_remaining(remaining: RemainingTime) -> String {
    remaining.to_string()
}
