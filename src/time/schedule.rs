/// Exchange trading schedule
use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use super::projector::resolve_time_zone;
use super::weekdays::TradingDays;
use crate::error::{ClockError, Result};
use crate::utils::time::{minute_of_day, truncate_to_minute, wall_time};

/// Shape of the daily session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionKind {
    /// Closing time is later on the same calendar day
    SameDay,
    /// Closing time falls on the next calendar day
    Overnight,
    /// Opening equals closing; never open
    Degenerate,
}

/// Immutable daily schedule of one exchange.
///
/// `opening_time` and `closing_time` are zone-naive wall-clock values read in
/// `time_zone`. A closing time earlier than the opening time encodes a session
/// that crosses midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingSchedule {
    pub time_zone: String,
    pub opening_time: NaiveTime,
    pub closing_time: NaiveTime,
    #[serde(default)]
    pub trading_days: TradingDays,
}

impl TradingSchedule {
    pub fn new(
        time_zone: impl Into<String>,
        opening_time: NaiveTime,
        closing_time: NaiveTime,
        trading_days: TradingDays,
    ) -> Self {
        TradingSchedule {
            time_zone: time_zone.into(),
            opening_time: truncate_to_minute(opening_time),
            closing_time: truncate_to_minute(closing_time),
            trading_days,
        }
    }

    /// Build from (hour, minute) pairs, trading Monday to Friday
    pub fn from_hm(
        time_zone: impl Into<String>,
        opening: (u32, u32),
        closing: (u32, u32),
    ) -> Result<Self> {
        Ok(TradingSchedule::new(
            time_zone,
            wall_time(opening.0, opening.1)?,
            wall_time(closing.0, closing.1)?,
            TradingDays::default(),
        ))
    }

    pub fn with_trading_days(mut self, trading_days: TradingDays) -> Self {
        self.trading_days = trading_days;
        self
    }

    pub fn opening_minute(&self) -> u16 {
        minute_of_day(self.opening_time)
    }

    pub fn closing_minute(&self) -> u16 {
        minute_of_day(self.closing_time)
    }

    pub fn kind(&self) -> SessionKind {
        let (open, close) = (self.opening_minute(), self.closing_minute());
        if open == close {
            SessionKind::Degenerate
        } else if close > open {
            SessionKind::SameDay
        } else {
            SessionKind::Overnight
        }
    }

    /// Length of one session in minutes (0 for a degenerate schedule)
    pub fn session_minutes(&self) -> u16 {
        crate::utils::time::minutes_forward(self.opening_minute(), self.closing_minute())
    }

    pub fn trades_on(&self, day: Weekday) -> bool {
        self.trading_days.contains(day)
    }

    /// Strict check used when loading schedules.
    ///
    /// Evaluation never fails on a degenerate schedule (it is reported as
    /// closed); this surfaces it so the loader can flag it.
    pub fn validate(&self) -> Result<()> {
        resolve_time_zone(&self.time_zone)?;
        if self.kind() == SessionKind::Degenerate {
            return Err(ClockError::DegenerateSchedule(format!(
                "opening and closing are both {} in {}",
                self.opening_time.format("%H:%M"),
                self.time_zone
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_kind() {
        let nyse = TradingSchedule::from_hm("America/New_York", (9, 30), (16, 0)).unwrap();
        assert_eq!(nyse.kind(), SessionKind::SameDay);
        assert_eq!(nyse.session_minutes(), 390);

        let overnight = TradingSchedule::from_hm("UTC", (21, 0), (5, 0)).unwrap();
        assert_eq!(overnight.kind(), SessionKind::Overnight);
        assert_eq!(overnight.session_minutes(), 480);

        let never = TradingSchedule::from_hm("UTC", (10, 0), (10, 0)).unwrap();
        assert_eq!(never.kind(), SessionKind::Degenerate);
        assert_eq!(never.session_minutes(), 0);
    }

    #[test]
    fn test_validate() {
        let ok = TradingSchedule::from_hm("Asia/Tokyo", (9, 0), (15, 30)).unwrap();
        assert!(ok.validate().is_ok());

        let bad_zone = TradingSchedule::from_hm("Mars/Olympus_Mons", (9, 0), (15, 30)).unwrap();
        assert!(matches!(bad_zone.validate(), Err(ClockError::InvalidTimeZone(_))));

        let degenerate = TradingSchedule::from_hm("Europe/London", (8, 0), (8, 0)).unwrap();
        assert!(matches!(degenerate.validate(), Err(ClockError::DegenerateSchedule(_))));
    }

    #[test]
    fn test_from_hm_rejects_out_of_range() {
        assert!(TradingSchedule::from_hm("UTC", (25, 0), (5, 0)).is_err());
    }

    #[test]
    fn test_seconds_are_dropped() {
        let schedule = TradingSchedule::new(
            "UTC",
            NaiveTime::from_hms_opt(9, 30, 59).unwrap(),
            NaiveTime::from_hms_opt(16, 0, 1).unwrap(),
            TradingDays::WEEKDAYS,
        );
        assert_eq!(schedule.opening_time, NaiveTime::from_hms_opt(9, 30, 0).unwrap());
        assert_eq!(schedule.closing_time, NaiveTime::from_hms_opt(16, 0, 0).unwrap());
    }
}
