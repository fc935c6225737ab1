/// Weekly trading calendar as a seven-bit weekday set
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ClockError, Result};

const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Set of weekdays on which an exchange operates.
///
/// Bit `n` is set when the weekday with `num_days_from_monday() == n` trades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Weekday>", into = "Vec<Weekday>")]
pub struct TradingDays(u8);

impl TradingDays {
    pub const NONE: TradingDays = TradingDays(0);
    pub const WEEKDAYS: TradingDays = TradingDays(0b0001_1111);
    pub const EVERY_DAY: TradingDays = TradingDays(0b0111_1111);

    fn bit(day: Weekday) -> u8 {
        1 << day.num_days_from_monday()
    }

    pub fn from_days<I: IntoIterator<Item = Weekday>>(days: I) -> Self {
        days.into_iter().fold(TradingDays::NONE, |set, day| set.with(day))
    }

    /// Parse weekday names such as "Mon" or "monday"
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let mut set = TradingDays::NONE;
        for name in names {
            let name = name.as_ref().trim();
            let day = Weekday::from_str(name)
                .map_err(|_| ClockError::InvalidTradingDays(format!("Unknown weekday: {}", name)))?;
            set = set.with(day);
        }
        Ok(set)
    }

    pub fn with(self, day: Weekday) -> Self {
        TradingDays(self.0 | Self::bit(day))
    }

    pub fn without(self, day: Weekday) -> Self {
        TradingDays(self.0 & !Self::bit(day))
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & Self::bit(day) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Days in Monday-first order
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        ALL_WEEKDAYS.iter().copied().filter(move |day| self.contains(*day))
    }
}

impl Default for TradingDays {
    fn default() -> Self {
        TradingDays::WEEKDAYS
    }
}

impl From<Vec<Weekday>> for TradingDays {
    fn from(days: Vec<Weekday>) -> Self {
        TradingDays::from_days(days)
    }
}

impl From<TradingDays> for Vec<Weekday> {
    fn from(days: TradingDays) -> Self {
        days.iter().collect()
    }
}

impl fmt::Display for TradingDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TradingDays::EVERY_DAY => write!(f, "Daily"),
            TradingDays::WEEKDAYS => write!(f, "Mon-Fri"),
            TradingDays::NONE => write!(f, "Never"),
            days => {
                let names: Vec<String> = days.iter().map(|d| d.to_string()).collect();
                write!(f, "{}", names.join(","))
            }
        }
    }
}
