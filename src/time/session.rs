/// Open/closed resolution for a daily trading session
use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use super::weekdays::TradingDays;
use crate::utils::time::minute_of_day;

/// Position of a wall-clock time within the daily session cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    ClosedBeforeOpen,
    /// Open, and the session started on the current local day
    Open,
    /// Open, past midnight, in a session that started the previous local day
    OpenCarriedOver,
    ClosedAfterClose,
}

impl SessionPhase {
    pub fn is_open(&self) -> bool {
        matches!(self, SessionPhase::Open | SessionPhase::OpenCarriedOver)
    }
}

/// Phase of `local_time` by clock alone, ignoring the weekly calendar.
///
/// Opening is inclusive and closing exclusive. When opening equals closing the
/// session never opens.
pub fn session_phase(local_time: NaiveTime, opening_time: NaiveTime, closing_time: NaiveTime) -> SessionPhase {
    let t = minute_of_day(local_time);
    let open = minute_of_day(opening_time);
    let close = minute_of_day(closing_time);

    if open == close {
        return if t < open {
            SessionPhase::ClosedBeforeOpen
        } else {
            SessionPhase::ClosedAfterClose
        };
    }

    if open < close {
        if t < open {
            SessionPhase::ClosedBeforeOpen
        } else if t < close {
            SessionPhase::Open
        } else {
            SessionPhase::ClosedAfterClose
        }
    } else if t >= open {
        SessionPhase::Open
    } else if t < close {
        SessionPhase::OpenCarriedOver
    } else {
        // Between the morning close and the evening open
        SessionPhase::ClosedAfterClose
    }
}

/// Whether an exchange is trading at the given local wall-clock time.
///
/// The governing day of a session is the day on which it opened: the portion
/// of an overnight session after midnight is open only if the previous local
/// day is a trading day, regardless of the current day.
pub fn is_session_open(
    local_time: NaiveTime,
    local_weekday: Weekday,
    opening_time: NaiveTime,
    closing_time: NaiveTime,
    trading_days: TradingDays,
) -> bool {
    match session_phase(local_time, opening_time, closing_time) {
        SessionPhase::Open => trading_days.contains(local_weekday),
        SessionPhase::OpenCarriedOver => trading_days.contains(local_weekday.pred()),
        SessionPhase::ClosedBeforeOpen | SessionPhase::ClosedAfterClose => false,
    }
}
