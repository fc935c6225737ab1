/// Trading-session status engine
///
/// Composes projection, resolution and remaining-time math into one status
/// per exchange. Every call is evaluated against a fresh reference instant;
/// nothing here holds state between calls.
use chrono::{DateTime, NaiveDate, NaiveTime, Utc, Weekday};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, error, warn};

use crate::error::{ClockError, Result};
use crate::exchanges::Exchange;
use crate::time::{
    format_remaining, is_session_open, minutes_until_transition, project_local_time, Clock,
    RemainingTime, TradingSchedule,
};

/// Derived status of one exchange at one instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionStatus {
    pub local_date: NaiveDate,
    pub local_time: NaiveTime,
    pub local_weekday: Weekday,
    pub is_open: bool,
    pub minutes_remaining: RemainingTime,
    pub time_remaining: String,
}

impl SessionStatus {
    pub fn label(&self) -> &'static str {
        if self.is_open {
            "OPEN"
        } else {
            "CLOSED"
        }
    }

    /// One-line rendering, e.g. "10:00 Tue OPEN closes in 6h"
    pub fn summary(&self) -> String {
        let verb = if self.is_open { "closes" } else { "opens" };
        format!(
            "{} {} {} {} in {}",
            self.local_time.format("%H:%M"),
            self.local_weekday,
            self.label(),
            verb,
            self.time_remaining
        )
    }
}

/// Evaluate a schedule at `instant`.
///
/// Fails only when the schedule's time zone cannot be resolved.
pub fn evaluate(schedule: &TradingSchedule, instant: DateTime<Utc>) -> Result<SessionStatus> {
    let local = project_local_time(&schedule.time_zone, instant)?;

    let is_open = is_session_open(
        local.time,
        local.weekday,
        schedule.opening_time,
        schedule.closing_time,
        schedule.trading_days,
    );

    let remaining = minutes_until_transition(
        local.time,
        schedule.opening_time,
        schedule.closing_time,
        is_open,
    );

    Ok(SessionStatus {
        local_date: local.date,
        local_time: local.time,
        local_weekday: local.weekday,
        is_open,
        minutes_remaining: remaining,
        time_remaining: format_remaining(remaining),
    })
}

/// Result for one exchange in a board evaluation
#[derive(Debug)]
pub struct BoardEntry {
    pub id: String,
    pub name: String,
    pub result: Result<SessionStatus>,
}

impl BoardEntry {
    pub fn status(&self) -> Option<&SessionStatus> {
        self.result.as_ref().ok()
    }

    pub fn error(&self) -> Option<&ClockError> {
        self.result.as_ref().err()
    }
}

/// Statuses for an ordered collection of exchanges at one instant
#[derive(Debug)]
pub struct BoardSnapshot {
    pub evaluated_at: DateTime<Utc>,
    pub entries: Vec<BoardEntry>,
}

impl BoardSnapshot {
    pub fn open_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.status().map(|s| s.is_open).unwrap_or(false))
            .count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &BoardEntry> {
        self.entries.iter().filter(|e| e.result.is_err())
    }

    pub fn get(&self, id: &str) -> Option<&BoardEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn to_json(&self) -> serde_json::Value {
        let entries: Vec<serde_json::Value> = self
            .entries
            .iter()
            .map(|entry| match &entry.result {
                Ok(status) => json!({
                    "id": entry.id,
                    "name": entry.name,
                    "status": status,
                }),
                Err(e) => json!({
                    "id": entry.id,
                    "name": entry.name,
                    "error": e.to_string(),
                    "error_code": e.error_code(),
                }),
            })
            .collect();

        json!({
            "evaluated_at": self.evaluated_at,
            "open_count": self.open_count(),
            "entries": entries,
        })
    }
}

/// Evaluate every exchange in order against a single reading of `clock`.
///
/// A failing exchange is recorded in its entry; the rest are still evaluated.
pub fn evaluate_board(exchanges: &[Exchange], clock: &dyn Clock) -> BoardSnapshot {
    evaluate_board_at(exchanges, clock.now())
}

pub fn evaluate_board_at(exchanges: &[Exchange], instant: DateTime<Utc>) -> BoardSnapshot {
    let entries = exchanges
        .iter()
        .map(|exchange| {
            let result = evaluate(&exchange.schedule, instant);
            match &result {
                Err(e) if e.is_per_exchange() => {
                    warn!("Skipping {}: {} ({})", exchange.id, e, e.error_code())
                }
                Err(e) => error!("Evaluation of {} failed: {} ({})", exchange.id, e, e.error_code()),
                Ok(_) => {}
            }
            BoardEntry {
                id: exchange.id.clone(),
                name: exchange.name.clone(),
                result,
            }
        })
        .collect::<Vec<_>>();

    debug!("Board evaluated at {}: {} exchanges", instant, entries.len());

    BoardSnapshot {
        evaluated_at: instant,
        entries,
    }
}
