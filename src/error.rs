/// Centralized error types for the trade clock
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClockError {
    // Schedule Errors
    #[error("Invalid time zone: {0}")]
    InvalidTimeZone(String),

    #[error("Degenerate schedule: {0}")]
    DegenerateSchedule(String),

    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    #[error("Invalid trading days: {0}")]
    InvalidTradingDays(String),

    // Configuration Errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    // File I/O Errors
    #[error("File I/O error: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Deserialization failed: {0}")]
    DeserializationError(#[from] serde_json::Error),

    // Store Errors
    #[error("Exchange not found: {0}")]
    ExchangeNotFound(String),

    #[error("Exchange already exists: {0}")]
    DuplicateExchange(String),

    #[error("Invalid reorder: cannot move {from} to {to} in a list of {len}")]
    InvalidReorder { from: usize, to: usize, len: usize },

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    // Generic Errors
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ClockError>;

impl ClockError {
    /// Errors that only affect a single exchange's evaluation
    pub fn is_per_exchange(&self) -> bool {
        matches!(
            self,
            ClockError::InvalidTimeZone(_)
                | ClockError::DegenerateSchedule(_)
                | ClockError::InvalidTime(_)
        )
    }

    /// Get error code for logging/monitoring
    pub fn error_code(&self) -> &str {
        match self {
            ClockError::InvalidTimeZone(_) => "TZ_001",
            ClockError::DegenerateSchedule(_) => "SCHED_001",
            ClockError::InvalidTime(_) => "SCHED_002",
            ClockError::InvalidTradingDays(_) => "SCHED_003",
            ClockError::ConfigError(_) => "CFG_001",
            ClockError::FileError(_) => "FILE_001",
            ClockError::DeserializationError(_) => "FILE_002",
            ClockError::ExchangeNotFound(_) => "STORE_001",
            ClockError::DuplicateExchange(_) => "STORE_002",
            ClockError::InvalidReorder { .. } => "STORE_003",
            ClockError::InvalidCommand(_) => "STORE_004",
            ClockError::Other(_) => "GEN_001",
        }
    }
}
