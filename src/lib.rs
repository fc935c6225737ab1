pub mod types;
pub mod error;
pub mod time;
pub mod engine;
pub mod exchanges;
pub mod config;
pub mod ticker;
pub mod logging;
pub mod preferences;
pub mod utils;

pub use types::*;
pub use error::{ClockError, Result};
pub use engine::{evaluate, evaluate_board, evaluate_board_at, BoardEntry, BoardSnapshot, SessionStatus};
pub use exchanges::{Exchange, ExchangeStore, StoreCommand};
pub use time::{Clock, FixedClock, SystemClock, TradingDays, TradingSchedule};
