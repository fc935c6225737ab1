pub mod clock;
pub mod projector;
pub mod remaining;
pub mod schedule;
pub mod session;
pub mod weekdays;

pub use clock::{Clock, FixedClock, SystemClock};
pub use projector::{project_in, project_local_time, resolve_time_zone, LocalClock};
pub use remaining::{format_remaining, minutes_until_transition, RemainingTime};
pub use schedule::{SessionKind, TradingSchedule};
pub use session::{is_session_open, session_phase, SessionPhase};
pub use weekdays::TradingDays;
