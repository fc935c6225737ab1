/// Tracing subscriber setup shared by the binaries
use tracing_subscriber::EnvFilter;

use crate::types::LogFormat;

/// Filter from `RUST_LOG` when set, otherwise `tradeclock=<level>,warn`
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tradeclock={},warn", level)))
}

pub fn init_logging(level: &str, format: LogFormat) {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter(level));
    let result = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    // A subscriber may already be installed (tests, embedding)
    let _ = result;
}
