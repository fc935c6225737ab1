/// Configuration types for the trade clock
use serde::{Deserialize, Serialize};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Application configuration (loaded from TOML)
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // Logging
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,

    // Board refresh
    #[serde(default = "default_refresh_interval_sec")]
    pub refresh_interval_sec: u64,
    #[serde(default = "default_true")]
    pub selected_only: bool,

    // Persisted exchange list (selection and display order)
    #[serde(default = "default_store_path")]
    pub store_path: String,

    // Persisted user preferences (agreement acceptance)
    #[serde(default = "default_preferences_path")]
    pub preferences_path: String,

    #[serde(default)]
    pub exchanges: Vec<ExchangeConfig>,
}

/// One `[[exchanges]]` table
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeConfig {
    pub id: String,
    pub name: String,
    pub time_zone: String,
    pub opening_time: String,
    pub closing_time: String,
    #[serde(default = "default_trading_days")]
    pub trading_days: Vec<String>,
    #[serde(default)]
    pub continent: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub flag: String,
    #[serde(default)]
    pub schedule_url: String,
    #[serde(default = "default_true")]
    pub selected: bool,
    #[serde(default)]
    pub display_order: Option<i32>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_refresh_interval_sec() -> u64 {
    60
}

fn default_store_path() -> String {
    "data/exchanges.json".to_string()
}

fn default_preferences_path() -> String {
    "data/preferences.json".to_string()
}

fn default_true() -> bool {
    true
}

fn default_trading_days() -> Vec<String> {
    ["Mon", "Tue", "Wed", "Thu", "Fri"]
        .iter()
        .map(|d| d.to_string())
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            refresh_interval_sec: default_refresh_interval_sec(),
            selected_only: true,
            store_path: default_store_path(),
            preferences_path: default_preferences_path(),
            exchanges: Vec::new(),
        }
    }
}
