/// Configuration loading from TOML file
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

use crate::error::{ClockError, Result};
use crate::exchanges::{default_exchanges, Exchange, ExchangeStore};
use crate::time::{TradingDays, TradingSchedule};
use crate::types::{Config, ExchangeConfig};
use crate::utils::time::parse_wall_time;

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ClockError::ConfigError(format!("Failed to read config file: {}", e)))?;

    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)
        .map_err(|e| ClockError::ConfigError(format!("Failed to parse config: {}", e)))?;

    // Validate config
    validate_config(&config)?;

    Ok(config)
}

fn validate_config(config: &Config) -> Result<()> {
    if config.refresh_interval_sec == 0 || config.refresh_interval_sec > 60 {
        return Err(ClockError::ConfigError(format!(
            "refresh_interval_sec must be within 1..=60, got {}",
            config.refresh_interval_sec
        )));
    }

    let mut seen = HashSet::new();
    for exchange in &config.exchanges {
        if exchange.id.trim().is_empty() {
            return Err(ClockError::ConfigError("exchange id is empty".to_string()));
        }
        if !seen.insert(exchange.id.as_str()) {
            return Err(ClockError::ConfigError(format!("duplicate exchange id: {}", exchange.id)));
        }
    }

    Ok(())
}

/// Build an exchange record from its config table.
///
/// Malformed times or weekday names are errors. An unknown time zone is kept
/// and reported when the exchange is evaluated.
pub fn build_exchange(entry: &ExchangeConfig, position: usize) -> Result<Exchange> {
    let schedule = TradingSchedule::new(
        entry.time_zone.clone(),
        parse_wall_time(&entry.opening_time)?,
        parse_wall_time(&entry.closing_time)?,
        TradingDays::parse(&entry.trading_days)?,
    );

    if let Err(e) = schedule.validate() {
        warn!("Exchange {}: {} ({})", entry.id, e, e.error_code());
    }

    Ok(Exchange {
        id: entry.id.clone(),
        name: entry.name.clone(),
        schedule,
        continent: entry.continent.clone(),
        country: entry.country.clone(),
        city: entry.city.clone(),
        flag: entry.flag.clone(),
        schedule_url: entry.schedule_url.clone(),
        is_selected: entry.selected,
        display_order: entry.display_order.unwrap_or(position as i32),
    })
}

/// Exchanges declared in the config, or the built-in catalog when none are
pub fn configured_exchanges(config: &Config) -> Result<Vec<Exchange>> {
    if config.exchanges.is_empty() {
        return Ok(default_exchanges());
    }

    config
        .exchanges
        .iter()
        .enumerate()
        .map(|(position, entry)| {
            build_exchange(entry, position).map_err(|e| {
                ClockError::ConfigError(format!("exchange {}: {}", entry.id, e))
            })
        })
        .collect()
}

/// Restore the persisted exchange list, or seed it from config and persist it.
///
/// Once the store file exists it wins over the config's `[[exchanges]]`, so
/// selection and ordering edits survive restarts.
pub async fn open_store(config: &Config) -> Result<ExchangeStore> {
    let path = Path::new(&config.store_path);
    if path.exists() {
        let store = ExchangeStore::new();
        store.load_from_file(path).await?;
        return Ok(store);
    }

    let store = ExchangeStore::with_exchanges(configured_exchanges(config)?).await?;
    store.save_to_file(path).await?;
    info!("Exchange list seeded to {}", path.display());
    Ok(store)
}
