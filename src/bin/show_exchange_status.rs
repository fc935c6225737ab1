/// Show open/closed status of every exchange once
///
/// Usage: show_exchange_status [--at 2025-03-04T15:00:00Z] [--json] [--all]
///
/// Reads the persisted exchange list at `store_path`, seeding it from config on first use.
use chrono::{DateTime, Utc};
use std::path::Path;
use tradeclock::config::{load_config, open_store};
use tradeclock::logging::init_logging;
use tradeclock::{evaluate_board, Clock, Config, FixedClock, SystemClock};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let include_unselected = args.iter().any(|a| a == "--all");
    let at = args
        .iter()
        .position(|a| a == "--at")
        .and_then(|i| args.get(i + 1))
        .map(|value| DateTime::parse_from_rfc3339(value).map(|dt| dt.with_timezone(&Utc)))
        .transpose()?;

    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    let config = if Path::new(&config_path).exists() {
        load_config(&config_path)?
    } else {
        Config::default()
    };
    init_logging(&config.log_level, config.log_format);

    let store = open_store(&config).await?;
    let exchanges = if include_unselected || !config.selected_only {
        store.all().await
    } else {
        store.selected().await
    };

    let clock: Box<dyn Clock> = match at {
        Some(instant) => Box::new(FixedClock::new(instant)),
        None => Box::new(SystemClock),
    };
    let board = evaluate_board(&exchanges, clock.as_ref());

    if json {
        println!("{}", serde_json::to_string_pretty(&board.to_json())?);
        return Ok(());
    }

    println!("📈 Exchange Status");
    println!("==================");
    println!("Evaluated at {}\n", board.evaluated_at.format("%Y-%m-%d %H:%M:%S UTC"));

    for (entry, exchange) in board.entries.iter().zip(&exchanges) {
        match entry.status() {
            Some(status) => println!(
                "{} {} {:<28} {}  [{} {}]",
                if status.is_open { "🟢" } else { "🔴" },
                exchange.flag,
                exchange.name,
                status.summary(),
                exchange.hours_label(),
                exchange.schedule.trading_days
            ),
            None => {
                if let Some(e) = entry.error() {
                    println!("⚠️  {} {:<28} {} ({})", exchange.flag, exchange.name, e, e.error_code());
                }
            }
        }
    }

    let failed = board.failures().count();
    println!(
        "\n{} open, {} closed, {} failed",
        board.open_count(),
        board.entries.len() - board.open_count() - failed,
        failed
    );

    Ok(())
}
