/// Main entry point for the trade clock board
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

use tradeclock::{
    config::{load_config, open_store},
    engine::{evaluate_board_at, BoardSnapshot},
    error::Result,
    logging::init_logging,
    preferences::{UserPreferences, AGREEMENT_TEXT},
    ticker::{MinuteTicker, TickReason},
    Clock, Config, ExchangeStore, SystemClock,
};

/// Application state
pub struct TradeClockApp {
    config: Arc<Config>,
    store: ExchangeStore,
    clock: Arc<dyn Clock>,
}

impl TradeClockApp {
    pub async fn new(config_path: &str) -> Result<Self> {
        let (config, config_missing) = if Path::new(config_path).exists() {
            (load_config(config_path)?, false)
        } else {
            (Config::default(), true)
        };

        // Initialize logging
        init_logging(&config.log_level, config.log_format);

        info!("Starting trade clock...");
        if config_missing {
            warn!("No config at {} - using built-in exchanges", config_path);
        }

        let store = open_store(&config).await?;
        info!("{} exchanges loaded", store.len().await);

        Ok(TradeClockApp {
            config: Arc::new(config),
            store,
            clock: Arc::new(SystemClock),
        })
    }

    /// Check the disclaimer has been accepted, recording it when `accept` is set.
    ///
    /// Returns false when the board must not be shown yet.
    pub async fn ensure_agreement(&self, accept: bool) -> Result<bool> {
        let path = &self.config.preferences_path;
        let mut prefs = UserPreferences::load(path).await?;
        if prefs.has_accepted_agreement {
            return Ok(true);
        }

        println!("⚠️  Please note\n\n{}\n", AGREEMENT_TEXT);
        if !accept {
            println!("Run again with --accept-agreement to continue.");
            return Ok(false);
        }

        prefs.accept_agreement(path).await?;
        info!("Agreement accepted");
        Ok(true)
    }

    /// Re-evaluate the board on every tick until Ctrl+C
    pub async fn run(&self) -> Result<()> {
        let interval = Duration::from_secs(self.config.refresh_interval_sec);
        let (_ticker, mut ticks) = MinuteTicker::spawn(Arc::clone(&self.clock), interval);
        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                tick = ticks.recv() => {
                    let Some(tick) = tick else {
                        error!("Ticker stopped unexpectedly");
                        break;
                    };
                    if tick.reason == TickReason::Resume {
                        info!("Resumed - refreshing board");
                    }
                    let exchanges = if self.config.selected_only {
                        self.store.selected().await
                    } else {
                        self.store.all().await
                    };
                    let board = evaluate_board_at(&exchanges, tick.at);
                    render_board(&board, &exchanges);
                }
                _ = &mut shutdown => {
                    info!("Ctrl+C received - shutting down");
                    break;
                }
            }
        }

        self.store.save_to_file(&self.config.store_path).await?;
        Ok(())
    }
}

fn render_board(board: &BoardSnapshot, exchanges: &[tradeclock::Exchange]) {
    println!("\n🕒 {}", board.evaluated_at.format("%Y-%m-%d %H:%M UTC"));
    for (entry, exchange) in board.entries.iter().zip(exchanges) {
        match &entry.result {
            Ok(status) => {
                let icon = if status.is_open { "🟢" } else { "🔴" };
                println!(
                    "{} {} {:<28} {}  [{}]",
                    icon,
                    exchange.flag,
                    entry.name,
                    status.summary(),
                    exchange.hours_label()
                );
            }
            Err(e) => println!("⚠️  {} {:<28} {}", exchange.flag, entry.name, e),
        }
    }
    info!("{} of {} exchanges open", board.open_count(), board.entries.len());
}

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    let accept = std::env::args().any(|a| a == "--accept-agreement");

    let app = TradeClockApp::new(&config_path).await?;
    if !app.ensure_agreement(accept).await? {
        return Ok(());
    }

    app.run().await?;

    Ok(())
}
