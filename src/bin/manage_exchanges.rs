/// Edit the persisted exchange list: selection and display order
///
/// Usage: manage_exchanges list | select <id> | deselect <id> | toggle <id>
///        | move <from> <to> | order <id> <n>
use std::path::Path;
use tradeclock::config::{load_config, open_store};
use tradeclock::exchanges::commands::USAGE;
use tradeclock::logging::init_logging;
use tradeclock::{Config, StoreCommand};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match StoreCommand::parse(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("❌ {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    let config = if Path::new(&config_path).exists() {
        load_config(&config_path)?
    } else {
        Config::default()
    };
    init_logging(&config.log_level, config.log_format);

    let store = open_store(&config).await?;
    let message = command.apply(&store).await?;

    if command.is_edit() {
        store.save_to_file(&config.store_path).await?;
        println!("✅ {}", message);
        println!("💾 Saved to {}", config.store_path);
    } else {
        println!("📋 Exchanges ({})", config.store_path);
        println!("{}", message);
    }

    Ok(())
}
