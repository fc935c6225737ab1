pub mod loader;

pub use loader::{build_exchange, configured_exchanges, load_config, open_store, parse_config};
