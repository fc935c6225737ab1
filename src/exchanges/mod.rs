pub mod catalog;
pub mod commands;
pub mod store;

pub use catalog::default_exchanges;
pub use commands::StoreCommand;
pub use store::ExchangeStore;

use serde::{Deserialize, Serialize};

use crate::time::TradingSchedule;

/// Exchange record as supplied by the schedule store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    pub id: String,
    pub name: String,
    pub schedule: TradingSchedule,
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
    #[serde(default = "default_selected")]
    pub is_selected: bool,
    #[serde(default)]
    pub display_order: i32,
}

fn default_selected() -> bool {
    true
}

impl Exchange {
    pub fn new(id: impl Into<String>, name: impl Into<String>, schedule: TradingSchedule) -> Self {
        Exchange {
            id: id.into(),
            name: name.into(),
            schedule,
            continent: String::new(),
            country: String::new(),
            city: String::new(),
            flag: String::new(),
            schedule_url: String::new(),
            is_selected: true,
            display_order: 0,
        }
    }

    /// Trading hours as "09:30 - 16:00"
    pub fn hours_label(&self) -> String {
        format!(
            "{} - {}",
            self.schedule.opening_time.format("%H:%M"),
            self.schedule.closing_time.format("%H:%M")
        )
    }
}
