/// Built-in exchange catalog used when no configuration lists exchanges
use chrono::NaiveTime;

use super::Exchange;
use crate::time::{TradingDays, TradingSchedule};

struct CatalogEntry {
    id: &'static str,
    name: &'static str,
    time_zone: &'static str,
    opening: (u32, u32),
    closing: (u32, u32),
    continent: &'static str,
    country: &'static str,
    city: &'static str,
    flag: &'static str,
}

const CATALOG: [CatalogEntry; 8] = [
    CatalogEntry {
        id: "lse",
        name: "London Stock Exchange",
        time_zone: "Europe/London",
        opening: (8, 0),
        closing: (16, 30),
        continent: "Europe",
        country: "UK",
        city: "London",
        flag: "🇬🇧",
    },
    CatalogEntry {
        id: "nyse",
        name: "New York Stock Exchange",
        time_zone: "America/New_York",
        opening: (9, 30),
        closing: (16, 0),
        continent: "North America",
        country: "USA",
        city: "New York",
        flag: "🇺🇸",
    },
    CatalogEntry {
        id: "tse",
        name: "Tokyo Stock Exchange",
        time_zone: "Asia/Tokyo",
        opening: (9, 0),
        closing: (15, 30),
        continent: "Asia",
        country: "Japan",
        city: "Tokyo",
        flag: "🇯🇵",
    },
    CatalogEntry {
        id: "seb",
        name: "Swiss Electronic Bourse",
        time_zone: "Europe/Zurich",
        opening: (9, 0),
        closing: (17, 30),
        continent: "Europe",
        country: "Switzerland",
        city: "Zurich",
        flag: "🇨🇭",
    },
    CatalogEntry {
        id: "bmv",
        name: "Bolsa Mexicana de Valores",
        time_zone: "America/Mexico_City",
        opening: (7, 30),
        closing: (14, 0),
        continent: "North America",
        country: "Mexico",
        city: "Mexico City",
        flag: "🇲🇽",
    },
    CatalogEntry {
        id: "moex",
        name: "Moscow Exchange",
        time_zone: "Europe/Moscow",
        opening: (9, 50),
        closing: (18, 50),
        continent: "Europe",
        country: "Russia",
        city: "Moscow",
        flag: "🇷🇺",
    },
    CatalogEntry {
        id: "hkex",
        name: "Hong Kong Stock Exchange",
        time_zone: "Asia/Hong_Kong",
        opening: (9, 30),
        closing: (16, 0),
        continent: "Asia",
        country: "Hong Kong",
        city: "Hong Kong",
        flag: "🇭🇰",
    },
    CatalogEntry {
        id: "nasdaq",
        name: "NASDAQ",
        time_zone: "America/New_York",
        opening: (9, 30),
        closing: (16, 0),
        continent: "North America",
        country: "USA",
        city: "New York",
        flag: "🇺🇸",
    },
];

fn hm(value: (u32, u32)) -> NaiveTime {
    // Catalog literals are all valid times of day
    NaiveTime::from_hms_opt(value.0, value.1, 0).unwrap_or_default()
}

/// Default exchanges, all selected, trading Monday to Friday.
///
/// Display order follows catalog order.
pub fn default_exchanges() -> Vec<Exchange> {
    CATALOG
        .iter()
        .enumerate()
        .map(|(index, entry)| Exchange {
            id: entry.id.to_string(),
            name: entry.name.to_string(),
            schedule: TradingSchedule::new(
                entry.time_zone,
                hm(entry.opening),
                hm(entry.closing),
                TradingDays::WEEKDAYS,
            ),
            continent: entry.continent.to_string(),
            country: entry.country.to_string(),
            city: entry.city.to_string(),
            flag: entry.flag.to_string(),
            schedule_url: format!("https://www.tradinghours.com/markets/{}", entry.id),
            is_selected: true,
            display_order: index as i32,
        })
        .collect()
}
