/// In-memory exchange store with JSON persistence
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::Exchange;
use crate::error::{ClockError, Result};

/// Thread-safe collection of exchanges keyed by id.
///
/// Listing order is (display_order, continent, name).
#[derive(Clone, Default)]
pub struct ExchangeStore {
    exchanges: Arc<RwLock<HashMap<String, Exchange>>>,
}

fn sort_for_display(exchanges: &mut [Exchange]) {
    exchanges.sort_by(|a, b| {
        a.display_order
            .cmp(&b.display_order)
            .then_with(|| a.continent.cmp(&b.continent))
            .then_with(|| a.name.cmp(&b.name))
    });
}

impl ExchangeStore {
    pub fn new() -> Self {
        ExchangeStore::default()
    }

    pub async fn with_exchanges(exchanges: Vec<Exchange>) -> Result<Self> {
        let store = ExchangeStore::new();
        for exchange in exchanges {
            store.insert(exchange).await?;
        }
        Ok(store)
    }

    pub async fn insert(&self, exchange: Exchange) -> Result<()> {
        let mut exchanges = self.exchanges.write().await;
        if exchanges.contains_key(&exchange.id) {
            return Err(ClockError::DuplicateExchange(exchange.id));
        }
        debug!("Exchange added: {}", exchange.id);
        exchanges.insert(exchange.id.clone(), exchange);
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.exchanges.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.exchanges.read().await.is_empty()
    }

    pub async fn get(&self, id: &str) -> Option<Exchange> {
        self.exchanges.read().await.get(id).cloned()
    }

    /// Every exchange in display order
    pub async fn all(&self) -> Vec<Exchange> {
        let mut list: Vec<Exchange> = self.exchanges.read().await.values().cloned().collect();
        sort_for_display(&mut list);
        list
    }

    /// Selected exchanges in display order
    pub async fn selected(&self) -> Vec<Exchange> {
        let mut list: Vec<Exchange> = self
            .exchanges
            .read()
            .await
            .values()
            .filter(|e| e.is_selected)
            .cloned()
            .collect();
        sort_for_display(&mut list);
        list
    }

    pub async fn set_selected(&self, id: &str, is_selected: bool) -> Result<()> {
        let mut exchanges = self.exchanges.write().await;
        let exchange = exchanges
            .get_mut(id)
            .ok_or_else(|| ClockError::ExchangeNotFound(id.to_string()))?;
        exchange.is_selected = is_selected;
        debug!("Exchange {} selected={}", id, is_selected);
        Ok(())
    }

    /// Flip selection and return the new value
    pub async fn toggle_selected(&self, id: &str) -> Result<bool> {
        let mut exchanges = self.exchanges.write().await;
        let exchange = exchanges
            .get_mut(id)
            .ok_or_else(|| ClockError::ExchangeNotFound(id.to_string()))?;
        exchange.is_selected = !exchange.is_selected;
        Ok(exchange.is_selected)
    }

    pub async fn set_display_order(&self, id: &str, display_order: i32) -> Result<()> {
        let mut exchanges = self.exchanges.write().await;
        let exchange = exchanges
            .get_mut(id)
            .ok_or_else(|| ClockError::ExchangeNotFound(id.to_string()))?;
        exchange.display_order = display_order;
        Ok(())
    }

    /// Apply several display orders at once.
    ///
    /// Nothing is changed if any id is unknown.
    pub async fn set_display_orders(&self, updates: &HashMap<String, i32>) -> Result<()> {
        let mut exchanges = self.exchanges.write().await;
        if let Some(missing) = updates.keys().find(|id| !exchanges.contains_key(*id)) {
            return Err(ClockError::ExchangeNotFound(missing.clone()));
        }
        for (id, order) in updates {
            if let Some(exchange) = exchanges.get_mut(id) {
                exchange.display_order = *order;
            }
        }
        Ok(())
    }

    /// Move the exchange at `from` to `to` in the current display order, then
    /// renumber every display order from zero.
    pub async fn reorder(&self, from: usize, to: usize) -> Result<Vec<Exchange>> {
        let mut exchanges = self.exchanges.write().await;
        let mut list: Vec<Exchange> = exchanges.values().cloned().collect();
        sort_for_display(&mut list);

        let len = list.len();
        if from >= len || to >= len {
            return Err(ClockError::InvalidReorder { from, to, len });
        }

        let moved = list.remove(from);
        list.insert(to, moved);

        for (index, exchange) in list.iter_mut().enumerate() {
            exchange.display_order = index as i32;
            if let Some(stored) = exchanges.get_mut(&exchange.id) {
                stored.display_order = index as i32;
            }
        }

        debug!("Exchange moved from {} to {}", from, to);
        Ok(list)
    }

    /// Replace the contents with exchanges read from a JSON file
    pub async fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        let content = tokio::fs::read_to_string(path.as_ref()).await?;
        let loaded: Vec<Exchange> = serde_json::from_str(&content)?;

        let mut map = HashMap::with_capacity(loaded.len());
        for exchange in loaded {
            if map.contains_key(&exchange.id) {
                return Err(ClockError::DuplicateExchange(exchange.id));
            }
            map.insert(exchange.id.clone(), exchange);
        }

        let count = map.len();
        *self.exchanges.write().await = map;
        info!("Loaded {} exchanges from {}", count, path.as_ref().display());
        Ok(count)
    }

    /// Write all exchanges, in display order, to a JSON file
    pub async fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let list = self.all().await;
        let json = serde_json::to_string_pretty(&list)?;

        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(path.as_ref(), json).await?;
        debug!("Saved {} exchanges to {}", list.len(), path.as_ref().display());
        Ok(())
    }
}
