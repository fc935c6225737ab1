/// Per-user preferences persisted next to the exchange list
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::Result;

/// Shown once before the first board is drawn
pub const AGREEMENT_TEXT: &str = "\
This tool shows stock exchange hours to make your life easier, but it can't \
guarantee they are always 100% accurate.

Holidays and intraday trading breaks are not accounted for, since these vary \
and change.

Please don't make important trading decisions based only on what you see here.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(default)]
    pub has_accepted_agreement: bool,
}

impl UserPreferences {
    /// Read preferences, falling back to defaults when the file does not exist yet
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(UserPreferences::default());
        }
        let content = tokio::fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    pub async fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(path.as_ref(), json).await?;
        debug!("Saved preferences to {}", path.as_ref().display());
        Ok(())
    }

    /// Record acceptance and persist it
    pub async fn accept_agreement<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.has_accepted_agreement = true;
        self.save(path).await
    }
}
