//! Catalog store: machine and historical-order records from flat JSON files.
//!
//! Both collections are reloaded on every request so catalog edits take
//! effect without a restart. An absent file is an empty collection; a
//! present-but-malformed file is an operator mistake and fails the request.

use crate::error::{QuoteError, QuoteResult};
use crate::models::{HistoricalOrder, Machine};
use core_config::{ConfigError, FromEnv, env_or_default};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File locations backing the catalog store.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub machines_file: PathBuf,
    pub orders_file: PathBuf,
}

impl FromEnv for CatalogConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            machines_file: env_or_default("MACHINES_FILE", "machines.json").into(),
            orders_file: env_or_default("ORDERS_FILE", "database.json").into(),
        })
    }
}

/// Read-only source of machine and historical-order records.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    config: CatalogConfig,
}

impl CatalogStore {
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    /// Load the machine catalog, freshly, as an ordered sequence.
    pub async fn load_machines(&self) -> QuoteResult<Vec<Machine>> {
        load_json(&self.config.machines_file).await
    }

    /// Load the historical orders passed to the AI estimator as context.
    pub async fn load_orders(&self) -> QuoteResult<Vec<HistoricalOrder>> {
        load_json(&self.config.orders_file).await
    }
}

async fn load_json<T: DeserializeOwned>(path: &Path) -> QuoteResult<Vec<T>> {
    match tokio::fs::read(path).await {
        Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
            QuoteError::Configuration(format!("invalid catalog file {}: {}", path.display(), e))
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "Catalog file not found, treating as empty");
            Ok(Vec::new())
        }
        Err(e) => Err(QuoteError::Configuration(format!(
            "failed to read {}: {}",
            path.display(),
            e
        ))),
    }
}
