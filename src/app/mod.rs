pub mod server;

use crate::adapters::{CsvStore, MemoryStore, TimeoutStore};
use crate::config::{StoreKind, TomlConfig};
use crate::core::{ConfigProvider, LandmarkStore, LocatorService};
use crate::utils::error::Result;
use std::sync::Arc;

pub use server::Server;

/// Builds the configured landmark store, wrapped in the per-call timeout.
pub async fn build_store(config: &TomlConfig) -> Result<Arc<dyn LandmarkStore>> {
    let timeout = config.store_timeout();

    let store: Arc<dyn LandmarkStore> = match config.store.r#type {
        StoreKind::Csv => {
            let path = crate::utils::validation::validate_required_field("store.path", &config.store.path)?;
            tracing::info!(path = %path, "Using CSV landmark store");
            Arc::new(TimeoutStore::new(CsvStore::new(path), timeout))
        }
        StoreKind::Memory => {
            let landmarks = match config.store_path() {
                Some(path) => CsvStore::new(path).all().await?,
                None => Vec::new(),
            };
            tracing::info!(rows = landmarks.len(), "Using in-memory landmark store");
            Arc::new(TimeoutStore::new(MemoryStore::new(landmarks), timeout))
        }
    };

    Ok(store)
}

pub async fn build_service(config: &TomlConfig) -> Result<LocatorService<dyn LandmarkStore>> {
    Ok(LocatorService::from_shared(build_store(config).await?))
}
