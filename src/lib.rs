pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod http;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{CsvStore, MemoryStore, TimeoutStore};
pub use crate::core::{CatalogReader, LocatorService, Resolver};
pub use domain::model::{Landmark, Resolution, ScannedCode};
pub use domain::ports::LandmarkStore;
pub use utils::error::{LocatorError, Result};
