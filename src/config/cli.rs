use crate::config::toml_config::{StoreKind, TomlConfig};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::net::IpAddr;

#[derive(Debug, Clone, Parser)]
#[command(name = "landmark-locator")]
#[command(about = "Serves the landmark catalog and resolves scanned building codes")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long)]
    pub address: Option<IpAddr>,

    #[arg(short, long)]
    pub port: Option<u16>,

    /// CSV file holding the landmark catalog
    #[arg(long)]
    pub data: Option<String>,

    /// Keep the catalog in memory, loaded once from --data
    #[arg(long)]
    pub in_memory: bool,

    /// Upper bound for each store query, in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Directory served for requests outside the API
    #[arg(long)]
    pub static_dir: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Loads the config file when given and applies command line overrides
    /// on top of it.
    pub fn into_settings(self) -> Result<TomlConfig> {
        let mut settings = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(address) = self.address {
            settings.server.address = address;
        }
        if let Some(port) = self.port {
            settings.server.port = port;
        }
        if let Some(data) = self.data {
            settings.store.path = Some(data);
        }
        if self.in_memory {
            settings.store.r#type = StoreKind::Memory;
        }
        if let Some(timeout_ms) = self.timeout_ms {
            settings.store.timeout_ms = timeout_ms;
        }
        if let Some(dir) = self.static_dir {
            settings.server.static_dir = Some(dir);
        }
        settings.logging.verbose |= self.verbose;
        settings.logging.json |= self.json_logs;

        settings.validate()?;
        Ok(settings)
    }
}
