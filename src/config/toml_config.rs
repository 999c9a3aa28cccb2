use crate::core::ConfigProvider;
use crate::utils::error::{LocatorError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_address")]
    pub address: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
    pub static_dir: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    #[default]
    Csv,
    Memory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub r#type: StoreKind,
    /// For `csv`, the file every query reads. For `memory`, a one-time seed:
    /// the memory store is a separate collection that owns its rows after
    /// startup, not a view of the file, and later edits to the file are not
    /// seen.
    pub path: Option<String>,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub json: bool,
}

fn default_address() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: DEFAULT_PORT,
            static_dir: None,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            r#type: StoreKind::default(),
            path: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LocatorError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. Unknown variables are
    /// left untouched.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LocatorError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if self.store.r#type == StoreKind::Csv {
            let path = validation::validate_required_field("store.path", &self.store.path)?;
            validation::validate_path("store.path", path)?;
            validation::validate_file_extension("store.path", path, &["csv"])?;
        } else if let Some(path) = &self.store.path {
            validation::validate_path("store.path", path)?;
            validation::validate_file_extension("store.path", path, &["csv"])?;
        }

        validation::validate_positive_number("store.timeout_ms", self.store.timeout_ms, 1)?;

        if let Some(dir) = &self.server.static_dir {
            validation::validate_non_empty_string("server.static_dir", dir)?;
            validation::validate_path("server.static_dir", dir)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.server.address, self.server.port)
    }

    fn store_path(&self) -> Option<&str> {
        self.store.path.as_deref()
    }

    fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store.timeout_ms)
    }

    fn static_dir(&self) -> Option<&str> {
        self.server.static_dir.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
