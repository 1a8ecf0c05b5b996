//! Service configuration
//!
//! Every setting resolves through the same tiers: command line →
//! environment variable → TOML config file → compiled default. The
//! database connection string is the exception: it has no default, and
//! startup fails without one.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Default base URL of the external AI analysis service
pub const DEFAULT_AI_BASE_URL: &str = "http://ai:8001";

/// Default HTTP listen port
pub const DEFAULT_PORT: u16 = 8000;

/// Resolved service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Database connection string (required)
    pub database_url: String,
    /// Base URL of the external AI analysis service
    pub ai_base_url: String,
    /// HTTP listen port
    pub port: u16,
}

/// Contents of the optional TOML config file
#[derive(Debug, Default, Deserialize)]
pub struct TomlConfig {
    pub database_url: Option<String>,
    pub ai_base_url: Option<String>,
    pub port: Option<u16>,
}

impl TomlConfig {
    /// Load and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))
    }
}

/// Values already resolved from the command line and environment
/// (clap merges those two tiers before this struct is built)
#[derive(Debug, Default)]
pub struct ConfigOverrides {
    pub database_url: Option<String>,
    pub ai_base_url: Option<String>,
    pub port: Option<u16>,
}

impl Config {
    /// Merge override and file tiers into the final configuration
    pub fn resolve(overrides: ConfigOverrides, file: Option<TomlConfig>) -> Result<Self> {
        let file = file.unwrap_or_default();

        let database_url = overrides
            .database_url
            .or(file.database_url)
            .ok_or_else(|| {
                Error::Config(
                    "database connection string not configured. Set --database-url, \
                     PODIUM_DATABASE_URL, or database_url in the config file"
                        .to_string(),
                )
            })?;

        let ai_base_url = overrides
            .ai_base_url
            .or(file.ai_base_url)
            .unwrap_or_else(|| DEFAULT_AI_BASE_URL.to_string());

        let port = overrides.port.or(file.port).unwrap_or(DEFAULT_PORT);

        info!(ai_base_url = %ai_base_url, port = port, "Configuration resolved");

        Ok(Config {
            database_url,
            ai_base_url,
            port,
        })
    }
}
