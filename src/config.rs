//! Configuration management for cinedeck
//!
//! Handles config file loading/saving and API key resolution.
//! Config is stored at ~/.config/cinedeck/config.toml

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::api::{CatalogClient, StreamClient};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Catalog API key
    pub api_key: Option<String>,
    /// Override for the catalog API origin
    pub catalog_base_url: Option<String>,
    /// Override for the stream API origin
    pub stream_base_url: Option<String>,
}

impl Config {
    /// Get config file path (~/.config/cinedeck/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cinedeck").join("config.toml"))
    }

    /// Load config from file, or return default if not found
    pub fn load() -> Self {
        Self::path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::path().ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml)?;
        Ok(())
    }

    /// Resolve the catalog API key: CINEDECK_API_KEY env var wins, then the file value
    pub fn resolve_api_key(&self) -> Option<String> {
        std::env::var("CINEDECK_API_KEY")
            .ok()
            .or_else(|| self.api_key.clone())
    }

    /// Build a catalog client from this config
    pub fn catalog_client(&self) -> Result<CatalogClient> {
        let api_key = self
            .resolve_api_key()
            .ok_or_else(|| anyhow::anyhow!("No catalog API key configured"))?;

        Ok(match &self.catalog_base_url {
            Some(base) => CatalogClient::with_base_url(api_key, base.clone()),
            None => CatalogClient::new(api_key),
        })
    }

    /// Build a stream client from this config
    pub fn stream_client(&self) -> StreamClient {
        match &self.stream_base_url {
            Some(base) => StreamClient::with_base_url(base.clone()),
            None => StreamClient::new(),
        }
    }
}
