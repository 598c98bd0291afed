//! Configuration for filestash
//!
//! Centralized configuration with sensible defaults. Built once at startup,
//! either from the JSON config file ([`Config::load`]) or with the builder,
//! and then shared read-only for the life of the process.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, StashError};

/// Default HTTP listen address
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Default maximum request body size (64 MB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

/// Main configuration for a filestash instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Storage root: every stored file lives directly inside this directory.
    /// Created on the first save if missing.
    pub storage_dir: PathBuf,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen address
    pub listen_addr: String,

    /// Largest accepted request body (base64 inflates payloads by ~4/3)
    pub max_body_bytes: usize,
}

/// On-disk shape of the config file
#[derive(Debug, Deserialize)]
struct ConfigFile {
    storage_dir: PathBuf,
    #[serde(default)]
    listen_addr: Option<String>,
    #[serde(default)]
    max_body_bytes: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from("./storage"),
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Load configuration from a JSON file
    ///
    /// `storage_dir` is required; `listen_addr` and `max_body_bytes` fall back
    /// to their defaults. A relative `storage_dir` is kept relative to the
    /// process working directory.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            StashError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&raw).map_err(|e| match e {
            StashError::Config(msg) => StashError::Config(format!("{} ({})", msg, path.display())),
            other => other,
        })
    }

    /// Parse configuration from JSON text
    pub fn from_json(raw: &str) -> Result<Self> {
        let file: ConfigFile = serde_json::from_str(raw)
            .map_err(|e| StashError::Config(format!("invalid config: {e}")))?;

        if file.storage_dir.as_os_str().is_empty() {
            return Err(StashError::Config("storage_dir must not be empty".to_string()));
        }

        let mut builder = Config::builder().storage_dir(file.storage_dir);
        if let Some(addr) = file.listen_addr {
            builder = builder.listen_addr(addr);
        }
        if let Some(limit) = file.max_body_bytes {
            builder = builder.max_body_bytes(limit);
        }
        Ok(builder.build())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the storage root directory
    pub fn storage_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.storage_dir = path.into();
        self
    }

    /// Set the HTTP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the maximum request body size (in bytes)
    pub fn max_body_bytes(mut self, limit: usize) -> Self {
        self.config.max_body_bytes = limit;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
