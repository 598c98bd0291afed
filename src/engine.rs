//! Engine Module
//!
//! Ties the protocol and storage layers together.
//!
//! ## Responsibilities
//! - Route commands to the matching storage operation
//! - Decode and validate request fields before any filesystem access
//! - Hold the per-name lock for the whole filesystem phase
//! - Build the success result (encoding extracted content)

use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::protocol::{codec, Command, OperationResult};
use crate::storage::{FileName, FileStore, NameLocks};

/// The main storage engine
///
/// ## Concurrency Model: per-name mutual exclusion
///
/// - Every save/delete/extract on name `n` holds the lock for `n` from its
///   first filesystem call to its last, so operations on one name are
///   totally ordered
/// - Operations on different names run fully in parallel
/// - All methods take `&self`; share the engine with `Arc<Engine>`
pub struct Engine {
    /// Engine configuration
    config: Config,

    /// Filesystem operations under the storage root
    store: FileStore,

    /// Serializes operations per file name
    locks: NameLocks,
}

impl Engine {
    /// Create an engine for the given config
    ///
    /// Removes temporary files left by interrupted saves of an earlier run.
    /// The storage root itself is created by the first save.
    pub fn open(config: Config) -> Self {
        let store = FileStore::new(config.storage_dir.clone());
        if let Err(e) = store.remove_orphaned_temps() {
            tracing::warn!("Could not clean up temporary files: {}", e);
        }
        Self {
            config,
            store,
            locks: NameLocks::new(),
        }
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified storage directory
    pub fn open_path(path: &Path) -> Self {
        Self::open(Config::builder().storage_dir(path).build())
    }

    /// Execute a command
    ///
    /// Routes commands to appropriate handlers and builds the success result
    pub fn execute(&self, command: Command) -> Result<OperationResult> {
        match command {
            Command::Save { name, body } => {
                self.save_encoded(&name, &body)?;
                Ok(OperationResult::ok())
            }
            Command::Delete { name } => {
                self.delete(&name)?;
                Ok(OperationResult::ok())
            }
            Command::Extract { name } => {
                let data = self.extract(&name)?;
                Ok(OperationResult::with_body(codec::encode(&data)))
            }
        }
    }

    /// Save base64 `body` under `name`
    ///
    /// Steps:
    /// 1. Decode body (nothing on disk is touched if this fails)
    /// 2. Validate name
    /// 3. Acquire name lock
    /// 4. Durable atomic write
    pub fn save_encoded(&self, name: &str, body: &str) -> Result<()> {
        let data = codec::decode(body).map_err(|e| {
            tracing::debug!("Base64 decode error for {:?}: {}", name, e);
            e
        })?;
        self.save(name, &data)
    }

    /// Save raw bytes under `name`
    pub fn save(&self, name: &str, data: &[u8]) -> Result<()> {
        let name = FileName::parse(name)?;
        let _guard = self.locks.lock(&name);
        self.store.save(&name, data)
    }

    /// Delete the file called `name`
    pub fn delete(&self, name: &str) -> Result<()> {
        let name = FileName::parse(name)?;
        let _guard = self.locks.lock(&name);
        self.store.delete(&name)
    }

    /// Read back the file called `name`
    pub fn extract(&self, name: &str) -> Result<Vec<u8>> {
        let name = FileName::parse(name)?;
        let _guard = self.locks.lock(&name);
        self.store.extract(&name)
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Get the storage directory path
    pub fn storage_dir(&self) -> &Path {
        self.store.root()
    }

    /// Number of names with an operation in flight
    pub fn active_names(&self) -> usize {
        self.locks.active()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
