//! # filestash
//!
//! A small network-accessible file store with:
//! - Base64-in-JSON payloads over HTTP
//! - Durable saves (fsync of the file and its directory)
//! - Atomic overwrite via temporary file + rename
//! - Per-name serialization of concurrent operations
//! - File names confined to a single storage directory
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      HTTP Server                             │
//! │          POST /SaveFileToStorage  /DeleteFileInStorage       │
//! │               /ExtractFromStorage                            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  JSON → Command
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Engine                                 │
//! │        (decode, validate name, per-name lock)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!               ┌───────────────┐
//!               │   FileStore   │
//!               │ {storage_dir} │
//!               └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod storage;
pub mod network;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, StashError};
pub use config::Config;
pub use engine::Engine;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of filestash
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
