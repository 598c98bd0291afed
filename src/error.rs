//! Error types for filestash
//!
//! Provides a unified error type for all operations.
//!
//! `Display` carries full diagnostic context (operation, path, cause) and is
//! what gets logged. [`StashError::user_message`] is what callers see; it never
//! contains storage paths.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using StashError
pub type Result<T> = std::result::Result<T, StashError>;

/// Filesystem step that failed, used for log context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOp {
    Open,
    Write,
    Sync,
    Close,
    Rename,
    Read,
    Remove,
    Stat,
}

impl std::fmt::Display for IoOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let op = match self {
            IoOp::Open => "opening",
            IoOp::Write => "writing",
            IoOp::Sync => "syncing",
            IoOp::Close => "closing",
            IoOp::Rename => "renaming",
            IoOp::Read => "reading",
            IoOp::Remove => "deleting",
            IoOp::Stat => "inspecting",
        };
        f.write_str(op)
    }
}

/// Unified error type for filestash operations
#[derive(Debug, Error)]
pub enum StashError {
    // -------------------------------------------------------------------------
    // Request Errors
    // -------------------------------------------------------------------------
    #[error("Error reading request body: {0}")]
    RequestBody(String),

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Base64 decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Invalid file name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("File not found: {name}")]
    NotFound { name: String },

    #[error("Storage directory {} unavailable: {source}", .path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error {op} file {}: {source}", .path.display())]
    Io {
        op: IoOp,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("Network error: {0}")]
    Network(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Unexpected
    // -------------------------------------------------------------------------
    #[error("Internal error: {0}")]
    Internal(String),
}

impl StashError {
    pub(crate) fn io(op: IoOp, path: impl Into<PathBuf>, source: io::Error) -> Self {
        StashError::Io {
            op,
            path: path.into(),
            source,
        }
    }

    /// Returns true for failures caused by the caller rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            StashError::RequestBody(_)
                | StashError::MalformedRequest(_)
                | StashError::Decode(_)
                | StashError::InvalidName { .. }
                | StashError::NotFound { .. }
        )
    }

    /// Message safe to return to the caller (no storage paths)
    pub fn user_message(&self) -> String {
        match self {
            StashError::RequestBody(_) => "Error reading request body".to_string(),
            StashError::MalformedRequest(_) => "Error parsing JSON".to_string(),
            StashError::Decode(_) => "Error decoding base64".to_string(),
            StashError::InvalidName { name, reason } => {
                format!("Invalid file name {name:?}: {reason}")
            }
            StashError::NotFound { name } => format!("File not found: {name}"),
            StashError::StorageUnavailable { .. } => "Error creating storage directory".to_string(),
            StashError::Io { op, .. } => format!("Error {op} file"),
            StashError::Config(_) => "Server configuration error".to_string(),
            StashError::Network(_) | StashError::Internal(_) => "Internal server error".to_string(),
        }
    }
}
