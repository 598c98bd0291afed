//! Command definitions
//!
//! Request bodies as they appear on the wire, and the typed command the
//! engine dispatches.

use serde::{Deserialize, Serialize};

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Save,
    Delete,
    Extract,
}

impl CommandType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandType::Save => "save",
            CommandType::Delete => "delete",
            CommandType::Extract => "extract",
        }
    }
}

/// Body of a save request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRequest {
    /// Base64 encoded file content
    #[serde(rename = "FileBody")]
    pub file_body: String,

    #[serde(rename = "FileName")]
    pub file_name: String,
}

/// Body of a delete request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRequest {
    #[serde(rename = "FileName")]
    pub file_name: String,
}

/// Body of an extract request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractRequest {
    #[serde(rename = "FileName")]
    pub file_name: String,
}

/// A parsed command
#[derive(Debug, Clone)]
pub enum Command {
    /// Store `body` (still base64 encoded) under `name`
    Save { name: String, body: String },

    /// Remove the file called `name`
    Delete { name: String },

    /// Read back the file called `name`
    Extract { name: String },
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Save { .. } => CommandType::Save,
            Command::Delete { .. } => CommandType::Delete,
            Command::Extract { .. } => CommandType::Extract,
        }
    }

    /// File name the command addresses
    pub fn name(&self) -> &str {
        match self {
            Command::Save { name, .. } | Command::Delete { name } | Command::Extract { name } => {
                name
            }
        }
    }
}

impl From<SaveRequest> for Command {
    fn from(request: SaveRequest) -> Self {
        Command::Save {
            name: request.file_name,
            body: request.file_body,
        }
    }
}

impl From<DeleteRequest> for Command {
    fn from(request: DeleteRequest) -> Self {
        Command::Delete {
            name: request.file_name,
        }
    }
}

impl From<ExtractRequest> for Command {
    fn from(request: ExtractRequest) -> Self {
        Command::Extract {
            name: request.file_name,
        }
    }
}
