//! Response definitions
//!
//! The single envelope used for every reply, success or failure.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StashError};

use super::codec;

/// Outcome of one operation, serialized as the response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResult {
    /// Base64 file content, only present for a successful extract
    #[serde(rename = "FileBody", default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(rename = "Success")]
    pub success: bool,

    #[serde(rename = "Message")]
    pub message: String,
}

impl OperationResult {
    /// Create a success result without a body
    pub fn ok() -> Self {
        Self {
            body: None,
            success: true,
            message: String::new(),
        }
    }

    /// Create a success result carrying encoded file content
    pub fn with_body(body: String) -> Self {
        Self {
            body: Some(body),
            success: true,
            message: String::new(),
        }
    }

    /// Create a failure result
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            body: None,
            success: false,
            message: message.into(),
        }
    }

    /// Decode the carried file content, `None` if the result has no body
    pub fn decode_body(&self) -> Option<Result<Vec<u8>>> {
        self.body.as_deref().map(codec::decode)
    }
}

impl From<&StashError> for OperationResult {
    fn from(err: &StashError) -> Self {
        OperationResult::failure(err.user_message())
    }
}
