//! Network Module
//!
//! HTTP transport for the three storage endpoints.
//!
//! ## Architecture
//! - axum router on a tokio runtime
//! - Each request body is parsed, then the operation runs on the blocking
//!   thread pool (filesystem calls block)
//! - Every reply, success or failure, is an [`OperationResult`](crate::protocol::OperationResult)
//!
//! ## Endpoints
//! - `POST /SaveFileToStorage`
//! - `POST /DeleteFileInStorage`
//! - `POST /ExtractFromStorage`

mod server;
mod handlers;

pub use server::{router, shutdown_signal, Server};
pub use handlers::{status_code, DELETE_PATH, EXTRACT_PATH, SAVE_PATH};
