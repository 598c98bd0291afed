//! Request Handlers
//!
//! One handler per endpoint, plus the mapping from errors to the uniform
//! JSON envelope.

use std::sync::Arc;

use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::engine::Engine;
use crate::error::{Result, StashError};
use crate::protocol::{Command, DeleteRequest, ExtractRequest, OperationResult, SaveRequest};

pub const SAVE_PATH: &str = "/SaveFileToStorage";
pub const DELETE_PATH: &str = "/DeleteFileInStorage";
pub const EXTRACT_PATH: &str = "/ExtractFromStorage";

#[tracing::instrument(skip_all)]
pub(crate) async fn save_file(
    State(engine): State<Arc<Engine>>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Json<OperationResult>> {
    let request: SaveRequest = parse_body(body)?;
    dispatch(engine, request.into()).await
}

#[tracing::instrument(skip_all)]
pub(crate) async fn delete_file(
    State(engine): State<Arc<Engine>>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Json<OperationResult>> {
    let request: DeleteRequest = parse_body(body)?;
    dispatch(engine, request.into()).await
}

#[tracing::instrument(skip_all)]
pub(crate) async fn extract_file(
    State(engine): State<Arc<Engine>>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Json<OperationResult>> {
    let request: ExtractRequest = parse_body(body)?;
    dispatch(engine, request.into()).await
}

pub(crate) async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(OperationResult::failure("Method not allowed")),
    )
        .into_response()
}

/// Parse a JSON request body; any failure is reported before dispatch
fn parse_body<T: DeserializeOwned>(body: std::result::Result<Bytes, BytesRejection>) -> Result<T> {
    let body = body.map_err(|e| StashError::RequestBody(e.body_text()))?;
    serde_json::from_slice(&body).map_err(|e| StashError::MalformedRequest(e.to_string()))
}

/// Run a command on the blocking pool
async fn dispatch(engine: Arc<Engine>, command: Command) -> Result<Json<OperationResult>> {
    let kind = command.command_type();
    let name = command.name().to_string();

    let result = tokio::task::spawn_blocking(move || engine.execute(command))
        .await
        .map_err(|e| {
            StashError::Internal(format!("{} of {:?} did not complete: {}", kind.as_str(), name, e))
        })??;

    tracing::info!("{} {:?} ok", kind.as_str(), name);
    Ok(Json(result))
}

/// HTTP status for an error; the body shape is the same for all of them
pub fn status_code(err: &StashError) -> StatusCode {
    match err {
        StashError::RequestBody(_)
        | StashError::MalformedRequest(_)
        | StashError::Decode(_)
        | StashError::InvalidName { .. } => StatusCode::BAD_REQUEST,
        StashError::NotFound { .. } => StatusCode::NOT_FOUND,
        StashError::StorageUnavailable { .. }
        | StashError::Io { .. }
        | StashError::Network(_)
        | StashError::Config(_)
        | StashError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for StashError {
    fn into_response(self) -> Response {
        // Full details (including paths) go to the log only.
        match &self {
            StashError::InvalidName { .. } => tracing::warn!("Rejected request: {}", self),
            e if e.is_client_error() => tracing::debug!("Client error: {}", self),
            _ => tracing::error!("Server error: {}", self),
        }

        (status_code(&self), Json(OperationResult::from(&self))).into_response()
    }
}
