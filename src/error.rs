//! Error types and their HTTP mapping.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use std::path::PathBuf;

/// Failure of a filesystem operation triggered by a request
///
/// Every variant is reported to the client as `500 Internal Server Error`
/// with the message as a plain-text body. Missing files and unsupported
/// methods are outcomes, not errors, and never show up here.
#[derive(thiserror::Error, Debug)]
pub enum FsError {
    #[error("directory traversal attack!")]
    PathTraversal,

    #[error("refusing to remove the root directory")]
    RootDirectory,

    #[error("invalid request path: {0}")]
    InvalidPath(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for FsError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}

/// Rejected startup configuration
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("path prefix must start with a slash: {0:?}")]
    RelativePrefix(String),

    #[error("root directory must start with a slash: {0:?}")]
    RelativeRoot(PathBuf),
}
