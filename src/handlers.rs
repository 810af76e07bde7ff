//! HTTP request handlers.

use axum::{
    body::Body,
    extract::{Extension, Request, State},
    http::{HeaderMap, HeaderValue, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use futures_util::TryStreamExt;
use httpdate::{fmt_http_date, parse_http_date};
use std::{
    io,
    pin::pin,
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};
use tokio_util::io::{ReaderStream, StreamReader};
use tracing::{info, warn};

use crate::colors::{colored_id, operation_tag};
use crate::error::FsError;
use crate::middleware::RequestId;
use crate::ops::{self, Deleted, Operation};
use crate::resolve::{is_root, resolve_path};
use crate::state::AppState;

/// Entry point for every request: picks the operation from the method
///
/// Unsupported methods get an empty 404 without touching the filesystem.
/// Errors returned by an operation become a 500 carrying the error text.
pub async fn handle_fs(
    State(state): State<Arc<AppState>>,
    Extension(RequestId(id)): Extension<RequestId>,
    req: Request,
) -> Response {
    let Some(op) = Operation::from_method(req.method()) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let (parts, body) = req.into_parts();
    let result = match op {
        Operation::Read => handle_get(&state, &id, &parts.uri, &parts.headers).await,
        Operation::Write => handle_put(&state, &id, &parts.uri, body).await,
        Operation::Delete => handle_delete(&state, &id, &parts.uri).await,
    };

    result.unwrap_or_else(|e| {
        warn!("{} {} failed: {}", colored_id(&id), operation_tag(op), e);
        e.into_response()
    })
}

/// Streams a file back with a content type guessed from its extension
///
/// Missing files and directories are answered with 404. The file's
/// modification time is sent as `Last-Modified`, and a request whose
/// `If-Modified-Since` is not older than it gets an empty 304.
pub async fn handle_get(
    state: &AppState,
    id: &str,
    uri: &Uri,
    request_headers: &HeaderMap,
) -> Result<Response, FsError> {
    let path = resolve_path(state, uri.path())?;

    let Some((file, metadata)) = ops::open_file(&path).await? else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    let mut response_headers = HeaderMap::new();
    let modified = metadata.modified().ok();
    if let Some(value) = modified.and_then(|m| HeaderValue::from_str(&fmt_http_date(m)).ok()) {
        response_headers.insert(header::LAST_MODIFIED, value);
    }

    if let Some(modified) = modified {
        if !modified_since(modified, request_headers.get(header::IF_MODIFIED_SINCE)) {
            return Ok((StatusCode::NOT_MODIFIED, response_headers).into_response());
        }
    }

    info!(
        "{} {} {} ({} bytes)",
        colored_id(id),
        operation_tag(Operation::Read),
        path.display(),
        metadata.len()
    );

    // no Content-Length: the file may change size while it streams
    let mime_type = mime_guess::from_path(&path).first_or_octet_stream();
    Ok((
        response_headers,
        [(header::CONTENT_TYPE, mime_type.to_string())],
        Body::from_stream(ReaderStream::new(file)),
    )
        .into_response())
}

/// Whether a file changed after the date a client holds it from.
///
/// Without a parseable `If-Modified-Since` the file always counts as
/// modified. HTTP dates only carry whole seconds, so sub-second parts of
/// the modification time are ignored.
fn modified_since(modified: SystemTime, if_modified_since: Option<&HeaderValue>) -> bool {
    let Some(since) = if_modified_since
        .and_then(|value| value.to_str().ok())
        .and_then(|value| parse_http_date(value).ok())
    else {
        return true;
    };

    let secs = |time: SystemTime| {
        time.duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    };
    secs(modified) > secs(since)
}

/// Stores the request body as the file's new content (PUT and POST)
pub async fn handle_put(
    state: &AppState,
    id: &str,
    uri: &Uri,
    body: Body,
) -> Result<Response, FsError> {
    let path = resolve_path(state, uri.path())?;

    let reader = pin!(StreamReader::new(
        body.into_data_stream().map_err(io::Error::other)
    ));
    let written = ops::write_file(&path, reader).await?;

    info!(
        "{} {} {} ({} bytes)",
        colored_id(id),
        operation_tag(Operation::Write),
        path.display(),
        written
    );
    Ok(StatusCode::OK.into_response())
}

/// Removes a file, or a directory with everything below it
///
/// The root directory itself is never removed.
pub async fn handle_delete(state: &AppState, id: &str, uri: &Uri) -> Result<Response, FsError> {
    let path = resolve_path(state, uri.path())?;
    if is_root(state, &path) {
        return Err(FsError::RootDirectory);
    }

    match ops::delete_path(&path).await? {
        Deleted::Removed => {
            info!(
                "{} {} {}",
                colored_id(id),
                operation_tag(Operation::Delete),
                path.display()
            );
            Ok(StatusCode::OK.into_response())
        }
        Deleted::Missing => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}
