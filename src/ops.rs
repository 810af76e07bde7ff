//! Filesystem operations behind the HTTP methods.
//!
//! Each operation works on an already resolved path and reports failures as
//! [`FsError`]; turning outcomes into responses is left to the handlers.

use axum::http::Method;
use std::{fs::Metadata, io, path::Path};
use tokio::{
    fs::{self, File},
    io::{AsyncRead, AsyncWriteExt},
};

use crate::error::FsError;

/// Filesystem operation selected by a request method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Read,
    Write,
    Delete,
}

impl Operation {
    /// Maps a method to its operation. Unsupported methods yield `None`.
    pub fn from_method(method: &Method) -> Option<Self> {
        match *method {
            Method::GET => Some(Self::Read),
            Method::PUT | Method::POST => Some(Self::Write),
            Method::DELETE => Some(Self::Delete),
            _ => None,
        }
    }
}

/// Result of a delete that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deleted {
    Removed,
    Missing,
}

/// Replaces the file at `path` with the full contents of `body`.
///
/// Missing parent directories are created first. Returns the number of
/// bytes written.
pub async fn write_file<R>(path: &Path, mut body: R) -> Result<u64, FsError>
where
    R: AsyncRead + Unpin,
{
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let mut file = File::create(path).await?;
    let written = tokio::io::copy(&mut body, &mut file).await?;
    // tokio buffers writes on a background thread; flush before the handle drops
    file.flush().await?;

    Ok(written)
}

/// Removes the file at `path`, or the whole tree if it is a directory.
pub async fn delete_path(path: &Path) -> Result<Deleted, FsError> {
    let metadata = match fs::metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Deleted::Missing),
        Err(e) => return Err(e.into()),
    };

    if metadata.is_dir() {
        fs::remove_dir_all(path).await?;
    } else {
        fs::remove_file(path).await?;
    }
    Ok(Deleted::Removed)
}

/// Opens the regular file at `path` for reading.
///
/// Missing paths and directories yield `None`, which callers serve as 404.
pub async fn open_file(path: &Path) -> Result<Option<(File, Metadata)>, FsError> {
    let metadata = match fs::metadata(path).await {
        Ok(metadata) if metadata.is_dir() => return Ok(None),
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    match File::open(path).await {
        Ok(file) => Ok(Some((file, metadata))),
        // removed between stat and open
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
