//! Mapping of request paths onto the configured root directory.
//!
//! Resolution is purely lexical: `.` and `..` segments are folded without
//! touching the filesystem, so symlinks inside the root are left to the OS.

use std::path::{Path, PathBuf};

use crate::error::FsError;
use crate::state::AppState;

/// Resolves a raw (percent-encoded) request path to a file under the root.
///
/// The configured prefix is stripped when present; a path without it is
/// mapped as-is. The result always lies within the root directory, compared
/// segment by segment, so `/tmp-evil` never passes for a `/tmp` root.
/// The root itself resolves; see [`is_root`].
pub fn resolve_path(state: &AppState, url_path: &str) -> Result<PathBuf, FsError> {
    let decoded = urlencoding::decode(url_path)
        .map_err(|_| FsError::InvalidPath(url_path.to_string()))?;
    let relative = decoded
        .strip_prefix(state.path_prefix.as_str())
        .unwrap_or(&*decoded);

    let root = clean_root(&state.root_dir);
    let mut resolved = root.clone();
    push_segments(&mut resolved, relative);

    if !resolved.starts_with(&root) {
        return Err(FsError::PathTraversal);
    }
    Ok(resolved)
}

/// Whether a resolved path is the configured root directory itself.
pub fn is_root(state: &AppState, path: &Path) -> bool {
    path == clean_root(&state.root_dir).as_path()
}

/// Normalizes the configured root the same way request paths are.
fn clean_root(root: &Path) -> PathBuf {
    let mut cleaned = PathBuf::from("/");
    push_segments(&mut cleaned, &root.to_string_lossy());
    cleaned
}

fn push_segments(base: &mut PathBuf, path: &str) {
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            // popping at `/` is a no-op, like `cd ..` at the filesystem root
            ".." => {
                base.pop();
            }
            name => base.push(name),
        }
    }
}
