//! Shared application state.

use std::path::PathBuf;

use crate::error::ConfigError;

/// Default URL prefix stripped from request paths
pub const DEFAULT_PATH_PREFIX: &str = "/fs/";

/// Default directory files are stored under
pub const DEFAULT_ROOT_DIR: &str = "/tmp/";

/// Process-wide configuration shared read-only by every handler
///
/// Built once at startup and handed to the router as `Arc<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// URL path prefix stripped before mapping to the filesystem (e.g. "/fs/")
    pub path_prefix: String,
    /// Directory under which every served file lives (e.g. "/tmp/")
    pub root_dir: PathBuf,
}

impl AppState {
    /// Validates and builds the configuration.
    ///
    /// Both the prefix and the root must be absolute, i.e. start with `/`.
    pub fn new(
        path_prefix: impl Into<String>,
        root_dir: impl Into<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let path_prefix = path_prefix.into();
        let root_dir = root_dir.into();

        if !path_prefix.starts_with('/') {
            return Err(ConfigError::RelativePrefix(path_prefix));
        }
        if !root_dir.to_string_lossy().starts_with('/') {
            return Err(ConfigError::RelativeRoot(root_dir));
        }

        Ok(Self {
            path_prefix,
            root_dir,
        })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            path_prefix: DEFAULT_PATH_PREFIX.to_string(),
            root_dir: PathBuf::from(DEFAULT_ROOT_DIR),
        }
    }
}
