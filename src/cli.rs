//! Command-line interface configuration.

use argh::FromArgs;
use std::{net::SocketAddr, path::PathBuf};

use crate::error::ConfigError;
use crate::state::AppState;

/// Exposes a directory over HTTP: GET reads, PUT/POST writes, DELETE removes
#[derive(Debug, FromArgs)]
pub struct Cli {
    /// URL path at which files are served, must start with a slash (default: '/fs/')
    #[argh(option, default = "String::from(crate::state::DEFAULT_PATH_PREFIX)")]
    pub fspath: String,

    /// directory in which files are stored, must start with a slash (default: '/tmp/')
    #[argh(option, default = "PathBuf::from(crate::state::DEFAULT_ROOT_DIR)")]
    pub fsroot: PathBuf,

    /// server bind address (default: '127.0.0.1:8080')
    #[argh(option, default = "SocketAddr::from(([127, 0, 0, 1], 8080))")]
    pub bind: SocketAddr,
}

impl Cli {
    /// Validates the filesystem flags into the shared handler state.
    pub fn into_state(self) -> Result<AppState, ConfigError> {
        AppState::new(self.fspath, self.fsroot)
    }
}
