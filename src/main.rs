//! HTTP file server binary.
//!
//! GET serves files below the root directory, PUT/POST store the request
//! body, DELETE removes files and directory trees.

use httpfs::{app, cli::Cli};
use std::{process::ExitCode, sync::Arc};
use tracing::{Level, error, info};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let args: Cli = argh::from_env();
    let bind = args.bind;
    let state = match args.into_state() {
        Ok(state) => Arc::new(state),
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Serving {:?} at {}", state.root_dir, state.path_prefix);
    info!("Server running on: http://{}", bind);

    let listener = match tokio::net::TcpListener::bind(bind).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", bind, e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = axum::serve(listener, app(state)).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
