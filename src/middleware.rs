//! Request logging middleware.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use nanoid::nanoid;
use std::time::Instant;
use tracing::info;

use crate::colors::{colored_id, colored_status};

/// Short random identifier attached to every request
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Middleware that logs every request with a unique colored ID
///
/// This middleware:
/// 1. Generates a short nanoid for each request
/// 2. Logs the method and path
/// 3. Stores the ID in request extensions for the handlers
/// 4. Logs the final status and total latency once the handler is done
pub async fn log_requests(mut req: Request<Body>, next: Next) -> Response {
    let id = nanoid!(5);
    let start_time = Instant::now();

    info!("{} → {} {}", colored_id(&id), req.method(), req.uri().path());
    req.extensions_mut().insert(RequestId(id.clone()));

    let response = next.run(req).await;

    info!(
        "{} ← {} ({}ms)",
        colored_id(&id),
        colored_status(response.status()),
        start_time.elapsed().as_millis()
    );
    response
}
