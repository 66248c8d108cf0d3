//! HTTP request handlers for the exporter.
//!
//! Serves the metrics document, a health check and a landing page using axum.

use crate::collectors::{AsteriskPoller, CollectorRegistry};
use crate::exposition::CONTENT_TYPE;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router as AxumRouter,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, warn};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Poller running console commands
    pub poller: Arc<AsteriskPoller>,
    /// Enabled collectors
    pub registry: Arc<CollectorRegistry>,
    /// Path the metrics document is served on
    pub metrics_path: String,
    /// Permits for concurrent scrapes, `None` when unlimited
    pub limiter: Option<Arc<Semaphore>>,
}

/// Scrape limiter for `max_requests`, where 0 disables the limit
pub fn scrape_limiter(max_requests: usize) -> Option<Arc<Semaphore>> {
    (max_requests > 0).then(|| Arc::new(Semaphore::new(max_requests)))
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// The scrape task panicked or was cancelled
    Scrape(String),
    /// Every scrape permit is in use
    TooManyRequests,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Scrape(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::TooManyRequests => (
                StatusCode::SERVICE_UNAVAILABLE,
                "too many concurrent scrapes".to_string(),
            ),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

/// GET <metrics_path> - Run every enabled collector
async fn metrics(State(state): State<AppState>) -> Result<Response, AppError> {
    // held until the scrape finishes, even if the client goes away
    let permit = match &state.limiter {
        Some(limiter) => match limiter.clone().try_acquire_owned() {
            Ok(permit) => Some(permit),
            Err(_) => {
                warn!("rejecting scrape, concurrency limit reached");
                return Err(AppError::TooManyRequests);
            }
        },
        None => None,
    };

    // console commands block, keep them off the async workers
    let text = tokio::task::spawn_blocking(move || {
        let _permit = permit;
        state.registry.scrape(&state.poller)
    })
    .await
    .map_err(|e| {
        error!("scrape task failed: {}", e);
        AppError::Scrape(e.to_string())
    })?;

    Ok(([(header::CONTENT_TYPE, CONTENT_TYPE)], text).into_response())
}

/// GET /-/healthy - Liveness check
async fn healthy() -> &'static str {
    "Healthy"
}

/// GET / - Landing page
async fn landing(State(state): State<AppState>) -> Html<String> {
    Html(format!(
        "<html>\n\
         <head><title>Asterisk Exporter</title></head>\n\
         <body>\n\
         <h1>Asterisk Exporter</h1>\n\
         <p><a href=\"{}\">Metrics</a></p>\n\
         </body>\n\
         </html>\n",
        state.metrics_path
    ))
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route(&state.metrics_path, get(metrics))
        .route("/-/healthy", get(healthy))
        .route("/", get(landing))
        .with_state(state)
}
