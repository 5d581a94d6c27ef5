//! Error types surfaced by the request logger.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum RequestLogError {
    /// The self-probe could not reach the application URL.
    #[error("self-probe to {url} failed: {source}")]
    Probe {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid request log configuration: {0}")]
    Config(#[from] ConfigError),
}

/// A failed probe aborts the request the way an uncaught fault would.
impl IntoResponse for RequestLogError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request logging aborted the request");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
