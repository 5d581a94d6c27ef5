//! Request logging middleware for axum applications.
//!
//! For every inbound request the middleware records protocol, URL, method,
//! path, client IP, headers and a few process facts, probes the
//! application's own base URL for a status line, and posts the result to a
//! remote logging API before handing the request on.
//!
//! ```text
//!     Client Request
//!     ───────────────▶ request_log_middleware ───────────────▶ handler
//!                         │        │
//!                         │        └── GET  {app_url}            (self-probe)
//!                         └─────────── POST {api_base}/api/logs  (log record)
//! ```
//!
//! ```no_run
//! use axum::{routing::get, Router};
//! use request_log::{RequestLogConfig, RequestLogger};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let logger = RequestLogger::new(RequestLogConfig::from_env()?)?;
//! let app = logger.attach(Router::new().route("/", get(|| async { "hello" })));
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//! axum::serve(
//!     listener,
//!     app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```

pub mod capture;
pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod observability;
pub mod ship;

pub use capture::LogDetails;
pub use config::RequestLogConfig;
pub use error::RequestLogError;
pub use http::request_log_middleware;
pub use logger::RequestLogger;
pub use ship::OutboundPayload;
