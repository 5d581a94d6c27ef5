//! HTTP integration.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → middleware.rs (skip self-probes, snapshot request)
//!     → RequestLogger::capture (probe app_url, assemble LogDetails)
//!     → RequestLogger::ship (POST to logging API, outcome ignored)
//!     → next handler
//! ```

pub mod middleware;

pub use middleware::request_log_middleware;
