//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every field has a default so a minimal (or empty) file is valid.

use serde::{Deserialize, Serialize};

/// Root configuration for the request logger.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RequestLogConfig {
    /// Base URL of the host application, probed once per logged request.
    pub app_url: String,

    /// Base URL of the remote logging API.
    pub api_base: String,

    /// Path appended to `api_base` when shipping a record.
    pub logs_path: String,

    /// Label attached to every shipped record (e.g. environment or service).
    pub tag: Option<String>,

    /// Local diagnostics for the logger itself.
    pub logging: LoggingConfig,
}

impl Default for RequestLogConfig {
    fn default() -> Self {
        Self {
            app_url: "http://localhost:8000".to_string(),
            api_base: "http://localhost:8080".to_string(),
            logs_path: "/api/logs".to_string(),
            tag: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl RequestLogConfig {
    /// Full URL the shipper posts to.
    pub fn logs_endpoint(&self) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), self.logs_path)
    }
}

/// `tracing` subscriber settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, used when `RUST_LOG` is unset.
    pub level: String,

    /// Emit JSON lines instead of the human-readable format.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "request_log=info".to_string(),
            json: false,
        }
    }
}
