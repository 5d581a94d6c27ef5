//! Configuration validation.
//!
//! Serde handles syntax; this checks semantics. All problems are collected
//! and returned together rather than stopping at the first one.

use url::Url;

use crate::config::schema::RequestLogConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is not a valid URL: {reason}")]
    InvalidUrl { field: &'static str, reason: String },

    #[error("{field} must use http or https, got {scheme}")]
    UnsupportedScheme { field: &'static str, scheme: String },

    #[error("logs_path must start with '/', got {0:?}")]
    RelativeLogsPath(String),
}

/// Validate a configuration, returning every error found.
pub fn validate_config(config: &RequestLogConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (field, value) in [("app_url", &config.app_url), ("api_base", &config.api_base)] {
        if let Err(e) = check_http_url(field, value) {
            errors.push(e);
        }
    }

    if !config.logs_path.starts_with('/') {
        errors.push(ValidationError::RelativeLogsPath(config.logs_path.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_http_url(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let url = Url::parse(value).map_err(|e| ValidationError::InvalidUrl {
        field,
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ValidationError::UnsupportedScheme {
            field,
            scheme: other.to_string(),
        }),
    }
}
