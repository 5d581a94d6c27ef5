//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use crate::config::schema::RequestLogConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Environment variables that override file values.
pub const ENV_APP_URL: &str = "APP_URL";
pub const ENV_TAG: &str = "TAG";
pub const ENV_API_BASE: &str = "LOG_API_BASE";
pub const ENV_API_PATH: &str = "LOG_API_PATH";

/// Load a TOML file, apply environment overrides and validate.
pub fn load_config(path: &Path) -> Result<RequestLogConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut config = parse_config(&content)?;

    apply_overrides(&mut config, |key| std::env::var(key).ok());
    validate_config(&config).map_err(ConfigError::Validation)?;

    tracing::debug!(path = ?path, "Request log configuration loaded");
    Ok(config)
}

/// Parse TOML text into a configuration without touching the environment.
pub fn parse_config(content: &str) -> Result<RequestLogConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Overlay values found by `lookup` onto `config`.
///
/// Empty values are treated as unset.
pub fn apply_overrides<F>(config: &mut RequestLogConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

    if let Some(v) = get(ENV_APP_URL) {
        config.app_url = v;
    }
    if let Some(v) = get(ENV_TAG) {
        config.tag = Some(v);
    }
    if let Some(v) = get(ENV_API_BASE) {
        config.api_base = v;
    }
    if let Some(v) = get(ENV_API_PATH) {
        config.logs_path = v;
    }
}

impl RequestLogConfig {
    /// Defaults overlaid with the process environment, validated.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        apply_overrides(&mut config, |key| std::env::var(key).ok());
        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_parse_partial_file_keeps_defaults() {
        let config = parse_config(
            r#"
            app_url = "https://app.example.com"
            tag = "staging"

            [logging]
            json = true
            "#,
        )
        .unwrap();

        assert_eq!(config.app_url, "https://app.example.com");
        assert_eq!(config.tag.as_deref(), Some("staging"));
        assert_eq!(config.logs_path, "/api/logs");
        assert!(config.logging.json);
        assert_eq!(config.logging.level, "request_log=info");
    }

    #[test]
    fn test_parse_rejects_bad_toml() {
        let err = parse_config("app_url = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_env_overrides_win() {
        let env: HashMap<&str, &str> = [
            (ENV_APP_URL, "http://10.0.0.5:9000"),
            (ENV_TAG, "prod-eu"),
            (ENV_API_BASE, ""),
        ]
        .into_iter()
        .collect();

        let mut config = parse_config(r#"api_base = "https://logs.example.com""#).unwrap();
        apply_overrides(&mut config, |k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.app_url, "http://10.0.0.5:9000");
        assert_eq!(config.tag.as_deref(), Some("prod-eu"));
        // Empty variable does not clobber the file value.
        assert_eq!(config.api_base, "https://logs.example.com");
    }

    #[test]
    fn test_validation_error_message_lists_every_problem() {
        let err = ConfigError::Validation(vec![
            ValidationError::RelativeLogsPath("logs".into()),
            ValidationError::UnsupportedScheme {
                field: "app_url",
                scheme: "ws".into(),
            },
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: logs_path must start with '/', got \"logs\", app_url must use http or https, got ws"
        );
    }
}
