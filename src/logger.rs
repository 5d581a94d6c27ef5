//! The request logger handle shared by every request.

use std::sync::Arc;

use reqwest::Client;

use crate::capture::{LogDetails, ProcessFacts, RequestFacts, SelfProbe};
use crate::config::validation::validate_config;
use crate::config::{ConfigError, RequestLogConfig};
use crate::error::RequestLogError;
use crate::ship::{LogShipper, OutboundPayload};

/// Cheap to clone; all clones share one HTTP client and one config.
#[derive(Clone)]
pub struct RequestLogger {
    inner: Arc<Inner>,
}

struct Inner {
    config: RequestLogConfig,
    probe: SelfProbe,
    shipper: LogShipper,
}

impl RequestLogger {
    /// Validate `config` and build the outbound client.
    pub fn new(config: RequestLogConfig) -> Result<Self, RequestLogError> {
        Self::with_client(config, Client::new())
    }

    /// Like [`RequestLogger::new`], reusing an existing client for both
    /// outbound calls.
    pub fn with_client(config: RequestLogConfig, client: Client) -> Result<Self, RequestLogError> {
        validate_config(&config).map_err(ConfigError::Validation)?;

        let probe = SelfProbe::new(client.clone(), config.app_url.clone());
        let shipper = LogShipper::new(client, config.logs_endpoint());

        tracing::info!(
            app_url = %config.app_url,
            endpoint = %shipper.endpoint(),
            tag = ?config.tag,
            "Request logger configured"
        );

        Ok(Self {
            inner: Arc::new(Inner {
                config,
                probe,
                shipper,
            }),
        })
    }

    pub fn config(&self) -> &RequestLogConfig {
        &self.inner.config
    }

    /// True if `value` is the header value this logger's probe sends.
    pub fn is_own_probe(&self, value: &[u8]) -> bool {
        self.inner.probe.is_own(value)
    }

    /// Header value this logger's probe sends.
    pub fn probe_token(&self) -> &str {
        self.inner.probe.token()
    }

    /// Probe the application and assemble the record for a request snapshot
    /// taken with [`RequestFacts::from_request`].
    ///
    /// Probe transport failures propagate.
    pub async fn capture(&self, facts: RequestFacts) -> Result<LogDetails, RequestLogError> {
        let status = self.inner.probe.check().await?;
        Ok(LogDetails::assemble(facts, status, ProcessFacts::sample()))
    }

    /// Send `details` to the logging API, ignoring the outcome.
    pub async fn ship(&self, details: &LogDetails) {
        let payload = OutboundPayload::from_details(details, self.inner.config.tag.as_deref());
        self.inner.shipper.ship(&payload).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidationError;

    #[test]
    fn test_rejects_invalid_config() {
        let config = RequestLogConfig {
            app_url: "localhost:8000".into(),
            ..Default::default()
        };

        match RequestLogger::new(config) {
            Err(RequestLogError::Config(ConfigError::Validation(errors))) => {
                assert_eq!(errors.len(), 1);
                assert!(matches!(
                    errors[0],
                    ValidationError::UnsupportedScheme { field: "app_url", .. }
                        | ValidationError::InvalidUrl { field: "app_url", .. }
                ));
            }
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("invalid config accepted"),
        }
    }

    #[tokio::test]
    async fn test_probe_failure_propagates_from_capture() {
        // Port 9 (discard) on loopback is reliably closed in test environments.
        let config = RequestLogConfig {
            app_url: "http://127.0.0.1:9".into(),
            ..Default::default()
        };
        let logger = RequestLogger::new(config).unwrap();
        let request = axum::http::Request::builder().uri("/").body(()).unwrap();

        let err = logger
            .capture(RequestFacts::from_request(&request))
            .await
            .unwrap_err();
        assert!(matches!(err, RequestLogError::Probe { .. }));
    }
}
