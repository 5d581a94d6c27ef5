//! Self-probe of the host application.

use hyper::ext::ReasonPhrase;
use reqwest::Client;
use uuid::Uuid;

use crate::error::RequestLogError;

/// Header carried by the probe request so the middleware can let it through
/// untouched instead of probing again. Its value is the probe's token.
pub const PROBE_HEADER: &str = "x-request-log-probe";

/// Status line returned by the probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeStatus {
    pub code: u16,
    pub reason: String,
}

impl From<reqwest::StatusCode> for ProbeStatus {
    fn from(status: reqwest::StatusCode) -> Self {
        Self {
            code: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }
}

impl ProbeStatus {
    /// Status line as the server sent it.
    ///
    /// hyper keeps a non-canonical reason phrase as a response extension;
    /// without one the canonical phrase for the code is used.
    pub fn from_response(response: &reqwest::Response) -> Self {
        let mut status = Self::from(response.status());
        if let Some(phrase) = response.extensions().get::<ReasonPhrase>() {
            status.reason = String::from_utf8_lossy(phrase.as_bytes()).into_owned();
        }
        status
    }
}

/// GETs the application's own base URL to obtain a status line.
#[derive(Debug, Clone)]
pub struct SelfProbe {
    client: Client,
    url: String,
    token: String,
}

impl SelfProbe {
    /// A fresh random token is drawn per probe, so only requests sent by
    /// this probe carry a matching [`PROBE_HEADER`].
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            token: Uuid::new_v4().to_string(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// True if `value` is this probe's own [`PROBE_HEADER`] value.
    pub fn is_own(&self, value: &[u8]) -> bool {
        value == self.token.as_bytes()
    }

    /// One GET, no retry. Any status is a result; only transport failures
    /// are errors.
    pub async fn check(&self) -> Result<ProbeStatus, RequestLogError> {
        let response = self
            .client
            .get(&self.url)
            .header(PROBE_HEADER, &self.token)
            .send()
            .await
            .map_err(|source| {
                tracing::warn!(url = %self.url, error = %source, "Self-probe failed");
                RequestLogError::Probe {
                    url: self.url.clone(),
                    source,
                }
            })?;

        let status = ProbeStatus::from_response(&response);
        tracing::debug!(
            url = %self.url,
            status = status.code,
            reason = %status.reason,
            "Self-probe answered"
        );
        Ok(status)
    }
}
