//! Fire-and-forget delivery of log records.

use reqwest::Client;

use crate::ship::payload::OutboundPayload;

/// Posts records to the logging API. One attempt; the outcome is never
/// reported back to the caller.
#[derive(Debug, Clone)]
pub struct LogShipper {
    client: Client,
    endpoint: String,
}

impl LogShipper {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn ship(&self, payload: &OutboundPayload) {
        match self.client.post(&self.endpoint).json(payload).send().await {
            Ok(response) => {
                tracing::debug!(
                    endpoint = %self.endpoint,
                    status = %response.status(),
                    "Log record shipped"
                );
            }
            Err(e) => {
                tracing::debug!(endpoint = %self.endpoint, error = %e, "Log record dropped");
            }
        }
    }
}
