//! Wire body for the logging API.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::capture::LogDetails;

pub const RESPONSE_MESSAGE: &str = "Project created successfully";
pub const PAYLOAD_TEXT: &str = "Payload";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundPayload {
    pub request_user_agent: Option<String>,
    pub request_host: Option<String>,
    pub request_url: String,
    pub request_method: String,
    pub status_code: u16,
    pub status_message: String,
    pub requested_at: String,
    pub request_ip: Option<String>,
    pub response_message: &'static str,
    pub protocol: String,
    pub payload: &'static str,
    pub tag: Option<String>,
    pub meta: PayloadMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayloadMeta {
    #[serde(rename = "Hostname")]
    pub hostname: String,
    #[serde(rename = "Path")]
    pub path: String,
    #[serde(rename = "Memory_usage")]
    pub memory_usage: String,
    #[serde(rename = "HEADERS")]
    pub headers: BTreeMap<String, String>,
}

impl OutboundPayload {
    pub fn from_details(details: &LogDetails, tag: Option<&str>) -> Self {
        Self {
            request_user_agent: details.user_agent.clone(),
            request_host: details.host().map(str::to_string),
            request_url: details.request_url.clone(),
            request_method: details.method.clone(),
            status_code: details.status_code,
            status_message: details.status_text.clone(),
            requested_at: details.time.clone(),
            request_ip: details.ip_address.clone(),
            response_message: RESPONSE_MESSAGE,
            protocol: details.protocol.clone(),
            payload: PAYLOAD_TEXT,
            tag: tag.map(str::to_string),
            meta: PayloadMeta {
                hostname: details.hostname.clone(),
                path: details.path.clone(),
                memory_usage: details.memory_usage.clone(),
                headers: details.headers.clone(),
            },
        }
    }
}
