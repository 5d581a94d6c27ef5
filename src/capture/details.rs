use std::collections::BTreeMap;

use crate::capture::probe::ProbeStatus;
use crate::capture::request::RequestFacts;

/// Flat record describing one request. Built per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogDetails {
    pub protocol: String,
    pub request_url: String,
    pub time: String,
    pub hostname: String,
    pub method: String,
    pub path: String,
    pub status_code: u16,
    pub status_text: String,
    pub ip_address: Option<String>,
    pub memory_usage: String,
    pub user_agent: Option<String>,
    pub headers: BTreeMap<String, String>,
}

/// Process facts sampled at capture time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessFacts {
    pub time: String,
    pub hostname: String,
    pub memory_usage: String,
}

impl ProcessFacts {
    pub fn sample() -> Self {
        Self {
            time: super::process::now_formatted(),
            hostname: super::process::hostname(),
            memory_usage: super::process::memory_usage(),
        }
    }
}

impl LogDetails {
    pub fn assemble(request: RequestFacts, probe: ProbeStatus, process: ProcessFacts) -> Self {
        Self {
            protocol: request.protocol,
            request_url: request.full_url,
            time: process.time,
            hostname: process.hostname,
            method: request.method,
            path: request.path,
            status_code: probe.code,
            status_text: probe.reason,
            ip_address: request.client_ip,
            memory_usage: process.memory_usage,
            user_agent: request.user_agent,
            headers: request.headers,
        }
    }

    /// Value of the `host` header, if the client sent one.
    pub fn host(&self) -> Option<&str> {
        self.headers.get("host").map(String::as_str)
    }
}
