//! Synchronous snapshot of the inbound request.
//!
//! Taken before any await point so the request itself (whose body is not
//! `Sync`) is never borrowed across the outbound calls.

use std::collections::BTreeMap;
use std::net::SocketAddr;

use axum::extract::ConnectInfo;
use axum::http::{header, Request, Version};

use crate::capture::headers::flatten_headers;

/// Fields read off the inbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestFacts {
    /// e.g. `HTTP/1.1`
    pub protocol: String,
    pub full_url: String,
    pub method: String,
    /// Path without the leading slash; `/` for the root.
    pub path: String,
    pub client_ip: Option<String>,
    pub user_agent: Option<String>,
    pub headers: BTreeMap<String, String>,
}

impl RequestFacts {
    pub fn from_request<B>(request: &Request<B>) -> Self {
        let headers = flatten_headers(request.headers());

        let client_ip = request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string());

        let user_agent = headers.get(header::USER_AGENT.as_str()).cloned();

        Self {
            protocol: protocol_name(request.version()).to_string(),
            full_url: full_url(request),
            method: request.method().to_string(),
            path: normalize_path(request.uri().path()),
            client_ip,
            user_agent,
            headers,
        }
    }
}

fn protocol_name(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "HTTP/0.9",
        Version::HTTP_10 => "HTTP/1.0",
        Version::HTTP_11 => "HTTP/1.1",
        Version::HTTP_2 => "HTTP/2.0",
        Version::HTTP_3 => "HTTP/3.0",
        _ => "HTTP/1.1",
    }
}

/// Reconstruct `scheme://authority/path?query`.
///
/// Origin-form requests (the usual case on a server) carry no scheme or
/// authority, so those fall back to `http` and the `Host` header. Trailing
/// slashes are dropped from the path, so the root renders as
/// `http://host` and `/widgets/?x=1` as `http://host/widgets?x=1`.
fn full_url<B>(request: &Request<B>) -> String {
    let uri = request.uri();
    let scheme = uri.scheme_str().unwrap_or("http");
    let authority = uri
        .authority()
        .map(|a| a.as_str().to_string())
        .or_else(|| {
            request
                .headers()
                .get(header::HOST)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        })
        .unwrap_or_else(|| "localhost".to_string());
    let path = uri.path().trim_end_matches('/');

    match uri.query() {
        Some(query) => format!("{}://{}{}?{}", scheme, authority, path, query),
        None => format!("{}://{}{}", scheme, authority, path),
    }
}

fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}
