//! Header flattening.

use std::collections::BTreeMap;

use axum::http::HeaderMap;

/// Collapse a header map to one value per name.
///
/// Only the first value of a repeated header is kept. Names come out
/// lowercase, as `http` normalizes them on insert.
pub fn flatten_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    headers
        .keys()
        .filter_map(|name| {
            headers.get(name).map(|value| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
        })
        .collect()
}
