//! Request logging middleware.
//!
//! Runs before the inner handler: snapshot, probe, ship, then call through.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
    Router,
};

use crate::capture::{RequestFacts, PROBE_HEADER};
use crate::error::RequestLogError;
use crate::logger::RequestLogger;

pub async fn request_log_middleware(
    State(logger): State<RequestLogger>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, RequestLogError> {
    // Our own probe; logging it would probe again. Any other value is
    // logged like a normal request.
    let own_probe = request
        .headers()
        .get(PROBE_HEADER)
        .is_some_and(|value| logger.is_own_probe(value.as_bytes()));
    if own_probe {
        return Ok(next.run(request).await);
    }

    let facts = RequestFacts::from_request(&request);
    tracing::debug!(method = %facts.method, url = %facts.full_url, "Logging request");

    let details = logger.capture(facts).await?;
    logger.ship(&details).await;

    Ok(next.run(request).await)
}

impl RequestLogger {
    /// Register the middleware on `router`. Covers every route added before
    /// this call.
    pub fn attach<S>(self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        router.layer(middleware::from_fn_with_state(self, request_log_middleware))
    }
}
