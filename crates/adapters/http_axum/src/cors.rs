//! Fixed cross-origin headers stamped on every response.
//!
//! Browsers on the configured dashboard origin may call the API with
//! credentials. The header set is static, so it is applied as plain
//! response headers rather than negotiated per request. Preflight
//! `OPTIONS` requests are answered with an empty `200` carrying the same
//! headers, whatever the path.

use axum::Router;
use axum::extract::Request;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, InvalidHeaderValue,
};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use tower_http::set_header::SetResponseHeaderLayer;

/// Methods advertised in `Access-Control-Allow-Methods`.
pub const ALLOW_METHODS: &str = "GET, POST, OPTIONS, PUT, PATCH, DELETE";

/// Headers advertised in `Access-Control-Allow-Headers`.
pub const ALLOW_HEADERS: &str = "X-Requested-With, content-type";

/// The CORS header values for a single allowed origin.
#[derive(Debug, Clone)]
pub struct CorsHeaders {
    allow_origin: HeaderValue,
}

impl CorsHeaders {
    /// Allow `origin` (e.g. `http://localhost:3000`).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHeaderValue`] if `origin` contains characters not
    /// allowed in a header value.
    pub fn new(origin: &str) -> Result<Self, InvalidHeaderValue> {
        Ok(Self {
            allow_origin: HeaderValue::from_str(origin)?,
        })
    }

    #[must_use]
    pub fn allow_origin(&self) -> &HeaderValue {
        &self.allow_origin
    }

    /// Add the four CORS headers to every response produced by `router`,
    /// replacing any value a handler may have set, and answer preflight
    /// requests before they reach the routes.
    pub fn apply<S>(&self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        router
            .layer(middleware::from_fn(answer_preflight))
            .layer(SetResponseHeaderLayer::overriding(
                ACCESS_CONTROL_ALLOW_ORIGIN,
                self.allow_origin.clone(),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static(ALLOW_METHODS),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static(ALLOW_HEADERS),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                ACCESS_CONTROL_ALLOW_CREDENTIALS,
                HeaderValue::from_static("true"),
            ))
    }
}

/// Short-circuit `OPTIONS` with an empty `200`; the route handlers only
/// accept `GET` and would reply `405`.
async fn answer_preflight(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    next.run(request).await
}
