//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use mockhub_domain::error::MockHubError;

/// JSON error body returned for client errors that carry a message.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`MockHubError`] to an HTTP response with appropriate status code.
///
/// A missing device is a bare `404` with an empty body; clients only look
/// at the status.
#[derive(Debug)]
pub struct ApiError(MockHubError);

impl From<MockHubError> for ApiError {
    fn from(err: MockHubError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            MockHubError::NotFound(err) => {
                tracing::debug!(error = %err, "not found");
                StatusCode::NOT_FOUND.into_response()
            }
            MockHubError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: err.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
