//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use confhub_domain::error::{ConfHubError, ValidationError};

/// JSON error body returned by API endpoints.
///
/// `kind` is a stable discriminant clients can branch on; `error` is a
/// human-readable message.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub kind: &'static str,
    pub error: String,
}

/// Maps [`ConfHubError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(ConfHubError);

impl From<ConfHubError> for ApiError {
    fn from(err: ConfHubError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ValidationError::MalformedBody(err.to_string()).into()
    }
}

impl ApiError {
    fn status_and_kind(&self) -> (StatusCode, &'static str) {
        match &self.0 {
            ConfHubError::Validation(_) => (StatusCode::BAD_REQUEST, "validation"),
            ConfHubError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ConfHubError::Infrastructure(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "infrastructure")
            }
            ConfHubError::Query(_) => (StatusCode::INTERNAL_SERVER_ERROR, "query"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = self.status_and_kind();
        if status.is_server_error() {
            tracing::error!(error = ?self.0, kind, "request failed");
        }

        let body = ErrorBody {
            kind,
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
