//! Proxy errors and their HTTP mapping. Every error body is `{"detail": ...}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use noid_ai::UpstreamError;

use crate::protocol::ErrorBody;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The body did not match the request schema.
    #[error("{0}")]
    Unprocessable(String),
    #[error("Invalid inline image data.")]
    InvalidInlineData,
    #[error("Gemini API error (try again later): {0}")]
    UpstreamApi(String),
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<UpstreamError> for ProxyError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Api { message, .. } => ProxyError::UpstreamApi(message),
            other => ProxyError::Internal(other.to_string()),
        }
    }
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ProxyError::InvalidInlineData => StatusCode::BAD_REQUEST,
            ProxyError::UpstreamApi(_) => StatusCode::SERVICE_UNAVAILABLE,
            ProxyError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorBody {
            detail: self.to_string(),
        });
        (status, body).into_response()
    }
}
