use axum::{
    Json,
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TtsError>;

/// Relay errors with appropriate HTTP status codes
#[derive(Debug, Error)]
pub enum TtsError {
    /// Request failed field validation
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Server-side credential absent or empty
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Upstream rejected the request; status and body are forwarded untouched
    /// so callers can tell a provider rejection from a relay fault
    #[error("Upstream error ({status})")]
    Upstream {
        status: u16,
        body: Bytes,
        content_type: Option<String>,
    },

    /// Network or timeout failure reaching the upstream
    #[error("Connection error: {0}")]
    ConnectionError(String),
}

impl TtsError {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream { status, .. } => StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
            Self::ConfigError(_) | Self::ConnectionError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error type string for the response
    pub fn error_type(&self) -> &str {
        match self {
            Self::InvalidRequest(_) => "invalid_request_error",
            Self::Upstream { .. } => "upstream_error",
            Self::ConnectionError(_) => "api_error",
            Self::ConfigError(_) => "internal_error",
        }
    }
}

/// Error response format for relay-originated failures
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorDetails,
}

#[derive(Debug, Serialize)]
struct ErrorDetails {
    message: String,
    r#type: String,
    code: u16,
}

impl IntoResponse for TtsError {
    fn into_response(self) -> Response {
        // Upstream failures pass through verbatim, no envelope
        if let Self::Upstream {
            status,
            body,
            content_type,
        } = self
        {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            let mut builder = Response::builder().status(status);
            if let Some(content_type) = content_type {
                builder = builder.header(http::header::CONTENT_TYPE, content_type);
            }
            return builder
                .body(Body::from(body))
                .unwrap_or_else(|_| StatusCode::BAD_GATEWAY.into_response());
        }

        let status = self.status_code();
        let error_response = ErrorResponse {
            error: ErrorDetails {
                message: self.to_string(),
                r#type: self.error_type().to_string(),
                code: status.as_u16(),
            },
        };

        (status, Json(error_response)).into_response()
    }
}
