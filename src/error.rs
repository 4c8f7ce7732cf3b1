use std::fmt;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::gemini::GeminiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Translation,
    Speech,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Service::Translation => f.write_str("Translation"),
            Service::Speech => f.write_str("TTS"),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("{service} upstream call failed: {source}")]
    Upstream {
        service: Service,
        #[source]
        source: GeminiError,
    },
}

impl AppError {
    pub fn upstream(service: Service) -> impl FnOnce(GeminiError) -> AppError {
        move |source| AppError::Upstream { service, source }
    }

    // Shape errors are logged by the service, next to the raw envelope
    fn logged_at_boundary(&self) -> bool {
        !matches!(
            self,
            AppError::Upstream { source: GeminiError::Shape(_), .. }
        )
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Upstream detail goes to the log only
        let (status, code, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Upstream { service, source } => match source {
                GeminiError::MissingApiKey => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIGURATION_ERROR",
                    "API key not configured".to_string(),
                ),
                GeminiError::Http { status, .. } => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "UPSTREAM_HTTP_ERROR",
                    format!("{} service error: {}", service, status.as_u16()),
                ),
                GeminiError::Shape(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "UPSTREAM_SHAPE_ERROR",
                    format!("Unexpected {} API response structure", service),
                ),
                GeminiError::Transport(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "TRANSPORT_ERROR",
                    format!("{} failed", service),
                ),
            },
        };

        if self.logged_at_boundary() {
            if status.is_server_error() {
                tracing::error!("Request failed: {} - {}", code, self);
            } else {
                tracing::warn!("Request rejected: {} - {}", code, message);
            }
        }

        (
            status,
            Json(ErrorResponse {
                error: message,
                code: code.to_string(),
            }),
        )
            .into_response()
    }
}
