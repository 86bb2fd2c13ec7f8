use crate::config::ConfigError;
use crate::scan::{ScanServiceError, SessionId, StoreError, SCAN_FORM_PATH};
use crate::scoring::SignalValidationError;
use crate::telemetry::TelemetryError;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Validation(SignalValidationError),
    Render(serde_json::Error),
    /// Results requested for a session with no stored answers.
    MissingHandoff(SessionId),
    SessionNotFound(SessionId),
    Store(StoreError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Validation(err) => write!(f, "invalid permission signals: {}", err),
            AppError::Render(err) => write!(f, "failed to render output: {}", err),
            AppError::MissingHandoff(id) => write!(f, "no scan data for session {}", id),
            AppError::SessionNotFound(id) => write!(f, "scan session {} not found", id),
            AppError::Store(err) => write!(f, "handoff store error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Validation(err) => Some(err),
            AppError::Render(err) => Some(err),
            AppError::Store(err) => Some(err),
            AppError::MissingHandoff(_) | AppError::SessionNotFound(_) => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MissingHandoff(_) => {
                let body = Json(json!({
                    "error": self.to_string(),
                    "redirect": SCAN_FORM_PATH,
                }));
                return (
                    StatusCode::SEE_OTHER,
                    [(header::LOCATION, SCAN_FORM_PATH)],
                    body,
                )
                    .into_response();
            }
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Render(_)
            | AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ScanServiceError> for AppError {
    fn from(value: ScanServiceError) -> Self {
        match value {
            ScanServiceError::Validation(err) => Self::Validation(err),
            ScanServiceError::MissingHandoff(id) => Self::MissingHandoff(id),
            ScanServiceError::Store(err) => Self::Store(err),
        }
    }
}

impl From<SignalValidationError> for AppError {
    fn from(value: SignalValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Render(value)
    }
}
