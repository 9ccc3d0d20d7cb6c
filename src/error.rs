use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

/// A remote lookup that could not be completed: the upstream API was
/// unreachable or answered with a non-success status. Carries the upstream
/// HTTP status when one was received.
#[derive(Error, Debug, Clone)]
#[error("meal API request failed: {message}")]
pub struct TransportError {
    pub status: Option<StatusCode>,
    pub message: String,
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            status: err.status(),
            message: err.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("no meal found")]
    NotFound,

    #[error(transparent)]
    Upstream(#[from] TransportError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            // no upstream status means we never got an answer at all
            AppError::Upstream(err) => err.status.unwrap_or(StatusCode::BAD_GATEWAY),
        };

        let body = Json(json!({
            "statusCode": status.as_u16(),
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}

/// Sink for remote-call failures that are absorbed rather than propagated.
///
/// The multi-criteria search tolerates individual filter failures; each one
/// is handed to the reporter and the request continues. Reporting is
/// fire-and-forget and must never fail the caller.
pub trait ErrorReporter {
    fn report(&self, error: &TransportError);
}

impl<R: ErrorReporter> ErrorReporter for &R {
    fn report(&self, error: &TransportError) {
        (**self).report(error);
    }
}

/// Production reporter: emits the failure on the `tracing` warn level.
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, error: &TransportError) {
        warn!("meal lookup failed: {error}");
    }
}
