//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. JSON handlers return `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::views::EditOutcome;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Caller may not edit the catalog.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bad request from client, e.g. an incomplete form.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Another mutation of the same view is in flight.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The store rejected a mutation. The message is the user-facing one;
    /// details were logged where the failure happened.
    #[error("Upstream error: {0}")]
    Upstream(String),
}

/// JSON body of an error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl AppError {
    /// Convert a refused or failed edit into an error. `None` for `Done`.
    #[must_use]
    pub fn from_outcome(outcome: &EditOutcome) -> Option<Self> {
        let message = outcome.message().to_string();
        match outcome {
            EditOutcome::Done(_) => None,
            EditOutcome::Invalid(_) => Some(Self::BadRequest(message)),
            EditOutcome::Failed(_) => Some(Self::Upstream(message)),
            EditOutcome::Busy => Some(Self::Conflict(message)),
            EditOutcome::Unauthorized => Some(Self::Unauthorized(message)),
        }
    }

    const fn status(&self) -> StatusCode {
        match self {
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Upstream(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = self.status();

        let error = match self {
            Self::NotFound(what) => format!("Not found: {what}"),
            Self::Unauthorized(message)
            | Self::BadRequest(message)
            | Self::Conflict(message)
            | Self::Upstream(message) => message,
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use herreria_core::forms::ValidationError;

    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("producto p1".to_string());
        assert_eq!(err.to_string(), "Not found: producto p1");

        let err = AppError::BadRequest("faltan campos".to_string());
        assert_eq!(err.to_string(), "Bad request: faltan campos");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            status_of(AppError::NotFound("x".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(AppError::Conflict("x".to_string())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(AppError::Upstream("x".to_string())),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_outcomes_map_to_errors() {
        assert!(AppError::from_outcome(&EditOutcome::Done("ok")).is_none());
        assert!(matches!(
            AppError::from_outcome(&EditOutcome::Busy),
            Some(AppError::Conflict(_))
        ));
        assert!(matches!(
            AppError::from_outcome(&EditOutcome::Unauthorized),
            Some(AppError::Unauthorized(_))
        ));
        assert!(matches!(
            AppError::from_outcome(&EditOutcome::Failed("Error al agregar el producto")),
            Some(AppError::Upstream(message)) if message == "Error al agregar el producto"
        ));
        assert!(matches!(
            AppError::from_outcome(&EditOutcome::Invalid(ValidationError::InvalidOrder(0))),
            Some(AppError::BadRequest(message)) if message == "El orden debe ser un número positivo"
        ));
    }
}
