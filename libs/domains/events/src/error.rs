//! Event domain error types

use axum_helpers::{AppError, ErrorCode};
use thiserror::Error;

/// Result type for event operations
pub type EventResult<T> = Result<T, EventError>;

/// Event domain errors
#[derive(Debug, Error)]
pub enum EventError {
    #[error("Event not found: {id}")]
    NotFound { id: String },
}

// Convert to axum_helpers::AppError for HTTP responses
impl From<EventError> for AppError {
    fn from(err: EventError) -> Self {
        match err {
            // The requested id is not echoed back to the client
            EventError::NotFound { .. } => {
                AppError::NotFound(ErrorCode::NotFound.default_message().to_string())
            }
        }
    }
}

impl axum::response::IntoResponse for EventError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_not_found_keeps_id_in_display() {
        let err = EventError::NotFound {
            id: "999".to_string(),
        };
        assert_eq!(err.to_string(), "Event not found: 999");
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = EventError::NotFound {
            id: "999".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
