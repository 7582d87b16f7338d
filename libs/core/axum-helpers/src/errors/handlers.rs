use std::any::Any;

use axum::{http::StatusCode, response::Response};

use super::{AppError, ErrorCode, error_response};

/// Handler for unmatched routes.
///
/// Use as the router fallback so every unknown path gets the standard
/// `{ "error": { "message": "Not Found" } }` envelope.
pub async fn not_found() -> AppError {
    AppError::NotFound(ErrorCode::NotFound.default_message().to_string())
}

/// Handler for a known path requested with an unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Turns a handler panic into a 500 envelope carrying the panic message.
///
/// Intended for `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        ErrorCode::HandlerPanic.default_message().to_string()
    };

    tracing::error!(
        error_code = ErrorCode::HandlerPanic.code(),
        "Handler panicked: {}",
        message
    );

    error_response(StatusCode::INTERNAL_SERVER_ERROR, message, ErrorCode::HandlerPanic)
}
