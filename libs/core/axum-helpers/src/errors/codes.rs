//! Type-safe error codes for structured logs.
//!
//! Each error code includes:
//! - String representation (e.g., "NOT_FOUND")
//! - Integer code for logging and monitoring (e.g., 1004)
//! - Default human-readable message, used as the envelope message
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::NotFound;
//! assert_eq!(code.as_str(), "NOT_FOUND");
//! assert_eq!(code.code(), 1004);
//! assert_eq!(code.default_message(), "Not Found");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1499)
    /// Requested resource or route was not found
    NotFound,

    /// Route exists but not for this HTTP method
    MethodNotAllowed,

    /// JSON extraction from request body failed
    JsonExtraction,

    // Server errors (1500-1999)
    /// A handler panicked while serving the request
    HandlerPanic,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier, matching the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::HandlerPanic => "HANDLER_PANIC",
        }
    }

    /// Get the integer code, logged as the `error_code` field.
    ///
    /// Ranges:
    /// - 1000-1499: Client errors
    /// - 1500-1999: Server errors
    pub fn code(&self) -> i32 {
        match self {
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::MethodNotAllowed => 1012,

            Self::HandlerPanic => 1514,
        }
    }

    /// Get the default user-facing error message.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::NotFound => "Not Found",
            Self::MethodNotAllowed => "Method Not Allowed",
            Self::JsonExtraction => "Failed to parse request body",
            Self::HandlerPanic => "Internal Server Error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_string_representation() {
        assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
        assert_eq!(ErrorCode::MethodNotAllowed.as_str(), "METHOD_NOT_ALLOWED");
        assert_eq!(ErrorCode::NotFound.to_string(), "NOT_FOUND");
    }

    #[test]
    fn test_error_code_integer_codes() {
        assert_eq!(ErrorCode::NotFound.code(), 1004);
        assert_eq!(ErrorCode::MethodNotAllowed.code(), 1012);
        assert_eq!(ErrorCode::HandlerPanic.code(), 1514);
    }

    #[test]
    fn test_not_found_message_matches_envelope_contract() {
        assert_eq!(ErrorCode::NotFound.default_message(), "Not Found");
    }

    #[test]
    fn test_error_code_serde_round_trip() {
        let json = serde_json::to_string(&ErrorCode::HandlerPanic).unwrap();
        assert_eq!(json, "\"HANDLER_PANIC\"");
        let code: ErrorCode = serde_json::from_str(&json).unwrap();
        assert_eq!(code, ErrorCode::HandlerPanic);
    }
}
