//! Error types shared across the client stack
//!
//! Standardized error codes mirroring the backend's response envelope, plus
//! the application error type used by the in-process test backend.

use http::StatusCode;
use thiserror::Error;

/// Standard API error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCode {
    /// Success
    Success,
    /// Validation error (400)
    Validation,
    /// Authentication required (401)
    Unauthorized,
    /// Permission denied (403)
    Forbidden,
    /// Resource not found (404)
    NotFound,
    /// Stale state / conflicting transition (409)
    Conflict,
    /// Workflow rule violation (422)
    InvalidTransition,
    /// Internal server error (500)
    Internal,
}

impl ApiErrorCode {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
            Self::InvalidTransition => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the default message for this error
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Validation => "Validation failed",
            Self::Unauthorized => "Authentication required",
            Self::Forbidden => "Permission denied",
            Self::NotFound => "Resource not found",
            Self::Conflict => "Order state changed, refresh and retry",
            Self::InvalidTransition => "Transition not allowed from current state",
            Self::Internal => "Internal server error",
        }
    }

    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Success => "E0000",
            Self::Validation => "E0002",
            Self::Unauthorized => "E3001",
            Self::Forbidden => "E2001",
            Self::NotFound => "E0003",
            Self::Conflict => "E0004",
            Self::InvalidTransition => "E0005",
            Self::Internal => "E9001",
        }
    }

    /// Parse a wire code string back into the enum
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "E0000" => Some(Self::Success),
            "E0002" => Some(Self::Validation),
            "E3001" => Some(Self::Unauthorized),
            "E2001" => Some(Self::Forbidden),
            "E0003" => Some(Self::NotFound),
            "E0004" => Some(Self::Conflict),
            "E0005" => Some(Self::InvalidTransition),
            "E9001" => Some(Self::Internal),
            _ => None,
        }
    }
}

impl std::fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Application error with structured error code
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ApiErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ApiErrorCode) -> Self {
        Self {
            message: code.default_message().to_string(),
            code,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.status_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for code in [
            ApiErrorCode::Success,
            ApiErrorCode::Validation,
            ApiErrorCode::Unauthorized,
            ApiErrorCode::Forbidden,
            ApiErrorCode::NotFound,
            ApiErrorCode::Conflict,
            ApiErrorCode::InvalidTransition,
            ApiErrorCode::Internal,
        ] {
            assert_eq!(ApiErrorCode::from_code(code.code()), Some(code));
        }
        assert_eq!(ApiErrorCode::from_code("E7777"), None);
    }
}
