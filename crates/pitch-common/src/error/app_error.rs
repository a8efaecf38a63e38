//! Application error types
//!
//! Errors raised outside the domain model: authentication, configuration,
//! storage and export failures. Domain errors pass through with their own
//! status and code.

use pitch_core::DomainError;
use serde::Serialize;
use std::fmt;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========================================================================
    // Authentication
    // ========================================================================
    /// Unknown e-mail, wrong password or the reserved unknown account
    #[error("Invalid e-mail or password")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    // ========================================================================
    // Request
    // ========================================================================
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    // ========================================================================
    // Infrastructure
    // ========================================================================
    #[error("Database error: {0}")]
    Database(String),

    #[error("CSV export failed: {0}")]
    Export(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    /// HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::InvalidCredentials | Self::InvalidToken | Self::TokenExpired => 401,
            Self::Forbidden(_) => 403,
            Self::NotFound(_) => 404,
            Self::Conflict(_) => 409,
            Self::RateLimitExceeded => 429,
            Self::Database(_) | Self::Export(_) | Self::Config(_) | Self::Internal(_) => 500,
            Self::Domain(e) => e.status_code(),
        }
    }

    /// Stable code for the `error.code` field of API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Export(_) => "EXPORT_FAILED",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    #[must_use]
    pub fn not_found(resource: impl fmt::Display) -> Self {
        Self::NotFound(resource.to_string())
    }

    #[must_use]
    pub fn forbidden(reason: impl fmt::Display) -> Self {
        Self::Forbidden(reason.to_string())
    }

    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Error body shared by the REST API and the chat hub
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.error_code().to_string(),
            message: err.to_string(),
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitch_core::Snowflake;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::InvalidCredentials.status_code(), 401);
        assert_eq!(AppError::forbidden("not the owner").status_code(), 403);
        assert_eq!(AppError::not_found("user").status_code(), 404);
        assert_eq!(AppError::Validation("age".to_string()).status_code(), 400);
        assert_eq!(AppError::RateLimitExceeded.status_code(), 429);
        assert_eq!(AppError::Export("io".to_string()).status_code(), 500);
    }

    #[test]
    fn test_domain_status_passthrough() {
        let err = AppError::from(DomainError::ChatNotFound(Snowflake::new(5)));
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "UNKNOWN_CHAT");

        let err = AppError::from(DomainError::SelfChat);
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_forbidden_keeps_reason() {
        let err = AppError::forbidden("only the advertisement owner can answer an offer");
        assert_eq!(err.error_code(), "FORBIDDEN");
        assert!(err.to_string().contains("advertisement owner"));
    }

    #[test]
    fn test_error_response() {
        let err = AppError::not_found("user 123");
        let response = ErrorResponse::from(&err);

        assert_eq!(response.code, "NOT_FOUND");
        assert_eq!(response.message, "Resource not found: user 123");
        assert!(response.details.is_none());
    }
}
