//! # Common Error Types
//!
//! Consolidated error handling for the dashboard client.
//!
//! Every failure a caller can observe is one of five shapes:
//!
//! - **Network**: transport failure before any HTTP status was received
//! - **Http**: a non-2xx response, carrying status and body text
//! - **Token**: the session token failed structural decoding
//! - **Validation**: a client-side precondition failed before any network call
//! - **Schema**: a 2xx response did not match the endpoint's documented shape
//!
//! All of these are caught at the call-site boundary (the view or action
//! invoking the operation) and converted into a user-visible notification;
//! none propagate to a global handler.

use lib_auth::TokenError;
use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-wide error type covering all client error scenarios.
#[derive(Debug, Error)]
pub enum AppError {
    /// Transport failure (DNS, timeout, connection refused).
    ///
    /// Surfaced verbatim to the caller; never retried automatically.
    #[error("Network error: {0}")]
    Network(String),

    /// Any non-2xx response.
    ///
    /// `body` is the response body text when non-empty, otherwise the
    /// canonical status reason, and is used as the human-readable message.
    #[error("{status}: {body}")]
    Http { status: u16, body: String },

    /// Session token failed structural decoding.
    ///
    /// Fatal to the session (forces the anonymous state) but never fatal to
    /// the application.
    #[error(transparent)]
    Token(#[from] TokenError),

    /// Client-side precondition failure caught before any network call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A successful response whose shape does not match the endpoint contract.
    #[error("Schema error: {0}")]
    Schema(String),
}

impl AppError {
    /// True when the backend rejected the bearer token (expired or invalid).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Http { status: 401, .. })
    }
}
