//! Error types for the authentication core.

use thiserror::Error;

/// Authentication error taxonomy.
///
/// Everything here is recoverable and maps to a client-facing rejection at
/// the route boundary; none of it is fatal to the process.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Password fails the registration policy.
    #[error("Password does not meet policy: {0}")]
    WeakCredential(String),

    /// Stored password hash could not be parsed.
    #[error("Password hash is malformed")]
    InvalidHashFormat,

    /// Token signature verified but the token is past its expiry.
    #[error("Token has expired")]
    TokenExpired,

    /// Token signature did not verify, or the payload is malformed.
    #[error("Token is invalid")]
    TokenInvalid,

    /// Login failure. Deliberately does not distinguish an unknown email
    /// from a wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Uniform rejection for the route layer's 401.
    #[error("Not authenticated")]
    Unauthenticated,

    /// Library-internal failure that should never surface in normal use.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Stable machine-readable code for the route layer's error responses.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::WeakCredential(_) => "WEAK_CREDENTIAL",
            AuthError::InvalidHashFormat => "INVALID_HASH_FORMAT",
            AuthError::TokenExpired => "TOKEN_EXPIRED",
            AuthError::TokenInvalid => "TOKEN_INVALID",
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::Unauthenticated => "UNAUTHENTICATED",
            AuthError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
