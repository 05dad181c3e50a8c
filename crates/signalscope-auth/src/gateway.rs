//! Request authentication gateway.

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::password::PasswordHasher;
use crate::store::CredentialStore;
use crate::token::{Clock, SystemClock, TokenService};
use crate::types::{Credential, Identity, IssuedToken};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Composes the password hasher and token service to answer "is this
/// request authenticated, and as whom" for the route layer.
pub struct AuthGateway {
    hasher: PasswordHasher,
    tokens: TokenService,
    credentials: Arc<dyn CredentialStore>,
    /// Verified against when the email is unknown, so both login failure
    /// paths cost one bcrypt comparison.
    decoy_hash: String,
}

impl AuthGateway {
    pub fn new(
        config: &AuthConfig,
        credentials: Arc<dyn CredentialStore>,
    ) -> Result<Self, AuthError> {
        Self::with_clock(config, credentials, Arc::new(SystemClock))
    }

    /// Construct with an explicit clock (test seam).
    pub fn with_clock(
        config: &AuthConfig,
        credentials: Arc<dyn CredentialStore>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, AuthError> {
        let hasher = PasswordHasher::new(&config.password);
        let tokens = TokenService::with_clock(&config.token, clock);
        let decoy_hash = hasher.hash("decoy-password-for-unknown-emails")?;

        Ok(Self {
            hasher,
            tokens,
            credentials,
            decoy_hash,
        })
    }

    /// Apply the password policy and hash a new credential for storage.
    ///
    /// Email uniqueness and the insert itself stay with the persistence
    /// layer.
    pub fn register(&self, credential: &Credential) -> Result<String, AuthError> {
        let hash = self.hasher.hash(&credential.password)?;
        info!(email = %credential.email, "credential hashed for registration");
        Ok(hash)
    }

    /// Exchange an email/password pair for a signed token.
    ///
    /// Unknown email and wrong password are indistinguishable to the
    /// caller, in shape and in cost.
    pub fn login(&self, credential: &Credential) -> Result<IssuedToken, AuthError> {
        match self.credentials.find_by_email(&credential.email) {
            Some(stored) => {
                if !self.hasher.verify(&credential.password, &stored.password_hash) {
                    warn!(email = %credential.email, "login rejected");
                    return Err(AuthError::InvalidCredentials);
                }

                let issued = self.tokens.issue(&stored.subject)?;
                info!(subject = %issued.subject, "login succeeded");
                Ok(issued)
            }
            None => {
                let _ = self.hasher.verify(&credential.password, &self.decoy_hash);
                warn!(email = %credential.email, "login rejected");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Resolve a bearer token to its subject.
    ///
    /// Expired and invalid tokens collapse into the uniform
    /// [`AuthError::Unauthenticated`]; the underlying kind is only logged.
    pub fn authenticate(&self, token: &str) -> Result<Identity, AuthError> {
        self.tokens.validate(token).map_err(|e| {
            debug!(code = e.code(), "bearer token rejected");
            AuthError::Unauthenticated
        })
    }
}
