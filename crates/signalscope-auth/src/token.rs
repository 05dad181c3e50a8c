//! Signed-token issuance and validation.

use crate::config::TokenConfig;
use crate::error::AuthError;
use crate::types::{Identity, IssuedToken};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Time source for token lifetimes. Injectable so a test can drive a token
/// through its whole issued → valid → expired life.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// Issues and validates signed, time-limited identity tokens.
///
/// The secret and TTL are fixed at construction. Rotating the secret means
/// constructing a new service, which invalidates every outstanding token at
/// once; there is no per-token revocation.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    pub fn new(config: &TokenConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Construct with an explicit clock (test seam).
    pub fn with_clock(config: &TokenConfig, clock: Arc<dyn Clock>) -> Self {
        let secret = config.secret.expose_secret();
        debug!(
            secret_fingerprint = %secret_fingerprint(secret),
            ttl_minutes = config.ttl_minutes,
            "token service initialized"
        );

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::minutes(config.ttl_minutes),
            clock,
        }
    }

    /// Sign a token asserting `subject` until the TTL runs out.
    pub fn issue(&self, subject: &Identity) -> Result<IssuedToken, AuthError> {
        let issued_at = self.clock.now();
        let expires_at = issued_at + self.ttl;

        let claims = Claims {
            sub: subject.as_str().to_owned(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("token signing failed: {e}")))?;

        Ok(IssuedToken {
            token,
            subject: subject.clone(),
            issued_at,
            expires_at,
        })
    }

    /// Verify signature and expiry, returning the embedded subject.
    pub fn validate(&self, token: &str) -> Result<Identity, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is judged against the injected clock below, with no leeway.
        validation.validate_exp = false;

        let data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                debug!(error = %e, "token rejected");
                AuthError::TokenInvalid
            })?;

        if self.clock.now().timestamp() >= data.claims.exp {
            return Err(AuthError::TokenExpired);
        }

        Ok(Identity::new(data.claims.sub))
    }
}

/// Short SHA-256 fingerprint of the signing secret, safe to log.
fn secret_fingerprint(secret: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    let digest = hex::encode(hasher.finalize());
    digest[..8].to_string()
}
