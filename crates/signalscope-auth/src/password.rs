//! Password hashing and verification.

use crate::config::PasswordConfig;
use crate::error::AuthError;
use tracing::debug;

/// bcrypt ignores everything past 72 bytes, so inputs are cut there before
/// hashing and again before verification.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Minimum password length in characters, applied after truncation.
pub const MIN_PASSWORD_CHARS: usize = 8;

// bcrypt rejects cost factors outside this range.
const MIN_COST: u32 = 4;
const MAX_COST: u32 = 31;

/// One-way credential hasher.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(config: &PasswordConfig) -> Self {
        Self {
            cost: config.cost.clamp(MIN_COST, MAX_COST),
        }
    }

    /// Hash a password for storage.
    ///
    /// The input is truncated to the bcrypt limit first; the minimum-length
    /// policy is applied to what will actually be hashed.
    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        let password = truncate_to_hash_input(password);

        if password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(AuthError::WeakCredential(format!(
                "password must be at least {MIN_PASSWORD_CHARS} characters"
            )));
        }

        bcrypt::hash(password, self.cost).map_err(|_| AuthError::InvalidHashFormat)
    }

    /// Check a candidate password against a stored hash.
    ///
    /// A malformed stored hash counts as a mismatch, never an error.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let password = truncate_to_hash_input(password);

        match bcrypt::verify(password, hash) {
            Ok(matched) => matched,
            Err(e) => {
                debug!(error = %e, "stored password hash did not parse");
                false
            }
        }
    }
}

/// Cut a password to [`MAX_PASSWORD_BYTES`] without splitting a codepoint.
fn truncate_to_hash_input(password: &str) -> &str {
    if password.len() <= MAX_PASSWORD_BYTES {
        return password;
    }
    let mut end = MAX_PASSWORD_BYTES;
    while !password.is_char_boundary(end) {
        end -= 1;
    }
    &password[..end]
}
