//! Credential and token lifecycle for the SignalScope backend.
//!
//! Gates every mutating operation of the surrounding service: bcrypt
//! password hashing, HS256 token issuance/validation, and the gateway that
//! composes them for the route layer. Everything is immutable after
//! construction and safe to share across request handlers.

pub mod config;
pub mod error;
pub mod gateway;
pub mod password;
pub mod store;
pub mod token;
pub mod types;

pub use config::{AuthConfig, PasswordConfig, TokenConfig};
pub use error::AuthError;
pub use gateway::AuthGateway;
pub use password::PasswordHasher;
pub use store::{CredentialStore, MemoryCredentials};
pub use token::{Clock, SystemClock, TokenService};
pub use types::{Credential, Identity, IssuedToken, StoredCredential};
