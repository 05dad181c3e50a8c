//! Configuration for the authentication core.

use anyhow::{bail, Context, Result};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Authentication configuration.
///
/// Loaded once at startup and immutable thereafter; services take it by
/// reference at construction.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Token signing configuration
    #[serde(default)]
    pub token: TokenConfig,

    /// Password hashing configuration
    #[serde(default)]
    pub password: PasswordConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenConfig {
    /// HMAC signing secret. There is no usable default; `load` refuses an
    /// empty value.
    #[serde(default = "default_secret")]
    pub secret: SecretString,

    /// Token lifetime in minutes
    #[serde(default = "default_ttl_minutes")]
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PasswordConfig {
    /// bcrypt cost factor
    #[serde(default = "default_cost")]
    pub cost: u32,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: default_secret(),
            ttl_minutes: default_ttl_minutes(),
        }
    }
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            cost: default_cost(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token: TokenConfig::default(),
            password: PasswordConfig::default(),
        }
    }
}

fn default_secret() -> SecretString {
    SecretString::new(String::new())
}

fn default_ttl_minutes() -> i64 {
    10080 // 7 days
}

fn default_cost() -> u32 {
    bcrypt::DEFAULT_COST
}

impl AuthConfig {
    /// Load configuration from environment variables
    /// (`AUTH__TOKEN__SECRET`, `AUTH__TOKEN__TTL_MINUTES`,
    /// `AUTH__PASSWORD__COST`).
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("AUTH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?;

        let config: AuthConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that must not reach a running process.
    pub fn validate(&self) -> Result<()> {
        if self.token.secret.expose_secret().is_empty() {
            bail!("AUTH__TOKEN__SECRET is not set; refusing to run without a signing secret");
        }
        if self.token.ttl_minutes <= 0 {
            bail!("AUTH__TOKEN__TTL_MINUTES must be positive");
        }
        Ok(())
    }
}
