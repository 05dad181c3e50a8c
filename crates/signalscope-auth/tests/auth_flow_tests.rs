//! End-to-end tests for the authentication gateway.

use chrono::{DateTime, Duration, Utc};
use secrecy::SecretString;
use signalscope_auth::{
    AuthConfig, AuthError, AuthGateway, Clock, Credential, Identity, MemoryCredentials,
    PasswordConfig, PasswordHasher, StoredCredential, TokenConfig,
};
use std::sync::{Arc, Mutex};

struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    fn starting_at(now: DateTime<Utc>) -> Arc<Self> {
        Arc::new(Self {
            now: Mutex::new(now),
        })
    }

    fn advance_minutes(&self, minutes: i64) {
        let mut now = self.now.lock().unwrap();
        *now += Duration::minutes(minutes);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

fn test_config() -> AuthConfig {
    AuthConfig {
        token: TokenConfig {
            secret: SecretString::new("integration-test-secret".into()),
            ttl_minutes: 10080,
        },
        // Minimum cost keeps the bcrypt work factor test-sized
        password: PasswordConfig { cost: 4 },
    }
}

fn credential(email: &str, password: &str) -> Credential {
    Credential {
        email: email.into(),
        password: password.into(),
    }
}

/// A store with one known user, hashed under the test config.
fn seeded_store(config: &AuthConfig, password: &str) -> Arc<MemoryCredentials> {
    let hasher = PasswordHasher::new(&config.password);
    let mut store = MemoryCredentials::new();
    store.insert(StoredCredential {
        subject: Identity::new("user-1"),
        email: "ada@example.com".into(),
        password_hash: hasher.hash(password).unwrap(),
    });
    Arc::new(store)
}

#[test]
fn test_login_then_authenticate_round_trip() {
    let config = test_config();
    let store = seeded_store(&config, "correct horse battery staple");
    let gateway = AuthGateway::new(&config, store).unwrap();

    let issued = gateway
        .login(&credential("ada@example.com", "correct horse battery staple"))
        .unwrap();
    assert_eq!(issued.subject, Identity::new("user-1"));

    let subject = gateway.authenticate(&issued.token).unwrap();
    assert_eq!(subject, Identity::new("user-1"));
}

#[test]
fn test_register_produces_a_verifiable_hash() {
    let config = test_config();
    let gateway = AuthGateway::new(&config, Arc::new(MemoryCredentials::new())).unwrap();

    let hash = gateway
        .register(&credential("grace@example.com", "hopper-nanoseconds"))
        .unwrap();

    let hasher = PasswordHasher::new(&config.password);
    assert!(hasher.verify("hopper-nanoseconds", &hash));
    assert!(!hasher.verify("hopper-microseconds", &hash));
}

#[test]
fn test_register_rejects_weak_password() {
    let config = test_config();
    let gateway = AuthGateway::new(&config, Arc::new(MemoryCredentials::new())).unwrap();

    let err = gateway
        .register(&credential("grace@example.com", "short"))
        .unwrap_err();
    assert!(matches!(err, AuthError::WeakCredential(_)));
}

#[test]
fn test_unknown_email_and_wrong_password_are_indistinguishable() {
    let config = test_config();
    let store = seeded_store(&config, "correct horse battery staple");
    let gateway = AuthGateway::new(&config, store).unwrap();

    let unknown = gateway
        .login(&credential("nobody@example.com", "correct horse battery staple"))
        .unwrap_err();
    let wrong = gateway
        .login(&credential("ada@example.com", "wrong password entirely"))
        .unwrap_err();

    assert!(matches!(unknown, AuthError::InvalidCredentials));
    assert!(matches!(wrong, AuthError::InvalidCredentials));
    assert_eq!(unknown.code(), wrong.code());
    assert_eq!(unknown.to_string(), wrong.to_string());
}

#[test]
fn test_tampered_token_is_unauthenticated() {
    let config = test_config();
    let store = seeded_store(&config, "correct horse battery staple");
    let gateway = AuthGateway::new(&config, store).unwrap();

    let issued = gateway
        .login(&credential("ada@example.com", "correct horse battery staple"))
        .unwrap();

    // Flip one character of the payload segment
    let mut parts: Vec<String> = issued.token.split('.').map(str::to_owned).collect();
    let payload = &mut parts[1];
    let mid = payload.len() / 2;
    let original = payload.remove(mid);
    payload.insert(mid, if original == 'x' { 'y' } else { 'x' });
    let tampered = parts.join(".");

    let err = gateway.authenticate(&tampered).unwrap_err();
    assert!(matches!(err, AuthError::Unauthenticated));
}

#[test]
fn test_expired_token_is_unauthenticated() {
    let config = test_config();
    let store = seeded_store(&config, "correct horse battery staple");
    let clock = ManualClock::starting_at(
        DateTime::parse_from_rfc3339("2024-06-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc),
    );
    let gateway = AuthGateway::with_clock(&config, store, clock.clone()).unwrap();

    let issued = gateway
        .login(&credential("ada@example.com", "correct horse battery staple"))
        .unwrap();
    assert!(gateway.authenticate(&issued.token).is_ok());

    clock.advance_minutes(10081);
    let err = gateway.authenticate(&issued.token).unwrap_err();
    assert!(matches!(err, AuthError::Unauthenticated));
}

#[test]
fn test_over_long_password_matches_its_hashed_prefix() {
    let config = test_config();
    let long_password = "a".repeat(100);
    let store = seeded_store(&config, &long_password);
    let gateway = AuthGateway::new(&config, store).unwrap();

    // Only the first 72 bytes were hashed, so the prefix logs in too
    assert!(gateway
        .login(&credential("ada@example.com", &"a".repeat(72)))
        .is_ok());
    assert!(gateway
        .login(&credential("ada@example.com", &long_password))
        .is_ok());
    assert!(gateway
        .login(&credential("ada@example.com", &"a".repeat(71)))
        .is_err());
}
