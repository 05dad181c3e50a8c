//! Credential lookup seam with an in-memory implementation.

use crate::types::StoredCredential;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Read-only credential lookup, owned by the persistence layer.
///
/// The gateway never writes through this seam; registration hands the hash
/// back to the caller for storage.
pub trait CredentialStore: Send + Sync {
    /// Find a stored credential by its email key.
    fn find_by_email(&self, email: &str) -> Option<StoredCredential>;
}

/// In-memory credential store.
///
/// Backs tests and embedded consumers; production lookups implement the
/// same trait over the document store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryCredentials {
    /// Credentials indexed by email
    records: HashMap<String, StoredCredential>,
}

impl MemoryCredentials {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Insert or replace a credential, keyed by its email.
    pub fn insert(&mut self, record: StoredCredential) {
        self.records.insert(record.email.clone(), record);
    }

    /// Get a credential by email.
    pub fn get(&self, email: &str) -> Option<&StoredCredential> {
        self.records.get(email)
    }

    /// Remove a credential.
    pub fn remove(&mut self, email: &str) -> Option<StoredCredential> {
        self.records.remove(email)
    }

    /// Number of stored credentials.
    pub fn count(&self) -> usize {
        self.records.len()
    }
}

impl CredentialStore for MemoryCredentials {
    fn find_by_email(&self, email: &str) -> Option<StoredCredential> {
        self.records.get(email).cloned()
    }
}
