//! Password hashing and verification
//!
//! Uses bcrypt for secure password hashing. Every password goes through
//! [`truncate_password`] first, so inputs longer than 72 bytes are accepted
//! and compared on their first 72 bytes only.

use super::truncate::truncate_password;
use crate::config::HasherConfig;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::{HasherError, HasherResult};
use bcrypt::HashParts;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

/// Encoded bcrypt hash (`$2b$<cost>$<salt><digest>`), ready to be stored verbatim
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HashString(String);

impl HashString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Cost factor embedded in the hash, if it is well formed
    pub fn cost(&self) -> Option<u32> {
        embedded_cost(&self.0)
    }
}

impl fmt::Display for HashString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HashString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<HashString> for String {
    fn from(hash: HashString) -> Self {
        hash.0
    }
}

/// Outcome of [`PasswordHasher::verify_and_update`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Verification {
    /// Password does not match, or the stored hash is unusable
    Rejected,
    /// Password matches and the stored hash is current
    Accepted,
    /// Password matches; the stored hash used a lower cost and should be
    /// replaced with the enclosed one
    Upgraded(HashString),
}

impl Verification {
    pub fn is_match(&self) -> bool {
        !matches!(self, Verification::Rejected)
    }
}

/// bcrypt password hasher with a fixed cost factor
///
/// Cheap to clone; clones share the diagnostic sink.
#[derive(Clone)]
pub struct PasswordHasher {
    config: HasherConfig,
    sink: Arc<dyn DiagnosticSink>,
}

impl fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordHasher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            config: HasherConfig::default(),
            sink: Arc::new(TracingSink),
        }
    }
}

impl PasswordHasher {
    /// Create a hasher that reports verification faults through `tracing`
    pub fn new(config: HasherConfig) -> HasherResult<Self> {
        Self::with_sink(config, Arc::new(TracingSink))
    }

    /// Create a hasher with a custom diagnostic sink
    pub fn with_sink(config: HasherConfig, sink: Arc<dyn DiagnosticSink>) -> HasherResult<Self> {
        config.validate()?;
        debug!(cost = config.cost, "Password hasher configured");
        Ok(Self { config, sink })
    }

    /// Create a hasher configured from `BCRYPT_COST`
    pub fn from_env() -> HasherResult<Self> {
        Self::new(HasherConfig::from_env()?)
    }

    pub fn config(&self) -> &HasherConfig {
        &self.config
    }

    /// Hash a password with a fresh random salt
    pub fn hash(&self, password: &str) -> HasherResult<HashString> {
        bcrypt::hash(truncate_password(password), self.config.cost)
            .map(HashString)
            .map_err(HasherError::Hash)
    }

    /// Verify a password against a stored hash
    ///
    /// Fails closed: a malformed or unsupported hash yields `false`, and the
    /// cause goes to the diagnostic sink rather than the caller.
    pub fn verify(&self, password: &str, stored_hash: &str) -> bool {
        match bcrypt::verify(truncate_password(password), stored_hash) {
            Ok(matched) => matched,
            Err(e) => {
                self.sink.verification_fault(&HasherError::Verification(e));
                false
            }
        }
    }

    /// Whether a stored hash should be replaced at the configured cost
    ///
    /// Hashes that cannot be parsed also need replacing.
    pub fn needs_rehash(&self, stored_hash: &str) -> bool {
        match embedded_cost(stored_hash) {
            Some(cost) => cost < self.config.cost,
            None => true,
        }
    }

    /// Verify a password and, on success, produce a replacement for an outdated hash
    pub fn verify_and_update(&self, password: &str, stored_hash: &str) -> Verification {
        if !self.verify(password, stored_hash) {
            return Verification::Rejected;
        }
        if !self.needs_rehash(stored_hash) {
            return Verification::Accepted;
        }

        debug!(
            from = ?embedded_cost(stored_hash),
            to = self.config.cost,
            "Upgrading password hash cost"
        );
        match self.hash(password) {
            Ok(upgraded) => Verification::Upgraded(upgraded),
            Err(e) => {
                self.sink.verification_fault(&e);
                Verification::Accepted
            }
        }
    }
}

fn embedded_cost(hash: &str) -> Option<u32> {
    HashParts::from_str(hash).ok().map(|parts| parts.get_cost())
}
