//! Error handling module
//!
//! Provides the error types shared by configuration loading and the hasher.

use thiserror::Error;

/// Configuration error, raised while building a [`HasherConfig`](crate::HasherConfig)
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load environment variables: {0}")]
    EnvLoad(#[from] dotenvy::Error),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),

    #[error("bcrypt cost {0} is outside the supported range 4..=31")]
    CostOutOfRange(u32),
}

/// Hasher-wide error type
#[derive(Error, Debug)]
pub enum HasherError {
    /// The hasher was built with an unusable configuration. Fatal at startup.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The bcrypt primitive failed while producing a hash.
    #[error("Failed to hash password: {0}")]
    Hash(#[source] bcrypt::BcryptError),

    /// Verification could not be carried out. Only ever reported to a
    /// [`DiagnosticSink`](crate::DiagnosticSink), never returned to callers.
    #[error("Failed to verify password: {0}")]
    Verification(#[source] bcrypt::BcryptError),
}

/// Result type alias for hasher operations
pub type HasherResult<T> = Result<T, HasherError>;
