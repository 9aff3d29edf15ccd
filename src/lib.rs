//! passguard - bcrypt password hashing
//!
//! Produces salted bcrypt hashes for storage and verifies plaintext passwords
//! against them. Storage, user accounts and password policy belong to the
//! caller.
//!
//! - Passwords longer than 72 UTF-8 bytes are truncated before hashing, dropping
//!   any character split by the cut.
//! - `verify` fails closed: a corrupt or unsupported stored hash is reported to a
//!   [`DiagnosticSink`] and treated as a mismatch.
//! - The cost factor comes from an explicit [`HasherConfig`], so tests can run
//!   at a low cost while production raises it over time via
//!   [`PasswordHasher::verify_and_update`].
//!
//! ```no_run
//! use passguard::{HasherConfig, PasswordHasher};
//!
//! let hasher = PasswordHasher::new(HasherConfig::default())?;
//! let stored = hasher.hash("correct horse battery staple")?;
//! assert!(hasher.verify("correct horse battery staple", stored.as_str()));
//! # Ok::<(), passguard::HasherError>(())
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod password;

pub use config::HasherConfig;
pub use diagnostics::{DiagnosticSink, NoopSink, TracingSink};
pub use error::{ConfigError, HasherError, HasherResult};
pub use password::{
    truncate_password, HashString, PasswordHasher, Verification, MAX_PASSWORD_BYTES,
};
