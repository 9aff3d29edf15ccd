//! Password module
//!
//! bcrypt hashing and verification with the 72-byte truncation policy.

mod hasher;
mod truncate;

pub use hasher::{HashString, PasswordHasher, Verification};
pub use truncate::{truncate_password, MAX_PASSWORD_BYTES};
