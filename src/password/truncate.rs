//! bcrypt input truncation
//!
//! bcrypt only looks at the first 72 bytes of its input. Passwords are cut to
//! that many UTF-8 bytes before hashing, and a character split by the cut is
//! dropped whole. Existing stored hashes depend on this exact rule.

/// Maximum number of password bytes bcrypt consumes
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Truncate a password to at most 72 UTF-8 bytes, ending on a character boundary
pub fn truncate_password(password: &str) -> &str {
    if password.len() <= MAX_PASSWORD_BYTES {
        return password;
    }

    let mut end = MAX_PASSWORD_BYTES;
    while !password.is_char_boundary(end) {
        end -= 1;
    }
    &password[..end]
}
