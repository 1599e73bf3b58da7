// Password hashing with argon2id
// Decision: Store hash and salt as one opaque PHC string; parameters travel
// with the hash, so verification never needs out-of-band configuration.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{AuthError, Result};

/// Hash a password with a fresh per-user random salt.
///
/// The result is an opaque PHC-format string embedding algorithm, parameters,
/// salt, and digest. The plaintext is never stored or logged.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::store(format!("password hashing failed: {e}")))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored PHC string.
///
/// The comparison inside argon2 is constant-time; an unparseable stored hash
/// is treated as a mismatch rather than an error.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password("secret12").unwrap();
        assert!(verify_password("secret12", &hash));
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let h1 = hash_password("secret12").unwrap();
        let h2 = hash_password("secret12").unwrap();
        // Fresh salt per call: same password, different encodings
        assert_ne!(h1, h2);
    }

    #[test]
    fn test_garbage_stored_hash_is_a_mismatch() {
        assert!(!verify_password("secret12", "not-a-phc-string"));
        assert!(!verify_password("secret12", ""));
    }
}
