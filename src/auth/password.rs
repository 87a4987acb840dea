//! Password hashing and verification with argon2.

use anyhow::Result;
use argon2::{password_hash::SaltString, Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

/// Hash a clear-text password into an argon2 PHC string for storage.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Verify a clear-text password against a stored argon2 PHC string.
pub fn verify_password(password_hash: &str, password: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(password_hash)
        .map_err(|e| anyhow::anyhow!("Failed to parse password hash: {}", e))?;

    let argon2 = Argon2::default();
    let result = argon2.verify_password(password.as_bytes(), &parsed_hash);

    Ok(result.is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("testpassword").unwrap();

        // Stored value is a PHC string, never the password itself
        assert!(hash.starts_with("$argon2"));
        assert_ne!(hash, "testpassword");

        assert!(verify_password(&hash, "testpassword").unwrap());
        assert!(!verify_password(&hash, "wrongpassword").unwrap());
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let first = hash_password("testpassword").unwrap();
        let second = hash_password("testpassword").unwrap();

        // Fresh salt per hash
        assert_ne!(first, second);
        assert!(verify_password(&second, "testpassword").unwrap());
    }

    #[test]
    fn test_malformed_stored_hash_is_an_error() {
        assert!(verify_password("not-a-phc-string", "testpassword").is_err());
    }
}
