//! Password hashing using Argon2id
//!
//! Produces and checks self-describing PHC strings
//! (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`), so the parameters and salt
//! travel with the hash on the password line of the credentials file.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{DirectoryError, DirectoryResult};

/// Hash a password with a fresh random salt
pub fn hash_password(password: &str) -> DirectoryResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| DirectoryError::Credentials(format!("Password hashing failed: {}", e)))?;

    Ok(hash.to_string())
}

/// Whether a stored password line is an Argon2 PHC string
pub fn is_password_hash(stored: &str) -> bool {
    stored.starts_with("$argon2") && PasswordHash::new(stored).is_ok()
}

/// Check a candidate password against a stored PHC string
pub fn verify_password(candidate: &str, stored_hash: &str) -> DirectoryResult<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| DirectoryError::Credentials(format!("Invalid password hash: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(candidate.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("correct horse").unwrap();
        assert!(is_password_hash(&hash));
        assert!(verify_password("correct horse", &hash).unwrap());
        assert!(!verify_password("Correct horse", &hash).unwrap());
    }

    #[test]
    fn test_same_password_different_salt() {
        let hash1 = hash_password("secret").unwrap();
        let hash2 = hash_password("secret").unwrap();
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_plain_text_is_not_a_hash() {
        assert!(!is_password_hash("hunter2"));
        assert!(!is_password_hash("$argon2 but not really"));
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        let err = verify_password("secret", "not-a-hash").unwrap_err();
        assert!(matches!(err, DirectoryError::Credentials(_)));
    }
}
