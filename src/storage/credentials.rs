//! Credential repository for text storage
//!
//! Manages the administrator credential file: two lines, `username` then
//! `password`, with no trailing newline.

use std::path::{Path, PathBuf};

use crate::config::PasswordScheme;
use crate::crypto::{hash_password, is_password_hash, verify_password, SecureString};
use crate::error::DirectoryError;
use crate::models::Credentials;

use super::file_io::{read_text, write_text_atomic};

/// Repository for the singleton administrator credential pair
pub struct CredentialRepository {
    path: PathBuf,
    scheme: PasswordScheme,
    current: Option<Credentials>,
}

impl CredentialRepository {
    /// Create a new credential repository
    pub fn new(path: PathBuf, scheme: PasswordScheme) -> Self {
        Self {
            path,
            scheme,
            current: None,
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load credentials from disk
    ///
    /// Returns whether a credential file was present.
    pub fn load(&mut self) -> Result<bool, DirectoryError> {
        self.current = read_text(&self.path)?.map(|contents| Credentials::from_file_contents(&contents));
        Ok(self.current.is_some())
    }

    /// Whether credentials have been loaded or stored
    pub fn is_present(&self) -> bool {
        self.current.is_some()
    }

    /// Stored administrator username
    pub fn username(&self) -> Option<&str> {
        self.current.as_ref().map(|c| c.username.as_str())
    }

    /// Exact comparison of a candidate pair against the stored pair
    ///
    /// No trimming and no case folding. Under the plaintext scheme the
    /// password line is always compared literally. Under Argon2 a hashed line
    /// is verified and a plain line is compared literally.
    pub fn verify(&self, username: &str, password: &str) -> Result<bool, DirectoryError> {
        let Some(stored) = &self.current else {
            return Ok(false);
        };

        if stored.username != username {
            return Ok(false);
        }

        let stored_password = stored.password.as_str();
        match self.scheme {
            PasswordScheme::Argon2 if is_password_hash(stored_password) => {
                verify_password(password, stored_password)
            }
            _ => Ok(stored_password == password),
        }
    }

    /// Replace both fields and rewrite the file
    ///
    /// The in-memory pair only changes once the file write succeeded.
    pub fn store(&mut self, username: &str, password: &SecureString) -> Result<(), DirectoryError> {
        let stored_password = match self.scheme {
            PasswordScheme::Plaintext => password.clone(),
            PasswordScheme::Argon2 => SecureString::new(hash_password(password)?),
        };

        let credentials = Credentials::new(username, stored_password);
        write_text_atomic(&self.path, &credentials.to_file_contents())?;
        self.current = Some(credentials);
        Ok(())
    }
}
