//! Administrator credentials model
//!
//! Exactly one username/password pair exists per directory.

use std::fmt;

use crate::crypto::SecureString;

/// The administrator username and stored password
///
/// `password` holds whatever is on the password line of the credentials file:
/// the plain password, or an Argon2 PHC string when hashing is enabled.
pub struct Credentials {
    pub username: String,
    pub password: SecureString,
}

impl Credentials {
    /// Create a credential pair
    pub fn new(username: impl Into<String>, password: impl Into<SecureString>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Serialize as the two-line file body `username\npassword`
    pub fn to_file_contents(&self) -> String {
        format!("{}\n{}", self.username, self.password.as_str())
    }

    /// Parse the two-line file body; missing lines read as empty strings
    pub fn from_file_contents(contents: &str) -> Self {
        let mut lines = contents.lines();
        let username = lines.next().unwrap_or_default();
        let password = lines.next().unwrap_or_default();
        Self::new(username, password)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &self.password)
            .finish()
    }
}
