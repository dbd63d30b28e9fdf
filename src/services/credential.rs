//! Credential service
//!
//! First-run initialization and the administrator's credential change.
//! Verification lives on the repository so the access controller can check a
//! login without borrowing the whole storage mutably.

use crate::access::AdminSession;
use crate::audit::AuditEntry;
use crate::crypto::SecureString;
use crate::error::{DirectoryError, DirectoryResult};
use crate::storage::Storage;

/// Service for the administrator credential pair
pub struct CredentialService<'a> {
    storage: &'a mut Storage,
}

impl<'a> CredentialService<'a> {
    /// Create a new credential service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Whether a credential pair exists
    pub fn is_initialized(&self) -> bool {
        self.storage.credentials.is_present()
    }

    /// Persist the first credential pair
    ///
    /// Fails with `Duplicate` if credentials already exist.
    pub fn initialize(&mut self, username: &str, password: &SecureString) -> DirectoryResult<()> {
        if self.is_initialized() {
            return Err(DirectoryError::Duplicate {
                entity_type: "Credentials",
                identifier: self.storage.credentials.path().display().to_string(),
            });
        }

        self.storage.credentials.store(username, password)?;
        self.storage.record(AuditEntry::credentials_set(username));

        Ok(())
    }

    /// Exact comparison against the stored pair
    pub fn verify(&self, username: &str, password: &str) -> DirectoryResult<bool> {
        self.storage.credentials.verify(username, password)
    }

    /// Overwrite both fields unconditionally
    ///
    /// The open session is the only authorization required.
    pub fn change(
        &mut self,
        _session: &AdminSession,
        username: &str,
        password: &SecureString,
    ) -> DirectoryResult<()> {
        let previous = self
            .storage
            .credentials
            .username()
            .unwrap_or_default()
            .to_string();

        self.storage.credentials.store(username, password)?;
        self.storage.record(AuditEntry::credentials_changed(&previous, username));

        Ok(())
    }
}
