//! Storage layer for the contact directory
//!
//! Plain-text files with atomic whole-file rewrites, plus the optional audit
//! log every mutation is recorded in.

pub mod contacts;
pub mod credentials;
pub mod file_io;

pub use contacts::ContactRepository;
pub use credentials::CredentialRepository;
pub use file_io::{read_lines, read_text, write_text_atomic};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{paths::DirectoryPaths, settings::Settings};
use crate::error::DirectoryError;

/// Main storage coordinator owning the contact and credential repositories
///
/// Created once in the entry point and passed by reference to the role
/// handlers.
pub struct Storage {
    paths: DirectoryPaths,
    pub contacts: ContactRepository,
    pub credentials: CredentialRepository,
    audit: Option<AuditLogger>,
    audit_failures: Vec<DirectoryError>,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: DirectoryPaths, settings: &Settings) -> Result<Self, DirectoryError> {
        paths.ensure_directories()?;

        let audit = settings
            .audit_log_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Ok(Self {
            contacts: ContactRepository::new(paths.contacts_file()),
            credentials: CredentialRepository::new(
                paths.credentials_file(),
                settings.password_scheme,
            ),
            audit,
            audit_failures: Vec::new(),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &DirectoryPaths {
        &self.paths
    }

    /// Get the audit logger, if auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Load all data from disk
    ///
    /// Returns whether administrator credentials were found.
    pub fn load_all(&mut self) -> Result<bool, DirectoryError> {
        self.contacts.load()?;
        self.credentials.load()
    }

    /// Append an entry to the audit log
    ///
    /// A failed audit write never undoes or fails the mutation it describes;
    /// the error is kept until [`Storage::take_audit_failures`] collects it.
    pub fn record(&mut self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                self.audit_failures.push(e);
            }
        }
    }

    /// Drain audit write failures since the last call
    pub fn take_audit_failures(&mut self) -> Vec<DirectoryError> {
        std::mem::take(&mut self.audit_failures)
    }
}
