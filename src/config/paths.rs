//! Path management for the contact directory
//!
//! Every file lives directly in one base directory.
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` command-line flag
//! 2. `CONTACT_DESK_DIR` environment variable (if set)
//! 3. The current working directory

use std::path::PathBuf;

use crate::error::DirectoryError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "CONTACT_DESK_DIR";

/// Manages all paths used by the contact directory
#[derive(Debug, Clone)]
pub struct DirectoryPaths {
    /// Base directory for all data files
    base_dir: PathBuf,
}

impl DirectoryPaths {
    /// Create a new DirectoryPaths instance
    ///
    /// Uses `CONTACT_DESK_DIR` when set, the working directory otherwise.
    pub fn new() -> Self {
        let base_dir = std::env::var(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        Self { base_dir }
    }

    /// Create DirectoryPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to contacts.txt
    pub fn contacts_file(&self) -> PathBuf {
        self.base_dir.join("contacts.txt")
    }

    /// Get the path to admin_credentials.txt
    pub fn credentials_file(&self) -> PathBuf {
        self.base_dir.join("admin_credentials.txt")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("contact_desk.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("contact_audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), DirectoryError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| DirectoryError::Io(format!("Failed to create base directory: {}", e)))
    }
}

impl Default for DirectoryPaths {
    fn default() -> Self {
        Self::new()
    }
}
