//! Setup wizard orchestration
//!
//! Runs once, before the main menu, when the credentials file is missing.

use std::io::{BufRead, Write};

use crate::config::{paths::DirectoryPaths, settings::Settings};
use crate::error::DirectoryResult;
use crate::services::CredentialService;
use crate::shell::{report_audit_failures, Console};
use crate::storage::Storage;

/// Credential bootstrap
pub struct SetupWizard {
    paths: DirectoryPaths,
}

impl SetupWizard {
    /// Create a new setup wizard
    pub fn new(paths: DirectoryPaths) -> Self {
        Self { paths }
    }

    /// Check if setup is needed (no credentials on disk)
    pub fn needs_setup(&self, storage: &Storage) -> bool {
        !storage.credentials.is_present()
    }

    /// Prompt for and persist the first credential pair
    ///
    /// Empty values are accepted.
    pub fn run<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        storage: &mut Storage,
        settings: &mut Settings,
    ) -> DirectoryResult<()> {
        console.header("Admin Setup")?;
        console.say("No admin credentials found. Please set them now.")?;

        let username = console.read_line("Enter new username: ")?;
        let password = console.read_secret("Enter new password: ")?;

        CredentialService::new(storage).initialize(&username, &password)?;

        settings.setup_completed = true;
        settings.save(&self.paths)?;

        console.say("Admin credentials set successfully.")?;
        report_audit_failures(console, storage)
    }
}
