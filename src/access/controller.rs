//! Administrator login gate
//!
//! Each admin panel invocation creates a fresh controller in the
//! `LoggedOut` state. One successful login yields an [`AdminSession`], the
//! capability every mutating operation requires; logging out consumes it.

use chrono::{DateTime, Utc};

use crate::error::{DirectoryError, DirectoryResult};
use crate::storage::CredentialRepository;

/// Login state of one admin panel invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessState {
    LoggedOut,
    LoggedIn,
}

/// Proof of a successful administrator login
///
/// Only [`AccessController::login`] can construct one.
#[derive(Debug)]
pub struct AdminSession {
    username: String,
    started_at: DateTime<Utc>,
}

impl AdminSession {
    /// Username the session was opened with
    pub fn username(&self) -> &str {
        &self.username
    }

    /// When the login succeeded
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

/// Gates the mutating operation set behind a credential check
#[derive(Debug)]
pub struct AccessController {
    state: AccessState,
}

impl AccessController {
    /// Start a new invocation, logged out
    pub fn new() -> Self {
        Self {
            state: AccessState::LoggedOut,
        }
    }

    /// Current state
    pub fn state(&self) -> AccessState {
        self.state
    }

    /// Check a candidate pair against the stored credentials
    ///
    /// A rejected pair returns [`DirectoryError::AccessDenied`] and leaves the
    /// controller logged out.
    pub fn login(
        &mut self,
        credentials: &CredentialRepository,
        username: &str,
        password: &str,
    ) -> DirectoryResult<AdminSession> {
        if !credentials.verify(username, password)? {
            self.state = AccessState::LoggedOut;
            return Err(DirectoryError::AccessDenied);
        }

        self.state = AccessState::LoggedIn;
        Ok(AdminSession {
            username: username.to_string(),
            started_at: Utc::now(),
        })
    }

    /// End the session and discard the logged-in state
    pub fn logout(&mut self, session: AdminSession) {
        drop(session);
        self.state = AccessState::LoggedOut;
    }
}

impl Default for AccessController {
    fn default() -> Self {
        Self::new()
    }
}
