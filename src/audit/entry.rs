//! Audit entry data structures
//!
//! An entry records one mutation of the directory or of the credential pair.
//! Contacts have no identifier, so contact entries carry the position the
//! contact held and a snapshot of the record itself.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::models::Contact;

use super::diff::generate_diff;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// What an entry is about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "entity", rename_all = "lowercase")]
pub enum AuditSubject {
    /// A contact at its 1-based position when the operation happened
    Contact { position: usize },
    /// The administrator credential pair
    Credentials,
}

impl fmt::Display for AuditSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditSubject::Contact { position } => write!(f, "Contact #{}", position),
            AuditSubject::Credentials => write!(f, "Credentials"),
        }
    }
}

/// A single audit log entry
///
/// Credential entries only ever carry the username.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub subject: AuditSubject,

    /// `name - phone` for contacts, the username for credentials
    pub summary: String,

    /// The contact as added or as removed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<Contact>,

    /// Field changes for credential updates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn new(operation: Operation, subject: AuditSubject, summary: String) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            subject,
            summary,
            record: None,
            diff_summary: None,
        }
    }

    /// A contact appended at `position`
    pub fn contact_added(position: usize, contact: &Contact) -> Self {
        Self {
            record: Some(contact.clone()),
            ..Self::new(
                Operation::Create,
                AuditSubject::Contact { position },
                contact.to_string(),
            )
        }
    }

    /// A contact removed from `position`
    pub fn contact_deleted(position: usize, contact: &Contact) -> Self {
        Self {
            record: Some(contact.clone()),
            ..Self::new(
                Operation::Delete,
                AuditSubject::Contact { position },
                contact.to_string(),
            )
        }
    }

    /// First credential pair stored
    pub fn credentials_set(username: &str) -> Self {
        Self::new(
            Operation::Create,
            AuditSubject::Credentials,
            username.to_string(),
        )
    }

    /// Credential pair replaced
    pub fn credentials_changed(previous_username: &str, username: &str) -> Self {
        let diff = generate_diff(
            &json!({ "username": previous_username }),
            &json!({ "username": username }),
        );
        Self {
            diff_summary: diff,
            ..Self::new(
                Operation::Update,
                AuditSubject::Credentials,
                username.to_string(),
            )
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {}: {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.subject,
            self.summary
        );

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}
