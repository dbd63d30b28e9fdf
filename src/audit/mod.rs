//! Audit logging for the contact directory
//!
//! Records contact additions and deletions and credential changes in an
//! append-only, line-delimited JSON log.
//!
//! # Example
//!
//! ```rust,ignore
//! use contact_desk::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::contact_added(1, &contact))?;
//! ```
//!
//! Passwords are never written to the log; credential entries carry the
//! username only.

mod diff;
mod entry;
mod logger;

pub use entry::{AuditEntry, AuditSubject, Operation};
pub use logger::AuditLogger;
