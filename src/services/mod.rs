//! Service layer for the contact directory
//!
//! The service layer provides business logic on top of the storage layer:
//! persistence after every mutation, rollback on failed writes, and audit
//! logging.

pub mod contact;
pub mod credential;

pub use contact::{ContactService, DeleteOutcome, DirectoryView, ListedContact, Listing};
pub use credential::CredentialService;
