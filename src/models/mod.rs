//! Core data models for the contact directory
//!
//! Contacts and the administrator credential pair.

pub mod contact;
pub mod credentials;

pub use contact::{Contact, FIELD_DELIMITER};
pub use credentials::Credentials;
