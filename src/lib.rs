//! Contact Desk - Terminal-based contact directory
//!
//! This library provides the core functionality for a small contact
//! directory with two roles: an administrator who logs in to add, delete and
//! search contacts or change the login, and a customer with read-only access.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and settings
//! - `error`: Custom error types
//! - `models`: Contact and credential records
//! - `storage`: Plain-text file storage layer
//! - `services`: Business logic layer
//! - `access`: Administrator login gate
//! - `audit`: Audit logging system
//! - `crypto`: Password hashing and zeroizing strings
//! - `display`: Terminal formatting
//! - `setup`: First-run credential wizard
//! - `shell`: Interactive menus
//!
//! # Example
//!
//! ```rust,ignore
//! use contact_desk::config::{paths::DirectoryPaths, settings::Settings};
//! use contact_desk::storage::Storage;
//!
//! let paths = DirectoryPaths::new();
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths, &settings)?;
//! storage.load_all()?;
//! ```

pub mod access;
pub mod audit;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod setup;
pub mod shell;
pub mod storage;

pub use error::DirectoryError;
