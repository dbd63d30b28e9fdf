//! Access control for the administrator role
//!
//! Separates the read-only customer operations from the mutating
//! administrator operations.

pub mod controller;

pub use controller::{AccessController, AccessState, AdminSession};
