//! Configuration module for the contact directory
//!
//! This module provides configuration management including:
//! - Data file path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::DirectoryPaths;
pub use settings::{PasswordScheme, Settings};
