//! User settings for the contact directory
//!
//! Manages preferences for credential storage and audit logging.

use serde::{Deserialize, Serialize};

use super::paths::DirectoryPaths;
use crate::error::DirectoryError;

/// How the administrator password is stored in the credentials file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PasswordScheme {
    /// Stored and compared as plain text (default)
    #[default]
    Plaintext,
    /// Stored as an Argon2id PHC string
    Argon2,
}

/// User settings for the contact directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// How the administrator password is persisted
    #[serde(default)]
    pub password_scheme: PasswordScheme,

    /// Whether mutations are recorded in the audit log
    #[serde(default = "default_audit_log_enabled")]
    pub audit_log_enabled: bool,

    /// Whether the first-run credential setup has been completed
    #[serde(default)]
    pub setup_completed: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_audit_log_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            password_scheme: PasswordScheme::default(),
            audit_log_enabled: default_audit_log_enabled(),
            setup_completed: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &DirectoryPaths) -> Result<Self, DirectoryError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                DirectoryError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                DirectoryError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &DirectoryPaths) -> Result<(), DirectoryError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            DirectoryError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            DirectoryError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
