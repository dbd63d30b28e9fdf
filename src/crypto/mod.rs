//! Cryptographic helpers for administrator credentials
//!
//! Provides optional Argon2id password hashing and a zero-on-drop string
//! type for passwords held in memory.

pub mod password;
pub mod secure_memory;

pub use password::{hash_password, is_password_hash, verify_password};
pub use secure_memory::SecureString;
