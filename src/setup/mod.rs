//! First-run setup wizard
//!
//! Prompts for the administrator credential pair when none is on disk.

pub mod wizard;

pub use wizard::SetupWizard;
