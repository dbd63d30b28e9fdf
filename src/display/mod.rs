//! Display formatting for terminal output
//!
//! Provides utilities for formatting contacts for terminal display.

pub mod contact;

pub use contact::{
    format_contact_list, format_contact_summary, format_search_result, EMPTY_DIRECTORY_MESSAGE,
    NO_MATCH_MESSAGE,
};
