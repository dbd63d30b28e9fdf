//! Contact model
//!
//! A contact is a name and phone number pair. Contacts have no identifier of
//! their own; they are addressed by their position in the directory.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between name and phone number in `contacts.txt`
pub const FIELD_DELIMITER: char = ',';

/// A single directory entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Contact name (may be empty, may contain spaces)
    pub name: String,

    /// Phone number, stored verbatim
    pub phone_number: String,
}

impl Contact {
    /// Create a new contact
    pub fn new(name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
        }
    }

    /// Case-sensitive substring match against the name or the phone number
    pub fn matches(&self, term: &str) -> bool {
        self.name.contains(term) || self.phone_number.contains(term)
    }

    /// Serialize as one `name,phoneNumber` record (without line terminator)
    pub fn to_record_line(&self) -> String {
        format!("{}{}{}", self.name, FIELD_DELIMITER, self.phone_number)
    }

    /// Parse a record line, splitting on the first delimiter.
    ///
    /// Returns `None` for lines without a delimiter.
    pub fn parse_record_line(line: &str) -> Option<Self> {
        line.split_once(FIELD_DELIMITER)
            .map(|(name, phone_number)| Self::new(name, phone_number))
    }

    /// Whether the name would be split differently when the file is reloaded
    pub fn name_contains_delimiter(&self) -> bool {
        self.name.contains(FIELD_DELIMITER)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.phone_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_line() {
        let contact = Contact::new("Ada Lovelace", "555-0100");
        assert_eq!(contact.to_record_line(), "Ada Lovelace,555-0100");
    }

    #[test]
    fn test_parse_splits_on_first_comma() {
        let contact = Contact::parse_record_line("Ada,555,0100").unwrap();
        assert_eq!(contact.name, "Ada");
        assert_eq!(contact.phone_number, "555,0100");
    }

    #[test]
    fn test_parse_without_delimiter() {
        assert!(Contact::parse_record_line("no delimiter here").is_none());
        assert!(Contact::parse_record_line("").is_none());
    }

    #[test]
    fn test_parse_empty_fields() {
        let contact = Contact::parse_record_line(",").unwrap();
        assert_eq!(contact, Contact::new("", ""));
    }

    #[test]
    fn test_matches_is_case_sensitive() {
        let contact = Contact::new("Ann", "111");
        assert!(contact.matches("An"));
        assert!(contact.matches("11"));
        assert!(!contact.matches("ann"));
        assert!(!contact.matches("222"));
    }

    #[test]
    fn test_empty_term_matches() {
        assert!(Contact::new("Ann", "111").matches(""));
    }

    #[test]
    fn test_delimiter_in_name() {
        assert!(Contact::new("Doe, Jane", "1").name_contains_delimiter());
        assert!(!Contact::new("Jane", "1,2").name_contains_delimiter());
    }

    #[test]
    fn test_display() {
        assert_eq!(Contact::new("Ann", "111").to_string(), "Ann - 111");
    }
}
